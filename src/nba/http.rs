use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::{
    cli::types::{PlayerId, Season},
    core::stats_header_map,
    error::StatsError,
    nba::{
        source::StatsSource,
        types::{GameRecord, PlayerBio, RosterEntry, SeasonTotals, StatsResponse},
    },
    Result,
};


/// Base path for the stats.nba.com JSON API.
pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`NbaStatsClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: NBA_STATS_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

/// [`StatsSource`] backed by stats.nba.com.
///
/// The league roster is fetched once per client and reused, since the
/// provider treats it as a static table; every other call goes upstream.
pub struct NbaStatsClient {
    client: Client,
    base_url: String,
    roster: OnceCell<Vec<RosterEntry>>,
}

impl NbaStatsClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(stats_header_map(config.user_agent.as_deref())?)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            roster: OnceCell::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_stats(&self, endpoint: &str, params: &[(&str, String)]) -> Result<StatsResponse> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, ?params, "requesting stats.nba.com");

        let body = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_roster(&self) -> Result<Vec<RosterEntry>> {
        let params = [
            ("LeagueID", "00".to_string()),
            ("Season", Season::default().to_string()),
            ("IsOnlyCurrentSeason", "0".to_string()),
        ];
        let res = self.get_stats("commonallplayers", &params).await?;
        let roster: Vec<RosterEntry> = res.result_set("CommonAllPlayers")?.records()?;
        debug!(players = roster.len(), "loaded league roster");
        Ok(roster)
    }
}

#[async_trait]
impl StatsSource for NbaStatsClient {
    async fn list_all_players(&self) -> Result<Vec<RosterEntry>> {
        let roster = self
            .roster
            .get_or_try_init(|| self.fetch_roster())
            .await?;
        Ok(roster.clone())
    }

    async fn fetch_career_stats(&self, player_id: PlayerId) -> Result<Vec<SeasonTotals>> {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("PerMode", "Totals".to_string()),
            ("LeagueID", "00".to_string()),
        ];
        let res = self.get_stats("playercareerstats", &params).await?;
        res.result_set("SeasonTotalsRegularSeason")?.records()
    }

    async fn fetch_game_log(&self, player_id: PlayerId, season: Season) -> Result<Vec<GameRecord>> {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", "Regular Season".to_string()),
        ];
        let res = self.get_stats("playergamelog", &params).await?;
        res.result_set("PlayerGameLog")?.records()
    }

    async fn fetch_player_bio(&self, player_id: PlayerId) -> Result<PlayerBio> {
        let params = [("PlayerID", player_id.to_string())];
        let res = self.get_stats("commonplayerinfo", &params).await?;
        let mut rows: Vec<PlayerBio> = res.result_set("CommonPlayerInfo")?.records()?;
        if rows.is_empty() {
            return Err(StatsError::PlayerNotFound {
                name: player_id.to_string(),
            });
        }
        Ok(rows.swap_remove(0))
    }
}
