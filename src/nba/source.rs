//! The upstream data-source seam.
//!
//! Handlers and commands receive a `StatsSource` explicitly; the production
//! implementation is [`crate::nba::http::NbaStatsClient`], tests plug in
//! in-memory fakes.

use async_trait::async_trait;

use crate::{
    analytics::search::find_player,
    cli::types::{PlayerId, Season},
    nba::types::{GameRecord, PlayerBio, RosterEntry, SeasonTotals},
    Result,
};

#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Full league roster, active and retired.
    async fn list_all_players(&self) -> Result<Vec<RosterEntry>>;

    /// Regular-season totals, one row per season.
    async fn fetch_career_stats(&self, player_id: PlayerId) -> Result<Vec<SeasonTotals>>;

    /// Raw per-game rows for one season, in provider order.
    async fn fetch_game_log(&self, player_id: PlayerId, season: Season) -> Result<Vec<GameRecord>>;

    async fn fetch_player_bio(&self, player_id: PlayerId) -> Result<PlayerBio>;

    /// Resolve a full name to a player id; first match wins.
    async fn lookup_player_id(&self, full_name: &str) -> Result<Option<PlayerId>> {
        let roster = self.list_all_players().await?;
        Ok(find_player(full_name, &roster).map(|entry| entry.id))
    }
}
