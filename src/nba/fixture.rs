//! [`StatsSource`] served from a local JSON document.
//!
//! Used for offline runs (`--fixture`) and tests. Records use the provider's
//! column names, so a fixture can be assembled from captured responses:
//!
//! ```json
//! {
//!   "players": [{ "PERSON_ID": 2544, "DISPLAY_FIRST_LAST": "LeBron James", "ROSTERSTATUS": 1 }],
//!   "career_stats": { "2544": [{ "SEASON_ID": "2023-24", "PTS": 1822 }] },
//!   "game_logs": { "2544": { "2023-24": [{ "GAME_DATE": "APR 14, 2024", "MATCHUP": "LAL @ NOP" }] } },
//!   "bios": { "2544": { "DISPLAY_FIRST_LAST": "LeBron James" } }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    cli::types::{PlayerId, Season},
    error::StatsError,
    nba::{
        source::StatsSource,
        types::{GameRecord, PlayerBio, RosterEntry, SeasonTotals},
    },
    Result,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureSource {
    #[serde(default)]
    players: Vec<RosterEntry>,
    #[serde(default)]
    career_stats: HashMap<u64, Vec<SeasonTotals>>,
    #[serde(default)]
    game_logs: HashMap<u64, HashMap<Season, Vec<GameRecord>>>,
    #[serde(default)]
    bios: HashMap<u64, PlayerBio>,
}

impl FixtureSource {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn with_player(mut self, entry: RosterEntry) -> Self {
        self.players.push(entry);
        self
    }

    pub fn with_career_stats(mut self, player_id: PlayerId, seasons: Vec<SeasonTotals>) -> Self {
        self.career_stats.insert(player_id.as_u64(), seasons);
        self
    }

    pub fn with_game_log(mut self, player_id: PlayerId, season: Season, games: Vec<GameRecord>) -> Self {
        self.game_logs
            .entry(player_id.as_u64())
            .or_default()
            .insert(season, games);
        self
    }

    pub fn with_bio(mut self, player_id: PlayerId, bio: PlayerBio) -> Self {
        self.bios.insert(player_id.as_u64(), bio);
        self
    }
}

#[async_trait]
impl StatsSource for FixtureSource {
    async fn list_all_players(&self) -> Result<Vec<RosterEntry>> {
        Ok(self.players.clone())
    }

    async fn fetch_career_stats(&self, player_id: PlayerId) -> Result<Vec<SeasonTotals>> {
        Ok(self
            .career_stats
            .get(&player_id.as_u64())
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_game_log(&self, player_id: PlayerId, season: Season) -> Result<Vec<GameRecord>> {
        Ok(self
            .game_logs
            .get(&player_id.as_u64())
            .and_then(|seasons| seasons.get(&season))
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_player_bio(&self, player_id: PlayerId) -> Result<PlayerBio> {
        self.bios
            .get(&player_id.as_u64())
            .cloned()
            .ok_or_else(|| StatsError::PlayerNotFound {
                name: player_id.to_string(),
            })
    }
}
