//! Request handlers shared by the HTTP API and the CLI.
//!
//! Each handler takes the data source explicitly, resolves the player,
//! fetches what it needs and hands the rows to [`crate::analytics`].

pub mod player_games;
pub mod player_profile;
pub mod suggestions;

#[cfg(test)]
mod tests;

use crate::{cli::types::PlayerId, nba::StatsSource, Result, StatsError};

/// Reject a missing or blank required parameter.
pub fn require_param(name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(StatsError::MissingParameter {
            name: name.to_string(),
        }),
    }
}

/// Resolve a player name through the source, or fail with `PlayerNotFound`.
pub async fn resolve_player_id(source: &dyn StatsSource, name: &str) -> Result<PlayerId> {
    source
        .lookup_player_id(name)
        .await?
        .ok_or_else(|| StatsError::PlayerNotFound {
            name: name.to_string(),
        })
}
