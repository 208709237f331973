//! Filtered, date-ordered game logs for one player and season.

use crate::{
    analytics::game_log::{process, GameLogFilters, ProcessedGameLog},
    cli::types::Season,
    nba::StatsSource,
    Result,
};

use super::resolve_player_id;

/// Parameters for [`handle_player_games`].
#[derive(Debug, Clone, Default)]
pub struct PlayerGamesParams {
    pub name: String,
    pub season: Season,
    pub filters: GameLogFilters,
}

pub async fn handle_player_games(
    source: &dyn StatsSource,
    params: &PlayerGamesParams,
) -> Result<ProcessedGameLog> {
    let player_id = resolve_player_id(source, &params.name).await?;
    let games = source.fetch_game_log(player_id, params.season).await?;
    process(&games, &params.filters)
}
