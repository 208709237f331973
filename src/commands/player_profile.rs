//! Career totals, season lists and biography lookups.
//!
//! These are reshaping pass-throughs of single provider tables.

use crate::{
    nba::{
        types::{PlayerBio, SeasonTotals},
        StatsSource,
    },
    Result, StatsError,
};

use super::resolve_player_id;

/// Regular-season totals per season, in provider order.
///
/// A player with no career rows is reported as `PlayerNotFound`.
pub async fn handle_player_stats(source: &dyn StatsSource, name: &str) -> Result<Vec<SeasonTotals>> {
    let totals = career_totals(source, name).await?;
    if totals.is_empty() {
        return Err(StatsError::PlayerNotFound {
            name: name.to_string(),
        });
    }
    Ok(totals)
}

/// Distinct season ids the player appeared in, newest first.
///
/// A player with no seasons is `NoSeasons`.
pub async fn handle_player_seasons(source: &dyn StatsSource, name: &str) -> Result<Vec<String>> {
    let totals = career_totals(source, name).await?;
    let seasons = distinct_seasons_desc(totals);
    if seasons.is_empty() {
        return Err(StatsError::NoSeasons {
            name: name.to_string(),
        });
    }
    Ok(seasons)
}

pub async fn handle_player_bio(source: &dyn StatsSource, name: &str) -> Result<PlayerBio> {
    let player_id = resolve_player_id(source, name).await?;
    source.fetch_player_bio(player_id).await
}

async fn career_totals(source: &dyn StatsSource, name: &str) -> Result<Vec<SeasonTotals>> {
    let player_id = resolve_player_id(source, name).await?;
    source.fetch_career_stats(player_id).await
}

fn distinct_seasons_desc(totals: Vec<SeasonTotals>) -> Vec<String> {
    let mut seasons: Vec<String> = totals
        .into_iter()
        .map(|t| t.season_id)
        .filter(|s| !s.trim().is_empty())
        .collect();
    seasons.sort_unstable_by(|a, b| b.cmp(a));
    seasons.dedup();
    seasons
}
