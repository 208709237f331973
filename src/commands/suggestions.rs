use crate::{analytics::search::rank, nba::StatsSource, Result};

/// Ranked name suggestions for an autocomplete query.
///
/// An empty query answers immediately without touching the roster.
pub async fn handle_suggestions(source: &dyn StatsSource, query: &str) -> Result<Vec<String>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }
    let roster = source.list_all_players().await?;
    Ok(rank(query, &roster))
}
