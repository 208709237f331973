//! Game-log filtering, ordering and consistency annotation.
//!
//! [`process`] turns the provider's unordered per-game rows into the rows a
//! client sees: location and opponent filters applied, projected to the
//! public field set, sorted by date, and optionally carrying rolling
//! averages and standard deviations for points, assists and rebounds.
//!
//! Rows whose date cannot be parsed are skipped and reported in
//! [`ProcessedGameLog::rejected`]; only a batch in which *every* row is
//! unreadable fails as a whole.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::{
    analytics::rolling::{rolling, RollingSeries, ROLLING_WINDOW},
    cli::types::{LocationFilter, TeamAbbr},
    error::StatsError,
    nba::types::{GameRecord, WinLoss},
    Result,
};


/// Date layouts seen in game logs, tried in order.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%Y-%m-%d"];
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Filters and derivations requested for one game log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameLogFilters {
    pub location: LocationFilter,
    pub opponent: Option<TeamAbbr>,
    pub include_consistency: bool,
}

impl GameLogFilters {
    /// Location and opponent filters are conjunctive.
    pub fn matches(&self, matchup: &str) -> bool {
        self.location.matches(matchup)
            && self
                .opponent
                .as_ref()
                .map_or(true, |team| matchup.contains(team.as_str()))
    }
}

/// One output row. The consistency block is flattened in only when requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLogRow {
    pub game_date: NaiveDate,
    pub matchup: String,
    pub win_loss: Option<WinLoss>,
    pub points: Option<u32>,
    pub assists: Option<u32>,
    pub rebounds: Option<u32>,
    pub steals: Option<u32>,
    pub blocks: Option<u32>,
    #[serde(flatten)]
    pub consistency: Option<ConsistencyStats>,
}

impl GameLogRow {
    fn project(game_date: NaiveDate, game: &GameRecord) -> Self {
        Self {
            game_date,
            matchup: game.matchup.clone(),
            win_loss: game.win_loss,
            points: game.points,
            assists: game.assists,
            rebounds: game.rebounds,
            steals: game.steals,
            blocks: game.blocks,
            consistency: None,
        }
    }
}

/// Rolling mean / sample standard deviation over the trailing window.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsistencyStats {
    pub points_rolling_avg: Option<f64>,
    pub points_rolling_std: Option<f64>,
    pub assists_rolling_avg: Option<f64>,
    pub assists_rolling_std: Option<f64>,
    pub rebounds_rolling_avg: Option<f64>,
    pub rebounds_rolling_std: Option<f64>,
}

/// A provider row dropped because its date could not be read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    /// Position in the provider's sequence
    pub index: usize,
    pub game_id: Option<String>,
    pub game_date: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedGameLog {
    pub rows: Vec<GameLogRow>,
    pub rejected: Vec<RejectedRow>,
}

/// Parse a provider game date (`"APR 14, 2024"`, `"2024-04-14"`, `"2024-04-14T00:00:00"`).
pub fn parse_game_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}

/// Filter, project, sort and optionally annotate a game log.
///
/// Returns `MalformedUpstreamData` only when the input is non-empty and no
/// row has a readable date. An empty result is `Ok`.
pub fn process(games: &[GameRecord], filters: &GameLogFilters) -> Result<ProcessedGameLog> {
    let mut dated = Vec::with_capacity(games.len());
    let mut rejected = Vec::new();

    for (index, game) in games.iter().enumerate() {
        match parse_game_date(&game.game_date) {
            Some(date) => dated.push((date, game)),
            None => rejected.push(RejectedRow {
                index,
                game_id: game.game_id.clone(),
                game_date: game.game_date.clone(),
                reason: format!("unrecognized game date {:?}", game.game_date),
            }),
        }
    }

    if dated.is_empty() && !rejected.is_empty() {
        return Err(StatsError::malformed(format!(
            "none of {} game dates could be parsed",
            rejected.len()
        )));
    }

    let mut rows: Vec<GameLogRow> = dated
        .into_iter()
        .filter(|(_, game)| filters.matches(&game.matchup))
        .map(|(date, game)| GameLogRow::project(date, game))
        .collect();

    // stable: same-day games keep provider order
    rows.sort_by_key(|row| row.game_date);

    if filters.include_consistency {
        annotate_consistency(&mut rows);
    }

    Ok(ProcessedGameLog { rows, rejected })
}

fn annotate_consistency(rows: &mut [GameLogRow]) {
    let series_for = |stat: fn(&GameLogRow) -> Option<u32>| -> RollingSeries {
        let values: Vec<Option<u32>> = rows.iter().map(stat).collect();
        rolling(&values, ROLLING_WINDOW)
    };

    let points = series_for(|r| r.points);
    let assists = series_for(|r| r.assists);
    let rebounds = series_for(|r| r.rebounds);

    for (i, row) in rows.iter_mut().enumerate() {
        row.consistency = Some(ConsistencyStats {
            points_rolling_avg: points.mean[i],
            points_rolling_std: points.std_dev[i],
            assists_rolling_avg: assists.mean[i],
            assists_rolling_std: assists.std_dev[i],
            rebounds_rolling_avg: rebounds.mean[i],
            rebounds_rolling_std: rebounds.std_dev[i],
        });
    }
}
