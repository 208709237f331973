//! Typed records decoded from stats.nba.com tabular responses.
//!
//! The provider returns every endpoint as a list of named result sets, each a
//! header row plus positional value rows. [`ResultSet::records`] turns those
//! rows into explicit structs; everything downstream works with the typed
//! shapes only.

use crate::{
    cli::types::PlayerId,
    error::{Result, StatsError},
};
use serde::{de::DeserializeOwned, de::Error, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
mod tests;

/// Deserialize a counting stat that may be null, integral, or an integral float.
fn de_opt_stat<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(v) if !v.is_finite() => Ok(None),
        Some(v) if v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) => Ok(Some(v as u32)),
        Some(v) => Err(D::Error::custom(format!(
            "stat value {v} is not a non-negative integer"
        ))),
    }
}

fn de_win_loss<'de, D>(deserializer: D) -> std::result::Result<Option<WinLoss>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.trim() {
        "W" | "w" => Some(WinLoss::Win),
        "L" | "l" => Some(WinLoss::Loss),
        _ => None,
    }))
}

/// Free-text cell read as-is; null and non-string cells become text so a
/// single bad row is rejected downstream instead of failing the whole table.
fn de_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// ROSTERSTATUS arrives as `1`/`0`, occasionally as a string or bool.
fn de_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => matches!(s.trim(), "1" | "true" | "Active"),
        _ => false,
    })
}

/// Top-level envelope shared by every stats.nba.com endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    /// Find a result set by name.
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name == name)
            .ok_or_else(|| StatsError::malformed(format!("result set {name} missing")))
    }
}

/// One named table inside a provider response
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Decode every row into `T`, keyed by the header names.
    pub fn records<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.row_set
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != self.headers.len() {
                    return Err(StatsError::malformed(format!(
                        "{} row {i} has {} values for {} headers",
                        self.name,
                        row.len(),
                        self.headers.len()
                    )));
                }
                let obj: Map<String, Value> =
                    self.headers.iter().cloned().zip(row.iter().cloned()).collect();
                serde_json::from_value(Value::Object(obj))
                    .map_err(|e| StatsError::malformed(format!("{} row {i}: {e}", self.name)))
            })
            .collect()
    }
}

/// Game outcome from the player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WinLoss {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

/// One game played by one player, as delivered upstream
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "Game_ID", default)]
    pub game_id: Option<String>,
    /// Provider text form, e.g. `"APR 14, 2024"`
    #[serde(rename = "GAME_DATE", default, deserialize_with = "de_text")]
    pub game_date: String,
    #[serde(rename = "MATCHUP", default, deserialize_with = "de_text")]
    pub matchup: String,
    #[serde(rename = "WL", default, deserialize_with = "de_win_loss")]
    pub win_loss: Option<WinLoss>,
    #[serde(rename = "PTS", default, deserialize_with = "de_opt_stat")]
    pub points: Option<u32>,
    #[serde(rename = "AST", default, deserialize_with = "de_opt_stat")]
    pub assists: Option<u32>,
    #[serde(rename = "REB", default, deserialize_with = "de_opt_stat")]
    pub rebounds: Option<u32>,
    #[serde(rename = "STL", default, deserialize_with = "de_opt_stat")]
    pub steals: Option<u32>,
    #[serde(rename = "BLK", default, deserialize_with = "de_opt_stat")]
    pub blocks: Option<u32>,
}

/// Regular-season totals for one season of a player's career
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeasonTotals {
    #[serde(rename(deserialize = "SEASON_ID"))]
    pub season_id: String,
    #[serde(rename(deserialize = "PTS"), default, deserialize_with = "de_opt_stat")]
    pub points: Option<u32>,
    #[serde(rename(deserialize = "AST"), default, deserialize_with = "de_opt_stat")]
    pub assists: Option<u32>,
    #[serde(rename(deserialize = "REB"), default, deserialize_with = "de_opt_stat")]
    pub rebounds: Option<u32>,
    #[serde(rename(deserialize = "STL"), default, deserialize_with = "de_opt_stat")]
    pub steals: Option<u32>,
    #[serde(rename(deserialize = "BLK"), default, deserialize_with = "de_opt_stat")]
    pub blocks: Option<u32>,
}

/// Biographical record from `commonplayerinfo`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerBio {
    #[serde(rename(deserialize = "DISPLAY_FIRST_LAST"))]
    pub display_name: String,
    #[serde(rename(deserialize = "TEAM_NAME"), default)]
    pub team_name: Option<String>,
    #[serde(rename(deserialize = "TEAM_ABBREVIATION"), default)]
    pub team_abbr: Option<String>,
    #[serde(rename(deserialize = "BIRTHDATE"), default)]
    pub birthdate: Option<String>,
    #[serde(rename(deserialize = "HEIGHT"), default)]
    pub height: Option<String>,
    #[serde(rename(deserialize = "WEIGHT"), default)]
    pub weight: Option<String>,
    #[serde(rename(deserialize = "SCHOOL"), default)]
    pub school: Option<String>,
    #[serde(
        rename(deserialize = "SEASON_EXP"),
        default,
        deserialize_with = "de_opt_stat"
    )]
    pub seasons_experience: Option<u32>,
    #[serde(rename(deserialize = "TEAM_ID"), default)]
    pub team_id: Option<u64>,
}

/// One entry of the league-wide player roster
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterEntry {
    #[serde(rename(deserialize = "PERSON_ID"))]
    pub id: PlayerId,
    #[serde(rename(deserialize = "DISPLAY_FIRST_LAST"))]
    pub full_name: String,
    #[serde(rename(deserialize = "ROSTERSTATUS"), default, deserialize_with = "de_flag")]
    pub is_active: bool,
}

impl RosterEntry {
    pub fn new(id: u64, full_name: impl Into<String>, is_active: bool) -> Self {
        Self {
            id: PlayerId::new(id),
            full_name: full_name.into(),
            is_active,
        }
    }
}
