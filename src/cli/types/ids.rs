//! ID types for NBA stats data.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for stats.nba.com person IDs.
///
/// # Examples
///
/// ```rust
/// use nba_stats::PlayerId;
///
/// let player_id = PlayerId::new(2544);
/// assert_eq!(player_id.as_u64(), 2544);
/// assert_eq!(player_id.to_string(), "2544");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| StatsError::malformed(format!("invalid player id: {s}")))
    }
}

/// Three-letter team abbreviation, always stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TeamAbbr(String);

impl TeamAbbr {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamAbbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TeamAbbr {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(StatsError::InvalidTeam {
                value: s.to_string(),
            })
        }
    }
}

impl<'de> Deserialize<'de> for TeamAbbr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
