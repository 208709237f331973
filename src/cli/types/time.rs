//! Season type for NBA stats queries.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An NBA season, identified by the calendar year it starts in.
///
/// Accepts either the start year (`2024`) or the provider's season label
/// (`2024-25`) and always renders the label form.
///
/// ```rust
/// use nba_stats::Season;
///
/// let season: Season = "2023".parse().unwrap();
/// assert_eq!(season.to_string(), "2023-24");
/// assert_eq!("1999-00".parse::<Season>().unwrap().start_year(), 1999);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season(u16);

impl Season {
    pub const EARLIEST: u16 = 1946;

    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, (self.0 + 1) % 100)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StatsError::InvalidSeason {
            value: s.to_string(),
        };
        let trimmed = s.trim();
        let (year, suffix) = match trimmed.split_once('-') {
            Some((year, suffix)) => (year, Some(suffix)),
            None => (trimmed, None),
        };

        if year.len() != 4 {
            return Err(invalid());
        }
        let start: u16 = year.parse().map_err(|_| invalid())?;
        if !(Self::EARLIEST..=9998).contains(&start) {
            return Err(invalid());
        }

        if let Some(suffix) = suffix {
            let end: u16 = suffix.parse().map_err(|_| invalid())?;
            if suffix.len() != 2 || end != (start + 1) % 100 {
                return Err(invalid());
            }
        }

        Ok(Self(start))
    }
}

impl Serialize for Season {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
