//! Filter types shared by the CLI and the HTTP query parameters.

use crate::error::StatsError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Matchup marker the provider uses for home games (`"LAL vs. BOS"`).
pub const HOME_MARKER: &str = "vs.";
/// Matchup marker the provider uses for away games (`"LAL @ BOS"`).
pub const AWAY_MARKER: &str = "@";

/// Home/away filter for game logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LocationFilter {
    /// Games played at home
    Home,
    /// Games played on the road
    Away,
    /// No location filtering
    #[default]
    Any,
}

impl LocationFilter {
    /// Whether a matchup string passes this filter.
    pub fn matches(&self, matchup: &str) -> bool {
        match self {
            LocationFilter::Home => matchup.contains(HOME_MARKER),
            LocationFilter::Away => matchup.contains(AWAY_MARKER),
            LocationFilter::Any => true,
        }
    }
}

impl fmt::Display for LocationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LocationFilter::Home => "home",
            LocationFilter::Away => "away",
            LocationFilter::Any => "any",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for LocationFilter {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(LocationFilter::Home),
            "away" => Ok(LocationFilter::Away),
            "any" | "" => Ok(LocationFilter::Any),
            _ => Err(StatsError::InvalidLocation {
                value: s.to_string(),
            }),
        }
    }
}
