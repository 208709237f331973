//! CLI argument definitions, parsing and configuration resolution.

pub mod types;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use types::{LocationFilter, Season, TeamAbbr};

use crate::{
    nba::{ClientConfig, FixtureSource, NbaStatsClient, StatsSource, NBA_STATS_BASE_URL},
    Result,
};

/// Environment variable naming the stats.nba.com base URL.
pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
/// Environment variable naming the HTTP listen address.
pub const BIND_ENV_VAR: &str = "NBA_STATS_BIND";
/// Environment variable overriding the upstream User-Agent.
pub const USER_AGENT_ENV_VAR: &str = "NBA_STATS_USER_AGENT";

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Where player data comes from, shared by every command.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// stats.nba.com base URL (or set `NBA_STATS_BASE_URL`).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Upstream request timeout in seconds.
    #[clap(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Serve data from a local JSON fixture instead of stats.nba.com.
    #[clap(long)]
    pub fixture: Option<PathBuf>,
}

impl SourceArgs {
    /// Build the configured data source.
    pub fn build_source(&self) -> Result<Arc<dyn StatsSource>> {
        if let Some(path) = &self.fixture {
            return Ok(Arc::new(FixtureSource::from_path(path)?));
        }
        let config = ClientConfig {
            base_url: resolve_base_url(self.base_url.clone()),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: std::env::var(USER_AGENT_ENV_VAR).ok(),
        };
        Ok(Arc::new(NbaStatsClient::new(config)?))
    }
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Filtered game log for one player and season, printed as JSON.
    PlayerGames {
        #[clap(flatten)]
        source: SourceArgs,

        /// Player full name.
        #[clap(long, short)]
        name: String,

        /// Season start year or label (e.g. 2024 or 2024-25).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Home/away filter.
        #[clap(long, short, value_enum, default_value_t = LocationFilter::Any)]
        location: LocationFilter,

        /// Opponent team abbreviation (e.g. BOS).
        #[clap(long)]
        vs: Option<TeamAbbr>,

        /// Add rolling averages and standard deviations.
        #[clap(long)]
        include_consistency: bool,
    },

    /// Autocomplete suggestions for a partial name.
    Suggestions {
        #[clap(flatten)]
        source: SourceArgs,

        /// Partial player name.
        #[clap(long, short)]
        query: String,
    },

    /// Career regular-season totals.
    PlayerStats {
        #[clap(flatten)]
        source: SourceArgs,

        /// Player full name.
        #[clap(long, short)]
        name: String,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "NBA player statistics service")]
pub struct NbaStats {
    /// Log filter used when `RUST_LOG` is not set.
    #[clap(long, global = true, default_value = "info")]
    pub log_level: String,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        #[clap(flatten)]
        source: SourceArgs,

        /// Listen address (or set `NBA_STATS_BIND`).
        #[clap(long)]
        bind: Option<String>,
    },

    /// Query data once and print it
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

/// Flag value, else `NBA_STATS_BASE_URL`, else the public endpoint.
pub fn resolve_base_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| NBA_STATS_BASE_URL.to_string())
}

/// Flag value, else `NBA_STATS_BIND`, else [`DEFAULT_BIND`].
pub fn resolve_bind_addr(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var(BIND_ENV_VAR).ok())
        .filter(|addr| !addr.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BIND.to_string())
}
