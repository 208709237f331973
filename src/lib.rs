//! NBA Player Statistics Library
//!
//! Serves basketball player statistics sourced from stats.nba.com: career
//! totals, season lists, biographies, name suggestions and filtered game logs.
//!
//! ## Features
//!
//! - **Game-Log Analytics**: Home/away and opponent filters, chronological
//!   ordering and rolling five-game consistency statistics
//! - **Name Suggestions**: Active-first, deduplicated autocomplete over the league roster
//! - **Typed Upstream Records**: Tabular provider responses decoded into explicit structs
//! - **Pluggable Data Source**: stats.nba.com client or a local JSON fixture
//! - **HTTP API**: axum routes with JSON error bodies
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::{
//!     analytics::game_log::GameLogFilters,
//!     commands::player_games::{handle_player_games, PlayerGamesParams},
//!     nba::{ClientConfig, NbaStatsClient},
//!     LocationFilter, Season,
//! };
//!
//! # async fn example() -> nba_stats::Result<()> {
//! let client = NbaStatsClient::new(ClientConfig::default())?;
//! let params = PlayerGamesParams {
//!     name: "LeBron James".to_string(),
//!     season: Season::new(2023),
//!     filters: GameLogFilters {
//!         location: LocationFilter::Home,
//!         opponent: None,
//!         include_consistency: true,
//!     },
//! };
//!
//! let log = handle_player_games(&client, &params).await?;
//! println!("{}", serde_json::to_string_pretty(&log.rows)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_STATS_BIND=0.0.0.0:5000
//! export NBA_STATS_BASE_URL=https://stats.nba.com/stats
//! ```

pub mod analytics;
pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;

// Re-export commonly used types
pub use cli::types::{LocationFilter, PlayerId, Season, TeamAbbr};
pub use error::{Result, StatsError};
pub use nba::types::{GameRecord, PlayerBio, RosterEntry, SeasonTotals, WinLoss};
