//! Pure, synchronous analytics over provider data.
//!
//! - `game_log`: filter, order and annotate per-game rows
//! - `rolling`: trailing-window mean and standard deviation
//! - `search`: name suggestions and name resolution
//!
//! Nothing here performs I/O or logs; failures come back as [`crate::StatsError`].

pub mod game_log;
pub mod rolling;
pub mod search;

pub use game_log::{process, GameLogFilters, GameLogRow, ProcessedGameLog, RejectedRow};
pub use search::{find_player, rank, MAX_SUGGESTIONS};
