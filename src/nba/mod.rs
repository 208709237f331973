//! stats.nba.com access: typed records, the data-source trait and its implementations.

pub mod fixture;
pub mod http;
pub mod source;
pub mod types;

pub use fixture::FixtureSource;
pub use http::{ClientConfig, NbaStatsClient, NBA_STATS_BASE_URL};
pub use source::StatsSource;
