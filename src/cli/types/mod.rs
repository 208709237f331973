//! Type-safe wrappers and enums for NBA stats data.

pub mod filters;
pub mod ids;
pub mod time;

pub use filters::LocationFilter;
pub use ids::{PlayerId, TeamAbbr};
pub use time::Season;
