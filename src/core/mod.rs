//! Core utilities for the NBA stats service
//!
//! - `http`: request headers required by stats.nba.com

pub mod http;

pub use http::{stats_header_map, DEFAULT_USER_AGENT};
