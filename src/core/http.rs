//! HTTP utilities for stats.nba.com communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Build the header set stats.nba.com expects on every request.
///
/// The provider silently drops requests that lack a browser-like
/// `User-Agent` and its `x-nba-stats-*` headers. `user_agent` replaces the
/// default agent string when given.
pub fn stats_header_map(user_agent: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );

    let agent = match user_agent {
        Some(custom) => HeaderValue::from_str(custom)?,
        None => HeaderValue::from_static(DEFAULT_USER_AGENT),
    };
    h.insert(USER_AGENT, agent);
    Ok(h)
}
