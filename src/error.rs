//! Error types for the NBA stats service

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Malformed upstream data: {message}")]
    MalformedUpstreamData { message: String },

    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("Invalid season: {value}")]
    InvalidSeason { value: String },

    #[error("Invalid team abbreviation: {value}")]
    InvalidTeam { value: String },

    #[error("Invalid location: {value} (expected home, away or any)")]
    InvalidLocation { value: String },

    #[error("No seasons found for player: {name}")]
    NoSeasons { name: String },
}

impl StatsError {
    pub fn malformed(message: impl Into<String>) -> Self {
        StatsError::MalformedUpstreamData {
            message: message.into(),
        }
    }
}
