use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::StatsError;

impl StatsError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StatsError::PlayerNotFound { .. } | StatsError::NoSeasons { .. } => {
                StatusCode::NOT_FOUND
            }
            StatsError::MissingParameter { .. }
            | StatsError::InvalidSeason { .. }
            | StatsError::InvalidTeam { .. }
            | StatsError::InvalidLocation { .. } => StatusCode::BAD_REQUEST,
            StatsError::Http(_) | StatsError::Json(_) | StatsError::MalformedUpstreamData { .. } => {
                StatusCode::BAD_GATEWAY
            }
            StatsError::Io(_) | StatsError::InvalidHeader(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            StatsError::PlayerNotFound { .. } => "Player not found".to_string(),
            StatsError::NoSeasons { .. } => "No seasons found for player".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "request failed");
        }
        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}
