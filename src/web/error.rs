use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;
use crate::roster_actor::ActivityError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Failure of a single request, rendered as `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    Roster(ActivityError),
    /// Rejected before reaching the store.
    InvalidInput(String),
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        Self::Roster(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Roster(ActivityError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Roster(e) if e.is_conflict() => StatusCode::BAD_REQUEST,
            Self::Roster(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::Roster(e) => {
                if status.is_server_error() {
                    error!(error = %e, "Roster request failed");
                }
                e.to_string()
            }
            Self::InvalidInput(msg) => msg,
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
