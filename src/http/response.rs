//! Error responses.
//!
//! Every failure leaving the server is a JSON body `{"status": u16, "error": string}`
//! with `Content-Type: application/json`. Game data errors map to status codes
//! here, in one place.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::riot::GameDataError;

/// Errors a handler or middleware can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("request exceeded {0}s handling time")]
    Timeout(u64),

    #[error("internal server error")]
    Internal,

    #[error(transparent)]
    Upstream(#[from] GameDataError),
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(err) => match err {
                GameDataError::UnknownRegion(_) => StatusCode::BAD_REQUEST,
                GameDataError::NotFound(_) => StatusCode::NOT_FOUND,
                GameDataError::RateLimited => StatusCode::SERVICE_UNAVAILABLE,
                GameDataError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                GameDataError::Status { .. }
                | GameDataError::Transport(_)
                | GameDataError::Decode(_) => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            status: status.as_u16(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
