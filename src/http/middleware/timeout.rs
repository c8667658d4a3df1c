//! Request timeout enforcement.
//!
//! The handler future is dropped when the deadline passes, which also drops
//! any in-flight upstream call it was awaiting. Timed-out requests return
//! 504 Gateway Timeout with a JSON body.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::response::ApiError;

/// Bound handler execution by the duration held in state.
pub async fn enforce_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(path = %path, timeout_secs = limit.as_secs(), "Request timed out");
            ApiError::Timeout(limit.as_secs()).into_response()
        }
    }
}
