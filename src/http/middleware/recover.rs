//! Panic recovery.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::http::response::ApiError;

/// Turn a caught panic into a 500 JSON response. Used with `CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %message, "Handler panicked");
    ApiError::Internal.into_response()
}
