//! Structured logging.
//!
//! The access log is the `tower_http` trace span made here plus the INFO
//! response event configured in `server.rs`: method, path, request id,
//! client ip, then status and latency.

use axum::{body::Body, http::Request};
use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::http::request::{ClientIp, RequestIdExt};

/// Install the global subscriber. `RUST_LOG` overrides `log_level`.
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(default_filter(log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("league_server={level},tower_http={level}", level = log_level).into()
    })
}

/// Span wrapping a single request.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request.request_id().unwrap_or("unknown");
    let client_ip = request
        .extensions()
        .get::<ClientIp>()
        .map(|ClientIp(ip)| ip.to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        client_ip = %client_ip,
    )
}
