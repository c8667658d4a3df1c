//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! main.rs → logging::init_tracing (fmt subscriber + EnvFilter)
//! every request → TraceLayer span (logging::make_request_span)
//!               → INFO event on response (status, latency)
//! handlers / client → tracing events inside the request span
//! ```
//!
//! # Design Decisions
//! - Request ID and client IP flow into every event through the span
//! - `RUST_LOG` wins over the configured level

pub mod logging;

pub use logging::init_tracing;
