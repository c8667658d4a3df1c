//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware stack)
//!     → middleware/ (request ID, real IP, access log, panic recovery, timeout)
//!     → routes.rs (method + path dispatch)
//!     → handlers.rs (extract params, call GameDataClient, build JSON)
//!     → response.rs (uniform JSON errors)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod routes;
pub mod server;

pub use request::{ClientIp, RequestIdExt, X_REQUEST_ID};
pub use response::{ApiError, ApiResult};
pub use server::{AppState, HttpServer};
