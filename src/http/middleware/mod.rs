//! Request middleware.
//!
//! Layer order, outermost first (see `server::build_router`):
//! CORS → request ID → real IP → access log → panic recovery → timeout → handler

pub mod real_ip;
pub mod recover;
pub mod timeout;

pub use real_ip::real_ip;
pub use recover::panic_response;
pub use timeout::enforce_timeout;
