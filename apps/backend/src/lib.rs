#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::{mint_access_token, verify_access_token, Claims};
pub use config::ServerConfig;
pub use error::AppError;
pub use extractors::{OptionalClaims, ValidatedJson};
pub use infra::state::build_state;
pub use middleware::{OpenCors, RequestTrace, StructuredLogger, TraceSpan};
pub use routes::ApiRoute;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
