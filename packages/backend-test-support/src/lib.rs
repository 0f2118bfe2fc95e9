//! Backend test support utilities
//!
//! Helpers shared by the backend and client test suites: idempotent logging
//! initialization, assertions for the `{error}` response envelope and unique
//! test data.

pub mod error_body;
pub mod logging;
pub mod unique_helpers;

pub use error_body::{assert_error_body_from_parts, assert_error_body_from_service_response};
pub use unique_helpers::unique_email;
