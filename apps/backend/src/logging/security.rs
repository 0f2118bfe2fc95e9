use tracing::warn;

use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A login or registration submission rejected before a user was fabricated.
pub fn auth_rejected(route: &str, reason: ErrorCode, email: Option<&str>) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_AUTH_REJECTED",
        %trace_id,
        route,
        %reason,
        email = %email.map(Redacted).unwrap_or(Redacted("")),
        "Authentication submission rejected"
    );
}

/// A bearer token that failed verification.
pub fn token_rejected(reason: ErrorCode) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        %reason,
        "Bearer token rejected"
    );
}
