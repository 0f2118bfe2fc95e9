//! Request trace ids.
//!
//! `RequestTrace` mints a [`TraceId`], stores it in the request extensions
//! and installs it as task-local context for the downstream call, so error
//! rendering can read it without threading it through every signature.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;

use actix_web::dev::ServiceRequest;
use actix_web::HttpMessage;
use tokio::task_local;
use uuid::Uuid;

const UNKNOWN: &str = "unknown";

/// Trace id of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(String);

impl TraceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id `RequestTrace` attached to `req`, or `"unknown"` when the
    /// middleware is not mounted.
    pub fn of(req: &ServiceRequest) -> String {
        req.extensions()
            .get::<TraceId>()
            .map_or_else(|| UNKNOWN.to_string(), |id| id.0.clone())
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Trace id of the current request, or `"unknown"` outside of one.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` installed as the current trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
