//! Default services: unknown paths and wrong methods.

use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::error::AppError;

/// App-level default service.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    debug!(method = %req.method(), path = %req.path(), "no route matched");
    Err(AppError::endpoint_not_found())
}

/// Per-resource default service for a known path hit with the wrong method.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    debug!(method = %req.method(), path = %req.path(), "method not allowed");
    Err(AppError::method_not_allowed())
}
