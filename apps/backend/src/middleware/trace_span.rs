//! Per-request `tracing` span.
//!
//! Every event emitted while the request is handled inherits `trace_id`,
//! `method` and `path`; `status` is recorded on the span once the response
//! is known. Reads the id `RequestTrace` stored, so it has to be wrapped
//! inside it:
//!
//! App::new()
//!     .wrap(TraceSpan)
//!     .wrap(RequestTrace)

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error as ActixError;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::field::Empty;
use tracing::{info_span, Instrument};

use crate::trace_ctx::TraceId;

pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let span = info_span!(
            "request",
            trace_id = %TraceId::of(&req),
            method = %req.method(),
            path = %req.path(),
            status = Empty,
        );

        let fut = self.service.call(req).instrument(span.clone());

        Box::pin(async move {
            let result = fut.await;
            if let Ok(res) = &result {
                span.record("status", res.status().as_u16());
            }
            result
        })
    }
}
