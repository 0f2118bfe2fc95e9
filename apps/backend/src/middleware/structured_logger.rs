use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error as ActixError;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::Level;

use crate::trace_ctx::TraceId;

/// Emits one `request_completed` event per request: `error` for 5xx,
/// `warn` for 4xx, `info` otherwise.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// What is known about a request before it is handled.
struct Completion {
    method: String,
    path: String,
    trace_id: String,
    started: Instant,
}

impl Completion {
    fn log(self, status: StatusCode) {
        let Completion {
            method,
            path,
            trace_id,
            started,
        } = self;
        let status_code = status.as_u16();
        let duration_us = started.elapsed().as_micros() as u64;

        macro_rules! completed {
            ($level:expr) => {
                tracing::event!(
                    $level,
                    http.method = %method,
                    url.path = %path,
                    http.status_code = status_code,
                    duration_us,
                    trace_id = %trace_id,
                    "request_completed"
                )
            };
        }

        let level = level_for(status);
        if level == Level::ERROR {
            completed!(Level::ERROR);
        } else if level == Level::WARN {
            completed!(Level::WARN);
        } else {
            completed!(Level::INFO);
        }
    }
}

fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let completion = Completion {
            method: req.method().to_string(),
            path: req.path().to_string(),
            trace_id: TraceId::of(&req),
            started: Instant::now(),
        };

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            completion.log(status);
            result
        })
    }
}
