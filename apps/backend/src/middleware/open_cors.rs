//! Open CORS middleware
//!
//! The demo endpoint is meant to be called from any static page, so every
//! response advertises:
//! - Access-Control-Allow-Origin: *
//! - Access-Control-Allow-Headers: Content-Type, Authorization
//! - Access-Control-Allow-Methods: GET, POST, PUT, DELETE, OPTIONS
//!
//! `OPTIONS` requests never reach routing: they are answered here with 200
//! and an empty body, whatever the path.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{header, Method};
use actix_web::{Error as ActixError, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

pub struct OpenCors;

impl<S, B> Transform<S, ServiceRequest> for OpenCors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type InitError = ();
    type Transform = OpenCorsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OpenCorsMiddleware { service }))
    }
}

pub struct OpenCorsMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for OpenCorsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if *req.method() == Method::OPTIONS {
            debug!(path = %req.path(), "answering preflight");
            let mut res = req
                .into_response(HttpResponse::Ok().finish())
                .map_into_right_body();
            insert_cors_headers(res.headers_mut());
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?.map_into_left_body();
            insert_cors_headers(res.headers_mut());
            Ok(res)
        })
    }
}

fn insert_cors_headers(headers: &mut header::HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        header::HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        header::HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        header::HeaderValue::from_static(ALLOW_METHODS),
    );
}
