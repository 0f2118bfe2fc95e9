use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{http::header, web, FromRequest, HttpRequest};

use crate::auth::{verify_access_token, Claims};
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Claims from an optional `Authorization: Bearer <token>` header.
///
/// No header yields `None`. A header that is present but malformed, badly
/// signed or expired is rejected with 401 rather than silently ignored.
#[derive(Debug, Clone)]
pub struct OptionalClaims(pub Option<Claims>);

/// Token part of a `Bearer <token>` header value.
fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

impl FromRequest for OptionalClaims {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let Some(auth_header) = req.headers().get(header::AUTHORIZATION) else {
                return Ok(OptionalClaims(None));
            };

            let token = auth_header
                .to_str()
                .ok()
                .and_then(parse_bearer)
                .ok_or_else(|| {
                    let err = AppError::unauthorized_missing_bearer();
                    security::token_rejected(err.code());
                    err
                })?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not found"))?;

            verify_access_token(token, &app_state.security)
                .map(|claims| OptionalClaims(Some(claims)))
                .inspect_err(|err| security::token_rejected(err.code()))
        })
    }
}
