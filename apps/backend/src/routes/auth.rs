use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use bookclub_api_types::{Envelope, LoginRequest, RegisterRequest};

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::auth::{AuthOutcome, AuthService};
use crate::state::app_state::AppState;

fn respond(outcome: AuthOutcome) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::ok(outcome.payload, outcome.message))
}

/// Demo login: any non-blank email/password pair is accepted.
pub async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let outcome = AuthService::new(&app_state.security).login(&body, SystemTime::now())?;
    Ok(respond(outcome))
}

pub async fn register(
    body: ValidatedJson<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let outcome = AuthService::new(&app_state.security).register(&body, SystemTime::now())?;
    Ok(respond(outcome))
}
