use actix_web::{web, HttpResponse, Result};
use bookclub_api_types::Envelope;

use crate::error::AppError;
use crate::extractors::OptionalClaims;
use crate::services::profile::profile_for;
use crate::state::app_state::AppState;

pub async fn profile(
    claims: OptionalClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let profile = profile_for(&app_state.catalog, claims.0.as_ref());
    Ok(HttpResponse::Ok().json(Envelope::ok(profile, "Profile loaded")))
}
