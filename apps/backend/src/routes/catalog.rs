use actix_web::{web, HttpResponse, Result};
use bookclub_api_types::Envelope;

use crate::error::AppError;
use crate::state::app_state::AppState;

pub async fn books(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let books = app_state.catalog.books.clone();
    Ok(HttpResponse::Ok().json(Envelope::list(books, "Books loaded successfully")))
}

pub async fn clubs(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let clubs = app_state.catalog.clubs.clone();
    Ok(HttpResponse::Ok().json(Envelope::list(clubs, "Clubs loaded successfully")))
}
