use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::web::Bytes;
use actix_web::{FromRequest, HttpRequest};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;

/// JSON body of the write routes.
///
/// Read and parse failures become a 400 `{error}` carrying a sanitized
/// description; the raw serde message only reaches the debug log, redacted.
/// Content type is not enforced.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = Bytes::from_request(req, payload);

        Box::pin(async move {
            let body = body.await.map_err(|e| {
                warn!(error = %e, "failed to read request body");
                AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
            })?;

            parse_body(&body, &content_type).map(ValidatedJson)
        })
    }
}

fn parse_body<T: DeserializeOwned>(body: &[u8], content_type: &str) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(
            error = %Redacted(&e.to_string()),
            content_type,
            body_size = body.len(),
            "JSON parsing failed"
        );
        AppError::bad_request(ErrorCode::BadRequest, describe(&e))
    })
}

/// Sanitized, client-facing description of a body parse failure.
fn describe(error: &serde_json::Error) -> String {
    let reason = match error.classify() {
        Category::Syntax => format!("malformed JSON at line {}", error.line()),
        Category::Eof => "unexpected end of input".to_string(),
        Category::Data => "wrong types for one or more fields".to_string(),
        Category::Io => "could not read body".to_string(),
    };
    format!("Invalid data format: {reason}")
}
