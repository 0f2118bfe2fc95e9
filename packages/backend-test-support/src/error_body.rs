//! Assertions for the `{"error": "..."}` response envelope.
//!
//! Kept independent of backend types so the client suite can use them too.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorBodyLike {
    error: String,
}

/// Assert that response parts carry the error envelope.
///
/// Checks the status, that the body is exactly `{error}` with the expected
/// message, and that an `x-trace-id` header is present.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike =
        serde_json::from_slice(body_bytes).expect("response body should be an {error} envelope");
    assert_eq!(body.error, expected_message);

    let trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");
}

/// Same as [`assert_error_body_from_parts`], reading a `ServiceResponse`.
pub async fn assert_error_body_from_service_response<B>(
    resp: actix_web::dev::ServiceResponse<B>,
    expected_status: StatusCode,
    expected_message: &str,
) where
    B: actix_web::body::MessageBody,
{
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(status, &headers, &body, expected_status, expected_message);
}
