#![allow(dead_code)]

use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use bookclub_api_types::Envelope;
use serde::de::DeserializeOwned;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert a 200 JSON envelope and return it.
pub async fn read_envelope<T, B>(resp: ServiceResponse<B>) -> Envelope<T>
where
    T: DeserializeOwned,
    B: actix_web::body::MessageBody,
{
    assert_eq!(resp.status().as_u16(), 200);

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let envelope: Envelope<T> = test::read_body_json(resp).await;
    assert!(envelope.success);
    envelope
}

/// Assert the three permissive CORS headers.
pub fn assert_open_cors<B>(resp: &ServiceResponse<B>) {
    let headers = resp.headers();
    let get = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_else(|| panic!("{name} header should be present"))
            .to_string()
    };

    assert_eq!(get("access-control-allow-origin"), "*");
    assert_eq!(get("access-control-allow-headers"), "Content-Type, Authorization");
    assert_eq!(
        get("access-control-allow-methods"),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
}
