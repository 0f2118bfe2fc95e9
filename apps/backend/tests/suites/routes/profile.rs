use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_error_body_from_service_response;
use bookclub_api_types::Profile;
use bookclub_backend::auth::mint_access_token;
use bookclub_backend::infra::state::build_state;
use bookclub_backend::state::security_config::SecurityConfig;

use crate::common::read_envelope;
use crate::support::auth::{bearer_for, expired_bearer, test_security};
use crate::support::create_test_app;

#[actix_web::test]
async fn anonymous_profile_is_the_stock_demo_profile() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/user/profile").to_request();
    let resp = test::call_service(&app, req).await;

    let envelope = read_envelope::<Profile, _>(resp).await;
    assert_eq!(envelope.data.email, "demo@bookclub.ru");
    assert_eq!(envelope.data.stats.level, "Literature connoisseur");
    assert_eq!(envelope.message, "Profile loaded");
    assert!(envelope.total.is_none());
}

#[actix_web::test]
async fn valid_token_personalises_the_profile() {
    let app = create_test_app(build_state().with_security(test_security()).build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri("/api/user/profile")
        .insert_header(("Authorization", bearer_for(1_714_564_800_000, "ann@example.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let envelope = read_envelope::<Profile, _>(resp).await;
    assert_eq!(envelope.data.id, 1_714_564_800_000);
    assert_eq!(envelope.data.email, "ann@example.com");
}

#[actix_web::test]
async fn tampered_token_is_unauthorized() {
    let app = create_test_app(build_state().with_security(test_security()).build())
        .with_prod_routes()
        .build()
        .await;

    let bearer = bearer_for(42, "ann@example.com");
    // alter the first character of the signature segment
    let sig_start = bearer.rfind('.').unwrap() + 1;
    let replacement = if bearer[sig_start..].starts_with('A') { "B" } else { "A" };
    let mut bearer = bearer;
    bearer.replace_range(sig_start..sig_start + 1, replacement);

    let req = test::TestRequest::get()
        .uri("/api/user/profile")
        .insert_header(("Authorization", bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body_from_service_response(resp, StatusCode::UNAUTHORIZED, "Invalid token").await;
}

#[actix_web::test]
async fn token_signed_with_another_secret_is_unauthorized() {
    let app = create_test_app(build_state().with_security(test_security()).build())
        .with_prod_routes()
        .build()
        .await;

    let foreign = mint_access_token(
        42,
        "ann@example.com",
        std::time::SystemTime::now(),
        &SecurityConfig::new(b"some-other-secret".to_vec()),
    )
    .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/user/profile")
        .insert_header(("Authorization", format!("Bearer {foreign}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body_from_service_response(resp, StatusCode::UNAUTHORIZED, "Invalid token").await;
}

#[actix_web::test]
async fn expired_token_is_unauthorized() {
    let app = create_test_app(build_state().with_security(test_security()).build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri("/api/user/profile")
        .insert_header(("Authorization", expired_bearer(42, "ann@example.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body_from_service_response(resp, StatusCode::UNAUTHORIZED, "Token expired").await;
}

#[actix_web::test]
async fn non_bearer_scheme_is_unauthorized() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/user/profile")
        .insert_header(("Authorization", "Basic dXNlcjpwdw=="))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body_from_service_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "Missing or malformed Bearer token",
    )
    .await;
}
