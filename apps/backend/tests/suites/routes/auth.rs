use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::{assert_error_body_from_service_response, unique_email};
use bookclub_api_types::AuthPayload;
use bookclub_backend::auth::verify_access_token;
use bookclub_backend::infra::state::build_state;
use serde_json::json;

use crate::common::read_envelope;
use crate::support::auth::test_security;
use crate::support::create_test_app;

#[actix_web::test]
async fn login_echoes_email_and_issues_a_verifiable_token() {
    let app = create_test_app(build_state().with_security(test_security()).build())
        .with_prod_routes()
        .build()
        .await;

    let email = unique_email("reader");
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": email, "password": "anything"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let envelope = read_envelope::<AuthPayload, _>(resp).await;
    let user = &envelope.data.user;
    assert_eq!(user.email, email);
    assert!(email.starts_with(&user.first_name));
    assert_eq!(envelope.message, format!("Welcome, {}!", user.first_name));
    assert!(user.avatar.starts_with("https://ui-avatars.com/api/?name="));

    let claims = verify_access_token(&envelope.data.token, &test_security()).unwrap();
    assert_eq!(claims.email, email);
    assert_eq!(claims.user_id(), Some(user.id));
}

#[actix_web::test]
async fn login_without_password_is_rejected() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    for body in [
        json!({"email": "ann@example.com"}),
        json!({"password": "secret"}),
        json!({"email": "", "password": ""}),
        json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_body_from_service_response(
            resp,
            StatusCode::BAD_REQUEST,
            "Email and password are required",
        )
        .await;
    }
}

#[actix_web::test]
async fn login_echoes_padded_email_unchanged() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": " ann@example.com ", "password": "secret"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let envelope = read_envelope::<AuthPayload, _>(resp).await;
    assert_eq!(envelope.data.user.email, " ann@example.com ");
    assert_eq!(envelope.data.user.first_name, " ann");
}

#[actix_web::test]
async fn whitespace_only_fields_count_as_present() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "  ", "password": " "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"email": " ", "username": " ", "password": " "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid data format"));
}

#[actix_web::test]
async fn register_without_username_is_rejected() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"email": "ann@example.com", "password": "secret1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body_from_service_response(
        resp,
        StatusCode::BAD_REQUEST,
        "Email, username and password are required",
    )
    .await;
}

#[actix_web::test]
async fn register_grants_ten_points() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "email": "ann@example.com",
            "username": "bookworm",
            "firstName": "Ann",
            "lastName": "Lee",
            "password": "secret1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let envelope = read_envelope::<AuthPayload, _>(resp).await;
    let user = envelope.data.user;
    assert_eq!(user.stats.points, 10);
    assert_eq!(user.stats.books_read, 0);
    assert_eq!(user.username.as_deref(), Some("bookworm"));
    assert_eq!(user.first_name, "Ann");
    assert_eq!(envelope.message, "Registration complete! Welcome, Ann!");
}

#[actix_web::test]
async fn register_defaults_first_name_to_username() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "email": "ann@example.com",
            "username": "bookworm",
            "password": "secret1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let envelope = read_envelope::<AuthPayload, _>(resp).await;
    assert_eq!(envelope.data.user.first_name, "bookworm");
    assert_eq!(envelope.data.user.last_name, "");
}
