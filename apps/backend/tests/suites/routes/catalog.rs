use actix_web::test;
use bookclub_api_types::{Book, Club};
use bookclub_backend::infra::state::build_state;

use crate::common::{assert_open_cors, read_envelope};
use crate::support::create_test_app;

#[actix_web::test]
async fn books_list_declares_its_length() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/books").to_request();
    let resp = test::call_service(&app, req).await;
    assert_open_cors(&resp);

    let envelope = read_envelope::<Vec<Book>, _>(resp).await;
    assert!(!envelope.data.is_empty());
    assert_eq!(envelope.total, Some(envelope.data.len()));
    assert_eq!(envelope.message, "Books loaded successfully");
    assert!(envelope.data.iter().any(|b| b.title == "War and Peace"));
}

#[actix_web::test]
async fn clubs_list_declares_its_length() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/clubs").to_request();
    let resp = test::call_service(&app, req).await;

    let envelope = read_envelope::<Vec<Club>, _>(resp).await;
    assert_eq!(envelope.data.len(), 3);
    assert_eq!(envelope.total, Some(3));
    assert_eq!(envelope.message, "Clubs loaded successfully");
}

#[actix_web::test]
async fn books_wire_format_is_camel_case() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/books").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let first = &body["data"][0];
    assert!(first.get("ratingsCount").is_some());
    assert!(first.get("ratings_count").is_none());
    assert_eq!(body["total"], 3);
}
