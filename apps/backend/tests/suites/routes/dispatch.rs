use actix_web::http::{Method, StatusCode};
use actix_web::test;
use backend_test_support::assert_error_body_from_service_response;
use bookclub_backend::infra::state::build_state;
use bookclub_backend::routes::ApiRoute;

use crate::common::assert_open_cors;
use crate::support::create_test_app;

#[actix_web::test]
async fn options_is_answered_everywhere_with_an_empty_body() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    for uri in ["/api/books", "/api/auth/login", "/api/nonexistent", "/elsewhere"] {
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri(uri)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK, "OPTIONS {uri}");
        assert_open_cors(&resp);
        let body = test::read_body(resp).await;
        assert!(body.is_empty(), "OPTIONS {uri} should have an empty body");
    }
}

#[actix_web::test]
async fn unknown_paths_are_not_found() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    for uri in ["/nonexistent", "/api/nonexistent", "/api", "/api/books/1"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_open_cors(&resp);
        assert_error_body_from_service_response(resp, StatusCode::NOT_FOUND, "Endpoint not found")
            .await;
    }
}

#[actix_web::test]
async fn wrong_method_on_a_known_route_is_405() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    for route in ApiRoute::ALL {
        let wrong = if route.method() == Method::GET {
            Method::POST
        } else {
            Method::GET
        };
        let uri = format!("/api{}", route.path());
        let req = test::TestRequest::default()
            .method(wrong.clone())
            .uri(&uri)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{wrong} {uri}");
        assert_error_body_from_service_response(
            resp,
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed",
        )
        .await;
    }
}

#[actix_web::test]
async fn delete_and_put_are_advertised_but_not_routed() {
    let app = create_test_app(build_state().build()).with_prod_routes().build().await;

    for method in [Method::PUT, Method::DELETE] {
        let req = test::TestRequest::default()
            .method(method)
            .uri("/api/clubs")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

#[actix_web::test]
async fn routes_follow_the_configured_base_path() {
    let app = create_test_app(build_state().build())
        .with_base_path("/v2")
        .build()
        .await;

    let req = test::TestRequest::get().uri("/v2/books").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/books").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
