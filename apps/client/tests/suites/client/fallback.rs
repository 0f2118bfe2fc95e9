use bookclub_client::app::DEMO_MODE_NOTICE;
use bookclub_client::storage::keys;
use bookclub_client::toast::ToastKind;
use bookclub_client::validation::{LoginForm, RegistrationForm};
use bookclub_client::view::{Section, SectionContent};
use bookclub_client::{render, DataSource, KeyValueStore, Submission};
use tempfile::TempDir;

use crate::common::{
    page_load, spawn_html_backend, spawn_rejecting_backend, spawn_unavailable_backend,
    UNREACHABLE_API,
};

fn login_form() -> LoginForm {
    LoginForm {
        email: "reader@example.com".to_string(),
        password: "secret".to_string(),
    }
}

#[actix_web::test]
async fn unreachable_endpoint_serves_the_bundled_catalog() {
    let dir = TempDir::new().unwrap();
    let mut app = page_load(UNREACHABLE_API, &dir).await;
    assert_eq!(app.catalog().source(), DataSource::Bundled);

    assert_eq!(app.login(&login_form()).await.unwrap(), Submission::Accepted);
    let content = app.navigate(Section::Catalog).await.unwrap();

    let SectionContent::Catalog(books) = &content else {
        panic!("expected catalog content");
    };
    assert!(books.iter().any(|b| b.title == "War and Peace"));

    let screen = render::screen(&mut app, Some(&content));
    assert!(screen.contains("War and Peace"));
    assert!(screen.contains("offline"));
}

#[actix_web::test]
async fn server_errors_fall_back_like_an_unreachable_endpoint() {
    let api = spawn_unavailable_backend();
    let dir = TempDir::new().unwrap();
    let mut app = page_load(&api, &dir).await;
    assert_eq!(app.catalog().source(), DataSource::Bundled);

    assert_eq!(app.login(&login_form()).await.unwrap(), Submission::Accepted);

    let user = app.user().unwrap();
    assert_eq!(user.email, "reader@example.com");
    assert_eq!(user.stats.books_read, 5);
    assert_eq!(user.stats.clubs_joined, 2);
    assert_eq!(user.stats.points, 120);
    assert_eq!(app.store().get(keys::TOKEN), None);

    let toasts = app.drain_toasts();
    assert!(toasts
        .iter()
        .any(|t| t.kind == ToastKind::Info && t.message == DEMO_MODE_NOTICE));
}

#[actix_web::test]
async fn malformed_bodies_count_as_unavailable() {
    let api = spawn_html_backend();
    let dir = TempDir::new().unwrap();
    let mut app = page_load(&api, &dir).await;
    assert_eq!(app.catalog().source(), DataSource::Bundled);

    let form = RegistrationForm {
        username: "bookworm".to_string(),
        email: "worm@example.com".to_string(),
        password: "secret1".to_string(),
        password_confirm: "secret1".to_string(),
        accept_terms: true,
        ..RegistrationForm::default()
    };
    assert_eq!(app.register(&form).await.unwrap(), Submission::Accepted);

    let user = app.user().unwrap();
    assert_eq!(user.first_name, "bookworm");
    assert_eq!(user.stats.points, 10);
    assert_eq!(user.level.as_deref(), Some("Newcomer"));
}

#[actix_web::test]
async fn explicit_rejections_are_shown_and_create_no_session() {
    let api = spawn_rejecting_backend("Account is locked");
    let dir = TempDir::new().unwrap();
    let mut app = page_load(&api, &dir).await;

    assert_eq!(app.login(&login_form()).await.unwrap(), Submission::Rejected);

    assert!(app.user().is_none());
    assert_eq!(app.store().get(keys::USER), None);
    let toasts = app.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts[0].message, "Account is locked");
}

#[actix_web::test]
async fn invalid_forms_are_refused_before_any_request() {
    let dir = TempDir::new().unwrap();
    let mut app = page_load(UNREACHABLE_API, &dir).await;

    let form = RegistrationForm {
        username: "bookworm".to_string(),
        email: "not-an-email".to_string(),
        password: "secret1".to_string(),
        password_confirm: "secret1".to_string(),
        accept_terms: true,
        ..RegistrationForm::default()
    };
    assert_eq!(app.register(&form).await.unwrap(), Submission::Rejected);
    assert_eq!(app.drain_toasts()[0].message, "Please enter a valid email");
    assert!(app.user().is_none());
}
