use bookclub_api_types::LoginRequest;
use bookclub_client::api::ApiClient;
use bookclub_client::storage::keys;
use bookclub_client::validation::{LoginForm, RegistrationForm};
use bookclub_client::view::{Section, SectionContent};
use bookclub_client::{DataSource, KeyValueStore, Submission};
use tempfile::TempDir;

use crate::common::{page_load, spawn_backend};

#[actix_web::test]
async fn reachable_endpoint_supplies_the_catalog() {
    let api = spawn_backend();
    let dir = TempDir::new().unwrap();
    let app = page_load(&api, &dir).await;

    assert_eq!(app.catalog().source(), DataSource::Remote);
    assert_eq!(app.catalog().books().len(), 3);
    assert_eq!(app.catalog().clubs().len(), 3);
    assert!(app.catalog().books().iter().any(|b| b.title == "1984"));
}

#[actix_web::test]
async fn login_stores_the_issued_token() {
    let api = spawn_backend();
    let dir = TempDir::new().unwrap();
    let mut app = page_load(&api, &dir).await;

    let form = LoginForm {
        email: "ann@example.com".to_string(),
        password: "secret".to_string(),
    };
    assert_eq!(app.login(&form).await.unwrap(), Submission::Accepted);

    assert_eq!(app.user().unwrap().email, "ann@example.com");
    assert!(app.store().get(keys::TOKEN).is_some());

    let toasts = app.drain_toasts();
    assert!(toasts.iter().any(|t| t.message == "Welcome, ann!"));
}

#[actix_web::test]
async fn profile_is_personalised_by_the_token() {
    let api = spawn_backend();
    let dir = TempDir::new().unwrap();
    let mut app = page_load(&api, &dir).await;

    let form = RegistrationForm {
        username: "bookworm".to_string(),
        email: "worm@example.com".to_string(),
        first_name: "Anna".to_string(),
        password: "secret1".to_string(),
        password_confirm: "secret1".to_string(),
        accept_terms: true,
        ..RegistrationForm::default()
    };
    assert_eq!(app.register(&form).await.unwrap(), Submission::Accepted);
    assert_eq!(app.user().unwrap().stats.points, 10);

    let SectionContent::Profile(profile) = app.navigate(Section::Profile).await.unwrap() else {
        panic!("expected profile content");
    };
    assert_eq!(profile.email, "worm@example.com");
    assert_eq!(profile.id, app.user().unwrap().id);
    // Everything else comes from the demo profile
    assert_eq!(profile.stats.counts.books_read, 47);
}

#[actix_web::test]
async fn endpoint_rejects_incomplete_login_with_a_client_error() {
    let api = ApiClient::new(&spawn_backend()).unwrap();

    let err = api.login(&LoginRequest::default()).await.unwrap_err();

    assert!(err.is_rejection());
    assert!(!err.is_unavailable());
    assert_eq!(err.user_message(), "Email and password are required");
}
