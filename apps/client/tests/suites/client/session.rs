use bookclub_client::storage::keys;
use bookclub_client::validation::LoginForm;
use bookclub_client::view::{Section, View};
use bookclub_client::KeyValueStore;
use tempfile::TempDir;

use crate::common::{page_load, spawn_backend, UNREACHABLE_API};

fn login_form() -> LoginForm {
    LoginForm {
        email: "ann@example.com".to_string(),
        password: "secret".to_string(),
    }
}

#[actix_web::test]
async fn session_survives_a_restart_until_logout() {
    let api = spawn_backend();
    let dir = TempDir::new().unwrap();

    let mut first = page_load(&api, &dir).await;
    assert_eq!(first.view(), View::Welcome);
    first.login(&login_form()).await.unwrap();
    let user_id = first.user().unwrap().id;
    drop(first);

    let mut second = page_load(&api, &dir).await;
    assert_eq!(second.view(), View::Authenticated(Section::Feed));
    assert_eq!(second.user().unwrap().id, user_id);
    assert_eq!(second.unread_count(), 1);

    second.logout().unwrap();
    assert_eq!(second.store().get(keys::USER), None);
    assert_eq!(second.store().get(keys::TOKEN), None);
    drop(second);

    let third = page_load(&api, &dir).await;
    assert_eq!(third.view(), View::Welcome);
    assert!(third.user().is_none());
}

#[actix_web::test]
async fn offline_session_is_restored_offline() {
    let dir = TempDir::new().unwrap();

    let mut first = page_load(UNREACHABLE_API, &dir).await;
    first.login(&login_form()).await.unwrap();
    drop(first);

    let second = page_load(UNREACHABLE_API, &dir).await;
    assert_eq!(second.user().unwrap().email, "ann@example.com");
    assert_eq!(second.view(), View::Authenticated(Section::Feed));
}

#[actix_web::test]
async fn corrupt_session_entry_shows_the_welcome_view() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = bookclub_client::FileStore::open(dir.path()).unwrap();
        store.set(keys::USER, "{not json").unwrap();
    }

    let app = page_load(UNREACHABLE_API, &dir).await;
    assert_eq!(app.view(), View::Welcome);
    assert_eq!(app.store().get(keys::USER), None);
}

#[actix_web::test]
async fn preferences_persist_across_page_loads() {
    let dir = TempDir::new().unwrap();

    let mut first = page_load(UNREACHABLE_API, &dir).await;
    first.toggle_theme().unwrap();
    first
        .decide_cookies(bookclub_client::preferences::Consent::Declined)
        .unwrap();
    drop(first);

    let second = page_load(UNREACHABLE_API, &dir).await;
    assert_eq!(second.theme(), bookclub_client::preferences::Theme::Light);
    assert!(!second.needs_consent_banner());
}
