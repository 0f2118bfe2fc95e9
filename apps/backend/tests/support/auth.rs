#![allow(dead_code)]

use std::time::{Duration, SystemTime};

use bookclub_backend::auth::mint_access_token;
use bookclub_backend::state::security_config::SecurityConfig;

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

/// A valid token for `user_id` / `email` signed with [`TEST_SECRET`].
pub fn bearer_for(user_id: i64, email: &str) -> String {
    let token = mint_access_token(user_id, email, SystemTime::now(), &test_security())
        .expect("mint test token");
    format!("Bearer {token}")
}

/// A token issued 25 hours ago, past the 24h lifetime.
pub fn expired_bearer(user_id: i64, email: &str) -> String {
    let issued = SystemTime::now() - Duration::from_secs(25 * 60 * 60);
    let token =
        mint_access_token(user_id, email, issued, &test_security()).expect("mint test token");
    format!("Bearer {token}")
}
