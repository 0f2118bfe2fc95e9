use std::time::Duration;

use jsonwebtoken::Algorithm;
use rand::distr::{Alphanumeric, SampleString};

/// Default lifetime of an issued access token.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Token signing settings.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Defaults to HS256
    pub algorithm: Algorithm,
    pub token_ttl: Duration,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Random per-process secret. Tokens stop verifying after a restart.
    pub fn ephemeral() -> Self {
        let secret = Alphanumeric.sample_string(&mut rand::rng(), 48);
        Self::new(secret.into_bytes())
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
