use serde::{Deserialize, Serialize};

/// Claims carried by tokens issued on login and registration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Fabricated user id (epoch milliseconds at issue time)
    pub sub: String,
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// The numeric user id, when `sub` holds one.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}
