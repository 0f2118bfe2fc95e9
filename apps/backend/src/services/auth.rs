//! Demo login and registration.
//!
//! Presence checks happen here; anything that passes them gets a freshly
//! fabricated user and a signed token. No credential is ever compared.

use std::time::SystemTime;

use bookclub_api_types::{present, AuthPayload, LoginRequest, RegisterRequest};
use time::OffsetDateTime;
use tracing::info;

use crate::auth::mint_access_token;
use crate::domain::users::{self, LoginSubmission, RegistrationSubmission};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::state::security_config::SecurityConfig;

pub const MISSING_CREDENTIALS: &str = "Email and password are required";
pub const MISSING_REGISTRATION_FIELDS: &str = "Email, username and password are required";

/// Result of a successful submission: the payload plus the greeting.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub payload: AuthPayload,
    pub message: String,
}

pub struct AuthService<'a> {
    security: &'a SecurityConfig,
}

impl<'a> AuthService<'a> {
    pub fn new(security: &'a SecurityConfig) -> Self {
        Self { security }
    }

    pub fn login(&self, req: &LoginRequest, now: SystemTime) -> Result<AuthOutcome, AppError> {
        let (Some(email), Some(_password)) = (present(&req.email), present(&req.password)) else {
            security::auth_rejected("login", ErrorCode::MissingCredentials, req.email.as_deref());
            return Err(AppError::invalid(ErrorCode::MissingCredentials, MISSING_CREDENTIALS));
        };

        let user = users::login_user(
            &LoginSubmission { email },
            OffsetDateTime::from(now),
            &mut rand::rng(),
        )?;
        let token = mint_access_token(user.id, &user.email, now, self.security)?;

        info!(user_id = user.id, email = %Redacted(&user.email), "demo login");

        let message = format!("Welcome, {}!", user.first_name);
        Ok(AuthOutcome {
            payload: AuthPayload { user, token },
            message,
        })
    }

    pub fn register(&self, req: &RegisterRequest, now: SystemTime) -> Result<AuthOutcome, AppError> {
        let (Some(email), Some(username), Some(_password)) = (
            present(&req.email),
            present(&req.username),
            present(&req.password),
        ) else {
            security::auth_rejected(
                "register",
                ErrorCode::MissingRegistrationFields,
                req.email.as_deref(),
            );
            return Err(AppError::invalid(
                ErrorCode::MissingRegistrationFields,
                MISSING_REGISTRATION_FIELDS,
            ));
        };

        let submission = RegistrationSubmission {
            email,
            username,
            first_name: present(&req.first_name),
            last_name: present(&req.last_name),
        };
        let user = users::registered_user(&submission, OffsetDateTime::from(now))?;
        let token = mint_access_token(user.id, &user.email, now, self.security)?;

        info!(user_id = user.id, email = %Redacted(&user.email), "demo registration");

        let message = format!("Registration complete! Welcome, {}!", user.first_name);
        Ok(AuthOutcome {
            payload: AuthPayload { user, token },
            message,
        })
    }
}
