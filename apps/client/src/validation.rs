//! Form checks applied before the endpoint is contacted.

use std::sync::LazyLock;

use bookclub_api_types::{LoginRequest, RegisterRequest};
use regex::Regex;
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    LoginIncomplete,
    #[error("Please fill in all required fields")]
    RegistrationIncomplete,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("You must accept the terms of service")]
    TermsNotAccepted,
}

pub const MIN_PASSWORD_CHARS: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::LoginIncomplete);
        }

        Ok(LoginRequest {
            email: Some(email.to_string()),
            password: Some(self.password.clone()),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
    pub accept_terms: bool,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl RegistrationForm {
    /// Checks run in a fixed order and the first failure wins.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let username = self.username.trim();
        let email = self.email.trim();

        if username.is_empty()
            || email.is_empty()
            || self.password.is_empty()
            || self.password_confirm.is_empty()
        {
            return Err(ValidationError::RegistrationIncomplete);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password != self.password_confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::PasswordTooShort);
        }
        if !self.accept_terms {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(RegisterRequest {
            email: Some(email.to_string()),
            username: Some(username.to_string()),
            first_name: optional(&self.first_name),
            last_name: optional(&self.last_name),
            password: Some(self.password.clone()),
        })
    }
}
