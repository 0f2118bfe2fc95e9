//! Error codes for the BookClub demo endpoint.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Codes are
//! SCREAMING_SNAKE_CASE and show up in logs next to every failed request.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Malformed `Authorization` header
    UnauthorizedMissingBearer,
    /// Token failed signature or shape checks
    UnauthorizedInvalidJwt,
    /// Token past its expiry
    UnauthorizedExpiredJwt,

    // Request Validation
    /// Body was not valid JSON for the route
    BadRequest,
    /// Login without email or password
    MissingCredentials,
    /// Registration without email, username or password
    MissingRegistrationFields,

    // Routing
    /// No route for the path
    EndpointNotFound,
    /// Route exists, method does not
    MethodNotAllowed,

    // System Errors
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::BadRequest => "BAD_REQUEST",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::MissingRegistrationFields => "MISSING_REGISTRATION_FIELDS",

            Self::EndpointNotFound => "ENDPOINT_NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
