//! User fabrication for the demo login and registration routes.
//!
//! Nothing is looked up or stored: the user is invented from the submitted
//! fields, the clock and (for login) a random number generator.

use bookclub_api_types::{avatar_url, local_part, user_id_at, User, UserStats};
use rand::Rng;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::AppError;

const DEFAULT_ROLE: &str = "user";
/// Welcome bonus granted on registration.
pub const REGISTRATION_POINTS: u32 = 10;

/// Login fields after presence checks.
#[derive(Debug, Clone)]
pub struct LoginSubmission<'a> {
    pub email: &'a str,
}

/// Registration fields after presence checks.
#[derive(Debug, Clone)]
pub struct RegistrationSubmission<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

fn joined_at(now: OffsetDateTime) -> Result<String, AppError> {
    now.format(&Rfc3339)
        .map_err(|e| AppError::internal(format!("failed to format timestamp: {e}")))
}

pub fn login_user<R: Rng + ?Sized>(
    submission: &LoginSubmission<'_>,
    now: OffsetDateTime,
    rng: &mut R,
) -> Result<User, AppError> {
    let first_name = local_part(submission.email).to_string();

    Ok(User {
        id: user_id_at(now),
        email: submission.email.to_string(),
        username: None,
        avatar: avatar_url(&first_name),
        first_name,
        last_name: String::new(),
        role: DEFAULT_ROLE.to_string(),
        joined_at: Some(joined_at(now)?),
        level: None,
        stats: UserStats {
            books_read: rng.random_range(0..50),
            clubs_joined: rng.random_range(0..5),
            reviews_written: rng.random_range(0..20),
            points: rng.random_range(0..1000),
        },
    })
}

pub fn registered_user(
    submission: &RegistrationSubmission<'_>,
    now: OffsetDateTime,
) -> Result<User, AppError> {
    let first_name = submission.first_name.unwrap_or(submission.username).to_string();

    Ok(User {
        id: user_id_at(now),
        email: submission.email.to_string(),
        username: Some(submission.username.to_string()),
        avatar: avatar_url(&first_name),
        first_name,
        last_name: submission.last_name.unwrap_or_default().to_string(),
        role: DEFAULT_ROLE.to_string(),
        joined_at: Some(joined_at(now)?),
        level: None,
        stats: UserStats {
            points: REGISTRATION_POINTS,
            ..UserStats::default()
        },
    })
}
