//! Local stand-ins used when the endpoint cannot be used.

use bookclub_api_types::{
    avatar_url, local_part, user_id_at, NotificationSettings, Preferences, Profile, ProfileStats,
    User, UserStats,
};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";
pub const READER_LEVEL: &str = "Reader";
pub const NEWCOMER_LEVEL: &str = "Newcomer";

/// Local user after a login the endpoint could not serve.
pub fn login_user(email: &str, now: OffsetDateTime) -> User {
    User {
        id: user_id_at(now),
        email: email.to_string(),
        username: None,
        first_name: local_part(email).to_string(),
        last_name: String::new(),
        avatar: DEFAULT_AVATAR.to_string(),
        role: "user".to_string(),
        joined_at: now.format(&Rfc3339).ok(),
        level: Some(READER_LEVEL.to_string()),
        stats: UserStats {
            books_read: 5,
            clubs_joined: 2,
            reviews_written: 0,
            points: 120,
        },
    }
}

/// Local user after a registration the endpoint could not serve.
pub fn registered_user(
    username: &str,
    email: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
    now: OffsetDateTime,
) -> User {
    let first_name = first_name.unwrap_or(username);

    User {
        id: user_id_at(now),
        email: email.to_string(),
        username: Some(username.to_string()),
        first_name: first_name.to_string(),
        last_name: last_name.unwrap_or_default().to_string(),
        avatar: avatar_url(first_name),
        role: "user".to_string(),
        joined_at: now.format(&Rfc3339).ok(),
        level: Some(NEWCOMER_LEVEL.to_string()),
        stats: UserStats {
            points: 10,
            ..UserStats::default()
        },
    }
}

/// Profile page built from the session user alone.
pub fn profile_from_user(user: &User) -> Profile {
    Profile {
        id: user.id,
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        avatar: user.avatar.clone(),
        bio: String::new(),
        location: String::new(),
        joined_at: user.joined_at.clone().unwrap_or_default(),
        stats: ProfileStats {
            counts: user.stats,
            level: user
                .level
                .clone()
                .unwrap_or_else(|| READER_LEVEL.to_string()),
        },
        preferences: Preferences {
            genres: Vec::new(),
            languages: Vec::new(),
            notifications: NotificationSettings {
                email: true,
                push: false,
                club_updates: true,
                new_books: true,
            },
        },
        achievements: Vec::new(),
    }
}
