use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";
const AVATAR_STYLE: &str = "background=6366f1&color=fff";

/// Characters a URI component keeps unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Generated avatar for a display name.
pub fn avatar_url(name: &str) -> String {
    format!(
        "{AVATAR_SERVICE}?name={}&{AVATAR_STYLE}",
        utf8_percent_encode(name, URI_COMPONENT)
    )
}

/// Epoch milliseconds; doubles as the id of a fabricated user.
pub fn user_id_at(now: OffsetDateTime) -> i64 {
    (now.unix_timestamp_nanos() / 1_000_000) as i64
}

/// The part of an email before `@`, or the whole string if there is none.
pub fn local_part(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

/// Counters shown next to a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub books_read: u32,
    pub clubs_joined: u32,
    pub reviews_written: u32,
    pub points: u32,
}

/// Session user, fabricated on login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub avatar: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default)]
    pub stats: UserStats,
}

impl User {
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    #[serde(flatten)]
    pub counts: UserStats,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub club_updates: bool,
    pub new_books: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub genres: Vec<String>,
    pub languages: Vec<String>,
    pub notifications: NotificationSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub date: String,
}

/// Profile page model served by `/user/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    pub joined_at: String,
    pub stats: ProfileStats,
    pub preferences: Preferences,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}
