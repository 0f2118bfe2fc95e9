//! Wire types shared by the BookClub demo endpoint and its client.
//!
//! Everything here is a transient view model. Field names are camelCase on
//! the wire to stay compatible with the JSON the endpoint has always served.

pub mod auth;
pub mod catalog;
pub mod envelope;
pub mod users;

pub use auth::{present, AuthPayload, LoginRequest, RegisterRequest};
pub use catalog::{Book, Club};
pub use envelope::{Envelope, ErrorBody};
pub use users::{
    avatar_url, local_part, user_id_at, Achievement, NotificationSettings, Preferences, Profile,
    ProfileStats, User, UserStats,
};
