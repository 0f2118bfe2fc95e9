pub mod auth;
pub mod profile;

pub use auth::{AuthOutcome, AuthService};
pub use profile::profile_for;
