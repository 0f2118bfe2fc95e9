pub mod auth;
pub mod catalog;
pub mod dispatch;
pub mod profile;
