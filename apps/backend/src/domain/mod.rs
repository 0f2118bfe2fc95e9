//! Domain layer: demo tables and user fabrication, free of HTTP concerns.

pub mod catalog;
pub mod users;

pub use catalog::DemoCatalog;
