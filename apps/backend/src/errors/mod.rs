//! Error handling for the BookClub demo endpoint.

pub mod error_code;

pub use error_code::ErrorCode;
