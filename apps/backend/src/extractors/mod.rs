pub mod bearer;
pub mod validated_json;

pub use bearer::OptionalClaims;
pub use validated_json::ValidatedJson;
