use serde::{Deserialize, Serialize};

/// Uniform success wrapper: `{success, data, total?, message}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(default)]
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            total: None,
            message: message.into(),
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// List envelope; `total` always equals the number of items carried.
    pub fn list(data: Vec<T>, message: impl Into<String>) -> Self {
        let total = data.len();
        Self {
            success: true,
            data,
            total: Some(total),
            message: message.into(),
        }
    }
}

/// Error wrapper: `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
