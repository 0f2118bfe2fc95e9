use std::future::Future;

use reqwest::StatusCode;
use thiserror::Error;

use crate::storage::StoreError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}: {message}")]
    Status {
        url: String,
        status: StatusCode,
        message: String,
    },
    #[error("malformed response from {url}: {detail}")]
    Malformed { url: String, detail: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Please sign in first")]
    SignedOut,
    #[error("task aborted: {0}")]
    Aborted(String),
}

impl ClientError {
    /// The endpoint explicitly refused the request (4xx).
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if status.is_client_error())
    }

    /// The endpoint is unusable: unreachable, failing or speaking nonsense.
    /// Callers may substitute local data.
    pub fn is_unavailable(&self) -> bool {
        match self {
            ClientError::Transport { .. } | ClientError::Malformed { .. } => true,
            ClientError::Status { status, .. } => !status.is_client_error(),
            _ => false,
        }
    }

    /// Message suitable for a toast. Only rejections and local checks carry
    /// a specific one.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status { message, .. } if self.is_rejection() => message.clone(),
            ClientError::Validation(e) => e.to_string(),
            ClientError::SignedOut => self.to_string(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

pub const GENERIC_ERROR: &str = "Something went wrong in the app";

/// Run `task` on its own tokio task so a panic inside it surfaces as
/// [`ClientError::Aborted`] instead of unwinding through the caller.
pub async fn isolated<F>(task: F) -> Result<F::Output, ClientError>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(task)
        .await
        .map_err(|e| ClientError::Aborted(e.to_string()))
}
