//! Typed access to the demo endpoint.

use std::time::Duration;

use bookclub_api_types::{
    AuthPayload, Book, Club, Envelope, ErrorBody, LoginRequest, Profile, RegisterRequest,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClientError;

/// Only the connection attempt is bounded; a slow answer is waited for.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn books(&self) -> Result<Vec<Book>, ClientError> {
        self.list("/books").await
    }

    pub async fn clubs(&self) -> Result<Vec<Club>, ClientError> {
        self.list("/clubs").await
    }

    pub async fn login(&self, body: &LoginRequest) -> Result<Envelope<AuthPayload>, ClientError> {
        let url = self.url("/auth/login");
        self.send(&url, self.http.post(&url).json(body)).await
    }

    pub async fn register(
        &self,
        body: &RegisterRequest,
    ) -> Result<Envelope<AuthPayload>, ClientError> {
        let url = self.url("/auth/register");
        self.send(&url, self.http.post(&url).json(body)).await
    }

    pub async fn profile(&self, token: Option<&str>) -> Result<Profile, ClientError> {
        let url = self.url("/user/profile");
        let mut request = self.http.get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.send(&url, request).await.map(|envelope| envelope.data)
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        let url = self.url(path);
        let envelope: Envelope<Vec<T>> = self.send(&url, self.http.get(&url)).await?;
        Ok(envelope.data)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, ClientError> {
        debug!(url, "calling endpoint");
        let response = request.send().await.map_err(|source| ClientError::Transport {
            url: url.to_string(),
            source,
        })?;
        decode(url, response).await
    }
}

/// Map a response onto the envelope contract.
///
/// Non-2xx answers become `Status` (with the `{error}` message when one is
/// present); unparseable bodies and `success: false` become `Malformed`.
async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<Envelope<T>, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(|source| ClientError::Transport {
        url: url.to_string(),
        source,
    })?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
        return Err(ClientError::Status {
            url: url.to_string(),
            status,
            message,
        });
    }

    let envelope: Envelope<T> =
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Malformed {
            url: url.to_string(),
            detail: e.to_string(),
        })?;

    if !envelope.success {
        return Err(ClientError::Malformed {
            url: url.to_string(),
            detail: "success flag not set".to_string(),
        });
    }

    Ok(envelope)
}
