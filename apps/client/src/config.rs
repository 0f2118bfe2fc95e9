//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use reqwest::Url;

use crate::error::ClientError;

const DEFAULT_API_URL: &str = "http://localhost:3001/api";
const STATE_DIR_NAME: &str = "bookclub";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint base, without a trailing slash.
    pub api_url: String,
    /// Directory holding `storage.json`.
    pub state_dir: PathBuf,
    /// Resolves the `auto` theme.
    pub prefers_dark: bool,
}

impl ClientConfig {
    /// `BOOKCLUB_API_URL`, `BOOKCLUB_STATE_DIR` and `BOOKCLUB_PREFERS_DARK`,
    /// all optional.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_url = normalize_api_url(
            &env::var("BOOKCLUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        )?;

        let state_dir = env::var_os("BOOKCLUB_STATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_state_dir);

        let prefers_dark = env::var("BOOKCLUB_PREFERS_DARK")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(ClientConfig {
            api_url,
            state_dir,
            prefers_dark,
        })
    }

    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ClientError> {
        self.api_url = normalize_api_url(api_url)?;
        Ok(self)
    }

    pub fn with_state_dir(mut self, state_dir: PathBuf) -> Self {
        self.state_dir = state_dir;
        self
    }
}

fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(STATE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{STATE_DIR_NAME}")))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Validates the URL and strips trailing slashes.
pub fn normalize_api_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed)
        .map_err(|e| ClientError::Config(format!("invalid API URL '{raw}': {e}")))?;
    Ok(trimmed.to_string())
}
