//! Server configuration loaded from environment variables.

use std::env;

use tracing::warn;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_BASE_PATH: &str = "/api";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Leading slash, no trailing slash; empty when mounted at the root.
    pub api_base_path: String,
    /// `None` means an ephemeral secret is generated at startup.
    pub jwt_secret: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// `BACKEND_HOST`, `BACKEND_PORT`, `API_BASE_PATH` and
    /// `BACKEND_JWT_SECRET` are all optional.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let api_base_path = normalize_base_path(
            &env::var("API_BASE_PATH").unwrap_or_else(|_| DEFAULT_BASE_PATH.to_string()),
        );

        let jwt_secret = env::var("BACKEND_JWT_SECRET")
            .ok()
            .filter(|secret| !secret.trim().is_empty());

        Ok(ServerConfig {
            host,
            port,
            api_base_path,
            jwt_secret,
        })
    }

    /// Signing settings for issued tokens.
    pub fn security(&self) -> SecurityConfig {
        match &self.jwt_secret {
            Some(secret) => SecurityConfig::new(secret.as_bytes()),
            None => {
                warn!("BACKEND_JWT_SECRET not set; tokens are signed with an ephemeral secret");
                SecurityConfig::ephemeral()
            }
        }
    }
}

/// `api/` -> `/api`, `/` -> ``.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
