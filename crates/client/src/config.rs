//! # Client Configuration Module
//!
//! Loads the settings the timetable client needs to reach the ERP backend.
//!
//! ## Environment Variables
//!
//! - `ERP_API_URL`: Base URL of the backend REST API (required)
//! - `ERP_API_TOKEN`: Bearer token of the signed-in session (optional)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `ERP_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)

use eyre::{eyre, Result, WrapErr};
use std::env;
use tracing::Level;

/// The signed-in user's session, passed explicitly to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash
    pub base_url: String,

    pub session: Session,

    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if `ERP_API_URL` is not set or is
    /// empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("ERP_API_URL")
            .ok_or_else(|| eyre!("ERP_API_URL environment variable must be set"))?
            .trim()
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(eyre!("ERP_API_URL must not be empty"));
        }

        let token = lookup("ERP_API_TOKEN").filter(|token| !token.trim().is_empty());

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let request_timeout = match lookup("ERP_REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .wrap_err("Invalid ERP_REQUEST_TIMEOUT_SECONDS value")?,
            None => 30,
        };

        Ok(Self {
            base_url,
            session: Session { token },
            log_level,
            request_timeout,
        })
    }

    /// Joins an API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
