use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// Default per-request timeout.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the camp API, e.g. `https://camp.example.com/api`.
    pub api_url: String,
    /// Bearer token passed through on every request, if set.
    pub api_token: Option<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default  |
    /// |------------------------|----------|
    /// | `CAMP_API_URL`         | required |
    /// | `CAMP_API_TOKEN`       | unset    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`     |
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("CAMP_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ClientError::Config("CAMP_API_URL must be set".into()))?;

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "CAMP_API_URL must be an http(s) URL, got '{api_url}'"
            )));
        }

        let api_token = lookup("CAMP_API_TOKEN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Config(format!("REQUEST_TIMEOUT_SECS must be a valid u64, got '{raw}'"))
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            api_token,
            request_timeout_secs,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
