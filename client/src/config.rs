//! Client configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Settings for reaching the aluno API.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ESCOLA")]
pub struct ClientSettings {
    /// Base URL of the API, e.g. `http://localhost:3001`.
    pub api_base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Bearer token attached to API requests.
    pub api_token: Option<String>,
}

impl ClientSettings {
    /// Return the configured base URL, falling back to the default.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Return the configured request timeout, falling back to the default.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
                .max(1),
        )
    }

    /// Return the bearer token, ignoring blank values.
    #[must_use]
    pub fn api_token(&self) -> Option<&str> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
