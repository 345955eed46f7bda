//! Backend connection configuration.

use std::env;
use std::time::Duration;

/// Base URL of a backend running locally with its default port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5037/api/Elevator";

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Base URL all endpoint paths are appended to.
    pub base_url: String,

    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_millis(5000),
        }
    }
}

impl HttpConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ELEVATOR_API_URL` - Backend base URL (default: http://localhost:5037/api/Elevator)
    /// - `ELEVATOR_HTTP_TIMEOUT_MS` - Request timeout in milliseconds (default: 5000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("ELEVATOR_API_URL")
            && !url.trim().is_empty()
        {
            config.base_url = url.trim().to_string();
        }

        if let Some(ms) = env::var("ELEVATOR_HTTP_TIMEOUT_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_millis(ms.max(1));
        }

        config
    }

    /// Full URL of the endpoint at `path`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
