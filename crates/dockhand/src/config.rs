//! Client configuration.

use std::time::Duration;

/// Configuration for connecting to the daemon.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the daemon's HTTP control API.
    pub host: String,
    /// Request timeout (seconds), applied by the underlying HTTP client.
    pub timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:2375".to_string(),
            timeout: 30,
        }
    }
}

impl ClientConfig {
    /// Set the daemon host URL.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the request timeout (seconds).
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// The request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
