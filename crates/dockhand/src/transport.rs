//! Transport boundary for daemon requests.
//!
//! The client never talks HTTP directly; it hands a `(method, path, body,
//! headers)` tuple to a [`Transport`] and interprets nothing beyond success
//! or failure. [`HttpTransport`] is the stock implementation over reqwest.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use dockhand_common::TransportError;
use reqwest::Client;

/// HTTP method for a daemon request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET request.
    Get,
    /// POST request.
    Post,
}

impl Method {
    /// Get the method string for the wire.
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A daemon response as seen by the transport boundary.
///
/// The update operation never reads the body; it is carried so that
/// transports stay useful for response-bearing calls.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Bytes,
}

/// The outbound-request collaborator used by [`DaemonClient`].
///
/// Implementations own connection handling, auth, and any timeout or
/// cancellation discipline. A non-error return means the daemon accepted
/// the request; error classification is the implementation's policy.
///
/// [`DaemonClient`]: crate::client::DaemonClient
#[async_trait]
pub trait Transport: Send + Sync {
    /// Submit a single request to the daemon.
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        headers: &HashMap<String, String>,
    ) -> Result<Response, TransportError>;
}

/// Transport over a plain HTTP connection to the daemon.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the given daemon base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Connection {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        headers: &HashMap<String, String>,
    ) -> Result<Response, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "Sending daemon request");

        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        for (name, value) in headers {
            request = request.header(name, value);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    message: e.to_string(),
                }
            } else {
                TransportError::Connection {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection {
                message: format!("Failed to read response body: {}", e),
            })?;

        Ok(Response {
            status: status.as_u16(),
            body,
        })
    }
}
