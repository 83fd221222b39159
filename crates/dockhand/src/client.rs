//! Daemon client and the container update operation.

use std::collections::HashMap;
use std::sync::Arc;

use dockhand_api::UpdateConfig;
use dockhand_common::DockhandResult;

use crate::config::ClientConfig;
use crate::transport::{HttpTransport, Method, Transport};

/// API version tag interpolated into every request path.
const API_VERSION: &str = "v1.22";

/// Client for the container daemon's HTTP control API.
///
/// The client holds only a shared transport and is cheap to clone; clones
/// may issue requests concurrently from multiple tasks. Ordering between
/// concurrent updates to the same container is the daemon's business.
#[derive(Clone)]
pub struct DaemonClient {
    transport: Arc<dyn Transport>,
}

impl DaemonClient {
    /// Create a client for the daemon described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP transport cannot be built.
    pub fn new(config: &ClientConfig) -> DockhandResult<Self> {
        let transport = HttpTransport::new(&config.host, config.timeout_duration())?;
        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Create a client over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Update a running container's resource limits.
    ///
    /// Issues exactly one `POST /v1.22/containers/{id}/update` request with
    /// the JSON-encoded `config` as the body and a single
    /// `Content-Type: application/json` header. The identifier is passed
    /// through verbatim; the daemon owns its validation. Nothing is returned
    /// on success and the response payload is not read.
    ///
    /// # Errors
    ///
    /// Returns [`DockhandError::Serialization`] if the payload cannot be
    /// encoded, or the transport's failure unchanged.
    ///
    /// [`DockhandError::Serialization`]: dockhand_common::DockhandError::Serialization
    pub async fn update_container(&self, id: &str, config: &UpdateConfig) -> DockhandResult<()> {
        let body = serde_json::to_vec(config)?;

        let path = format!("/{}/containers/{}/update", API_VERSION, id);
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        tracing::debug!(container_id = %id, path = %path, "Updating container resources");

        self.transport
            .do_request(Method::Post, &path, Some(body), &headers)
            .await?;

        Ok(())
    }
}
