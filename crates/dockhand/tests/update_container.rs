//! Integration tests for the container update operation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use dockhand::transport::{Method, Response, Transport};
use dockhand::{DaemonClient, DockhandError, TransportError, UpdateConfig};
use serde_json::Value;

/// A single request as seen by the transport boundary.
#[derive(Debug, Clone)]
struct RecordedRequest {
    method: Method,
    path: String,
    body: Option<Vec<u8>>,
    headers: HashMap<String, String>,
}

/// Captures every request and answers with a canned result.
struct RecordingTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    fail_status: Option<(u16, &'static str)>,
}

impl RecordingTransport {
    fn succeeding() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_status: None,
        }
    }

    fn failing(status: u16, message: &'static str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_status: Some((status, message)),
        }
    }

    fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        headers: &HashMap<String, String>,
    ) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
            headers: headers.clone(),
        });

        match self.fail_status {
            Some((status, message)) => Err(TransportError::Status {
                status,
                message: message.to_string(),
            }),
            None => Ok(Response {
                status: 200,
                body: Bytes::new(),
            }),
        }
    }
}

#[tokio::test]
async fn update_sends_exactly_one_post_request() {
    let transport = Arc::new(RecordingTransport::succeeding());
    let client = DaemonClient::with_transport(transport.clone());

    let config = UpdateConfig {
        cpu_shares: 512,
        memory: 268_435_456,
        ..UpdateConfig::default()
    };

    client.update_container("abc123", &config).await.unwrap();

    let requests = transport.recorded();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/v1.22/containers/abc123/update");
    assert_eq!(
        request.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(request.headers.len(), 1);
}

#[tokio::test]
async fn update_body_matches_the_wire_contract() {
    let transport = Arc::new(RecordingTransport::succeeding());
    let client = DaemonClient::with_transport(transport.clone());

    let config = UpdateConfig {
        cpu_shares: 512,
        memory: 268_435_456,
        ..UpdateConfig::default()
    };

    client.update_container("abc123", &config).await.unwrap();

    let requests = transport.recorded();
    let body = requests[0].body.as_ref().unwrap();
    let value: Value = serde_json::from_slice(body).unwrap();

    assert_eq!(value["CpuShares"], 512);
    assert_eq!(value["Memory"], 268_435_456);

    // Unset scalar fields still serialize at their zero values; the two
    // tri-state fields stay absent.
    assert_eq!(value["CpuPeriod"], 0);
    assert_eq!(value["CgroupParent"], "");
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("MemorySwappiness"));
    assert!(!object.contains_key("OomKillDisable"));
}

#[tokio::test]
async fn identifier_is_passed_through_verbatim() {
    let transport = Arc::new(RecordingTransport::succeeding());
    let client = DaemonClient::with_transport(transport.clone());

    client
        .update_container("my_container-1", &UpdateConfig::default())
        .await
        .unwrap();

    let requests = transport.recorded();
    assert_eq!(requests[0].path, "/v1.22/containers/my_container-1/update");
}

#[tokio::test]
async fn transport_error_propagates_unchanged() {
    let transport = Arc::new(RecordingTransport::failing(500, "cannot update container"));
    let client = DaemonClient::with_transport(transport.clone());

    let err = client
        .update_container("abc123", &UpdateConfig::default())
        .await
        .unwrap_err();

    match err {
        DockhandError::Transport(TransportError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "cannot update container");
        }
        other => panic!("expected transport status error, got: {other}"),
    }

    // The failed request was still issued exactly once.
    assert_eq!(transport.recorded().len(), 1);
}

#[tokio::test]
async fn success_returns_no_error() {
    let transport = Arc::new(RecordingTransport::succeeding());
    let client = DaemonClient::with_transport(transport);

    let result = client
        .update_container("abc123", &UpdateConfig::default())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn concurrent_updates_share_one_client() {
    let transport = Arc::new(RecordingTransport::succeeding());
    let client = DaemonClient::with_transport(transport.clone());

    let first = {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .update_container("abc123", &UpdateConfig::default())
                .await
        })
    };
    let second = {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .update_container("def456", &UpdateConfig::default())
                .await
        })
    };

    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    let mut paths: Vec<String> = transport
        .recorded()
        .into_iter()
        .map(|request| request.path)
        .collect();
    paths.sort();
    assert_eq!(
        paths,
        vec![
            "/v1.22/containers/abc123/update",
            "/v1.22/containers/def456/update"
        ]
    );
}
