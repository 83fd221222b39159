//! Common error types for the dockhand client.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias using [`DockhandError`].
pub type DockhandResult<T> = Result<T, DockhandError>;

/// Errors surfaced by the dockhand client.
///
/// The client recovers nothing locally: an encoding failure is reported
/// immediately and a transport failure is passed through unchanged.
#[derive(Error, Diagnostic, Debug)]
pub enum DockhandError {
    /// The request payload could not be encoded to JSON.
    #[error("Serialization error: {0}")]
    #[diagnostic(code(dockhand::serialization))]
    Serialization(String),

    /// The transport collaborator reported a failure.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Transport(#[from] TransportError),
}

impl From<serde_json::Error> for DockhandError {
    fn from(err: serde_json::Error) -> Self {
        DockhandError::Serialization(err.to_string())
    }
}

/// Failures reported by a transport implementation.
///
/// The variants mirror what the underlying HTTP stack can observe: the
/// daemon was unreachable, answered with an error status, or did not
/// answer in time.
#[derive(Error, Diagnostic, Debug)]
pub enum TransportError {
    /// The daemon could not be reached.
    #[error("Connection error: {message}")]
    #[diagnostic(
        code(dockhand::transport::connection),
        help("Check that the daemon is running and the host URL is correct")
    )]
    Connection {
        /// The underlying failure.
        message: String,
    },

    /// The daemon answered with an error status.
    #[error("Daemon error ({status}): {message}")]
    #[diagnostic(code(dockhand::transport::status))]
    Status {
        /// HTTP status code reported by the daemon.
        status: u16,
        /// Response body text, as reported by the daemon.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {message}")]
    #[diagnostic(
        code(dockhand::transport::timeout),
        help("Raise the client timeout if the daemon is slow to apply updates")
    )]
    Timeout {
        /// The underlying failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DockhandError::Transport(TransportError::Status {
            status: 500,
            message: "cannot update container".to_string(),
        });
        assert_eq!(err.to_string(), "Daemon error (500): cannot update container");
    }

    #[test]
    fn error_from_serde_json() {
        let json_err = serde_json::from_str::<i64>("not json").unwrap_err();
        let err: DockhandError = json_err.into();
        assert!(matches!(err, DockhandError::Serialization(_)));
    }

    #[test]
    fn transport_error_passes_through_transparently() {
        let err: DockhandError = TransportError::Connection {
            message: "connection refused".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Connection error: connection refused");
    }
}
