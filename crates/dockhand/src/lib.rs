//! # dockhand
//!
//! Client for a container daemon's HTTP control API.
//!
//! This crate provides:
//! - [`DaemonClient`] with the container resource-limit update operation
//! - A [`transport`] boundary for supplying custom HTTP implementations
//! - [`ClientConfig`] for the daemon host and request timeout
//!
//! The client is a thin marshalling layer: it serializes the request
//! payload, builds the versioned request path, and delegates transmission
//! to the transport. Connection handling and enforcement of the limits
//! belong to the transport and the daemon.

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod transport;

pub use client::DaemonClient;
pub use config::ClientConfig;
pub use dockhand_api::UpdateConfig;
pub use dockhand_common::{DockhandError, DockhandResult, TransportError};
