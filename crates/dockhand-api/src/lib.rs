//! # dockhand-api
//!
//! Wire-schema types for the container daemon's HTTP control API.
//!
//! This crate provides Rust records mirroring the daemon's JSON schema:
//! - The mutable resource-limit configuration sent on container updates
//! - Network settings as reported in daemon responses
//!
//! Every field pins its wire name with an explicit serde rename. The wire
//! names are a byte-for-byte compatibility contract with the daemon and
//! must never be derived from the local field names.

#![warn(missing_docs)]

pub mod network;
pub mod update;

pub use network::{Address, EndpointSettings, NetworkSettings, PortBinding};
pub use update::UpdateConfig;
