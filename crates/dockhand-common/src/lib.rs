//! # dockhand-common
//!
//! Shared types for the dockhand daemon-client workspace.
//!
//! This crate provides the error taxonomy used across all dockhand crates:
//! - Client-level errors (payload encoding, transport pass-through)
//! - Transport-level errors as reported by the request collaborator

#![warn(missing_docs)]

pub mod error;

pub use error::{DockhandError, DockhandResult, TransportError};
