//! Error types for the bridge.

use thiserror::Error;

/// Errors surfaced through bridge operations.
///
/// The bridge defines no failure modes of its own beyond marshalling:
/// `Store` carries the event store's rejection message verbatim.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("{0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
