//! The injected native collaborator.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BridgeResult;
use crate::protocol::Request;

/// The device calendar store the bridge delegates to.
///
/// Implementations own all calendar state and logic. The bridge issues one
/// [`Request`] per operation and resolves or fails with exactly what the
/// store returns; a rejection here is the rejection the caller sees.
/// Injecting the store at construction lets tests substitute a recording
/// double.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn call(&self, request: Request) -> BridgeResult<Value>;
}
