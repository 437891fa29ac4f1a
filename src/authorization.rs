//! Authorization status reported by the event store.

use serde::{Deserialize, Serialize};

/// Whether the application may access the device calendar store.
///
/// Reported by the store; the bridge neither interprets nor caches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorizationStatus {
    Authorized,
    Denied,
    Restricted,
    Undetermined,
}
