//! Calendar records as the event store reports them.

use serde::{Deserialize, Serialize};

use crate::event::Availability;

/// A calendar in the device store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub id: String,
    pub title: String,
    /// Store-specific type, e.g. "local", "calDAV", "subscribed".
    #[serde(rename = "type")]
    pub kind: String,
    /// Account the calendar belongs to.
    pub source: String,
    pub color: Option<String>,
    pub allows_modifications: bool,
    /// Availability values events in this calendar may carry.
    #[serde(default)]
    pub allowed_availabilities: Vec<Availability>,
}

/// Options record for [`crate::CalendarBridge::save_calendar`].
///
/// Presence of `id` makes the save an update; the store decides, not the
/// bridge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarOptions {
    /// Existing calendar to update; `None` creates a new one.
    pub id: Option<String>,
    pub title: Option<String>,
    /// Portable color: a CSS keyword, `#`-hex string, or `rgb()`/`rgba()`
    /// notation. Converted to the native encoding at delegation.
    pub color: Option<String>,
}
