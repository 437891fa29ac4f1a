//! Event records and the option structs for event operations.
//!
//! These shapes belong to the event store; the bridge passes them through
//! without holding a copy. Optional fields serialize only when set, so a
//! sparse details record delegates sparse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event as the store reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub calendar_id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub availability: Option<Availability>,
    /// Recurrence of the master event, if any.
    pub recurrence_rule: Option<RecurrenceRule>,
}

/// Whether an event blocks time on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Busy,
    Free,
    Tentative,
    Unavailable,
}

/// How an event repeats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Repeat every `interval` periods; the store treats a missing value
    /// as 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// Stop after this many occurrences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence: Option<u32>,
    /// Stop at this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Details record for [`crate::CalendarBridge::save_event`].
///
/// Presence of `id` makes the save an update; the store decides, not the
/// bridge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Calendar to file the event under; the store picks its default
    /// calendar when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_rule: Option<RecurrenceRule>,
}

/// Options record for [`crate::CalendarBridge::save_event`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOptions {
    /// Apply the change to this and all later occurrences of a recurring
    /// event. Defaults to false: this instance only.
    #[serde(default)]
    pub future_events: bool,
    /// The occurrence being edited, for single-instance changes to a
    /// recurring event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception_date: Option<DateTime<Utc>>,
}

/// Scope of a removal on a recurring event.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalOptions {
    /// Remove this instance and all later occurrences. Defaults to false:
    /// this instance only.
    #[serde(default)]
    pub future_events: bool,
}
