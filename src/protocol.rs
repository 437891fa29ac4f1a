//! The native primitive surface, as data.
//!
//! Each bridge operation maps to one [`Command`] plus a typed params struct
//! implementing [`StoreCommand`]. The bridge serializes the params, wraps
//! them in a [`Request`], and decodes the store's payload into the command's
//! response type. Wire names are the store's own, camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::authorization::AuthorizationStatus;
use crate::calendar::Calendar;
use crate::event::{Event, EventDetails, RemovalOptions, SaveOptions};

/// The primitive operations the event store exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    AuthorizationStatus,
    AuthorizeEventStore,
    FetchAllEvents,
    Create,
    DeleteCalendarByName,
    FindCalendars,
    SaveCalendar,
    FindEventById,
    SaveEvent,
    RemoveEvent,
}

/// A typed call to one native primitive: its parameters plus the response
/// shape the store resolves with.
pub trait StoreCommand: Serialize {
    type Response: DeserializeOwned;
    fn command() -> Command;
}

/// One delegated request: the primitive to invoke and its parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAuthorizationStatus {}

impl StoreCommand for GetAuthorizationStatus {
    type Response = AuthorizationStatus;
    fn command() -> Command {
        Command::AuthorizationStatus
    }
}

/// Runs the platform permission prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeEventStore {}

impl StoreCommand for AuthorizeEventStore {
    type Response = AuthorizationStatus;
    fn command() -> Command {
        Command::AuthorizeEventStore
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchAllEvents {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Calendar ids to search; empty means every calendar in the store.
    pub calendars: Vec<String>,
}

impl StoreCommand for FetchAllEvents {
    type Response = Vec<Event>;
    fn command() -> Command {
        Command::FetchAllEvents
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendar {
    pub name: String,
    /// Passed through in whatever encoding the store accepts; the bridge
    /// does not convert it here.
    pub color: String,
}

impl StoreCommand for CreateCalendar {
    type Response = String;
    fn command() -> Command {
        Command::Create
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCalendarByName {
    pub name: String,
}

impl StoreCommand for DeleteCalendarByName {
    type Response = ();
    fn command() -> Command {
        Command::DeleteCalendarByName
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindCalendars {}

impl StoreCommand for FindCalendars {
    type Response = Vec<Calendar>;
    fn command() -> Command {
        Command::FindCalendars
    }
}

/// Save-calendar params after shaping: the color, when present, is already
/// the native packed ARGB value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCalendar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

impl StoreCommand for SaveCalendar {
    type Response = String;
    fn command() -> Command {
        Command::SaveCalendar
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindEventById {
    pub id: String,
}

impl StoreCommand for FindEventById {
    type Response = Option<Event>;
    fn command() -> Command {
        Command::FindEventById
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveEvent {
    pub title: String,
    pub details: EventDetails,
    pub options: SaveOptions,
}

impl StoreCommand for SaveEvent {
    type Response = String;
    fn command() -> Command {
        Command::SaveEvent
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEvent {
    pub id: String,
    pub options: RemovalOptions,
}

impl StoreCommand for RemoveEvent {
    type Response = ();
    fn command() -> Command {
        Command::RemoveEvent
    }
}
