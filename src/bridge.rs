//! The asynchronous façade over the injected event store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::authorization::AuthorizationStatus;
use crate::calendar::{Calendar, CalendarOptions};
use crate::color;
use crate::error::{BridgeError, BridgeResult};
use crate::event::{Event, EventDetails, RemovalOptions, SaveOptions};
use crate::protocol::{
    AuthorizeEventStore, CreateCalendar, DeleteCalendarByName, FetchAllEvents, FindCalendars,
    FindEventById, GetAuthorizationStatus, RemoveEvent, Request, SaveCalendar, SaveEvent,
    StoreCommand,
};
use crate::store::EventStore;

/// Façade over the device calendar store.
///
/// Every operation shapes its parameters, issues exactly one request against
/// the injected store, and resolves with the store's payload or fails with
/// its rejection. The bridge keeps no state between calls and no call
/// depends on a prior one.
#[derive(Clone)]
pub struct CalendarBridge {
    store: Arc<dyn EventStore>,
}

impl CalendarBridge {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        CalendarBridge { store }
    }

    /// Serialize the typed command, dispatch it, decode the response.
    async fn call<C: StoreCommand>(&self, params: C) -> BridgeResult<C::Response> {
        let params = serde_json::to_value(&params)
            .map_err(|e| BridgeError::Serialization(e.to_string()))?;
        let command = C::command();
        debug!(?command, "delegating to event store");
        let response = self.store.call(Request { command, params }).await?;
        serde_json::from_value(response).map_err(|e| BridgeError::Serialization(e.to_string()))
    }

    /// Current authorization for the calendar store.
    pub async fn authorization_status(&self) -> BridgeResult<AuthorizationStatus> {
        self.call(GetAuthorizationStatus {}).await
    }

    /// Run the platform permission flow and report the resulting status.
    pub async fn request_authorization(&self) -> BridgeResult<AuthorizationStatus> {
        self.call(AuthorizeEventStore {}).await
    }

    /// Events between `start_date` and `end_date`, in the store's order.
    /// An empty `calendars` set searches every calendar.
    pub async fn fetch_all_events(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        calendars: Vec<String>,
    ) -> BridgeResult<Vec<Event>> {
        self.call(FetchAllEvents {
            start_date,
            end_date,
            calendars,
        })
        .await
    }

    /// Create a calendar, returning its store-assigned id. `color` goes
    /// through untouched, in whatever encoding the store accepts.
    pub async fn create_calendar(&self, name: &str, color: &str) -> BridgeResult<String> {
        self.call(CreateCalendar {
            name: name.to_string(),
            color: color.to_string(),
        })
        .await
    }

    /// Delete the first calendar matching `name`. Whether a missing name is
    /// a no-op or an error is the store's decision, reported as-is.
    pub async fn delete_calendar_by_name(&self, name: &str) -> BridgeResult<()> {
        self.call(DeleteCalendarByName {
            name: name.to_string(),
        })
        .await
    }

    pub async fn find_calendars(&self) -> BridgeResult<Vec<Calendar>> {
        self.call(FindCalendars {}).await
    }

    /// Create or update a calendar; the store decides which from the
    /// presence of `options.id`. The portable color converts to the native
    /// encoding here, exactly once; an absent or unrecognized color
    /// delegates unset.
    pub async fn save_calendar(&self, options: CalendarOptions) -> BridgeResult<String> {
        let CalendarOptions { id, title, color } = options;
        self.call(SaveCalendar {
            id,
            title,
            color: color.as_deref().and_then(color::to_native),
        })
        .await
    }

    /// Single event lookup; `None` when the store has no such id.
    pub async fn find_event_by_id(&self, id: &str) -> BridgeResult<Option<Event>> {
        self.call(FindEventById { id: id.to_string() }).await
    }

    /// Create or update an event, returning its store-assigned id.
    pub async fn save_event(
        &self,
        title: &str,
        details: EventDetails,
        options: SaveOptions,
    ) -> BridgeResult<String> {
        self.call(SaveEvent {
            title: title.to_string(),
            details,
            options,
        })
        .await
    }

    /// Remove one event instance, or more per `options`.
    pub async fn remove_event(&self, id: &str, options: RemovalOptions) -> BridgeResult<()> {
        self.call(RemoveEvent {
            id: id.to_string(),
            options,
        })
        .await
    }

    /// Remove an event instance and every later occurrence. Same primitive
    /// as [`Self::remove_event`], scope forced to future occurrences.
    pub async fn remove_future_events(&self, id: &str) -> BridgeResult<()> {
        self.call(RemoveEvent {
            id: id.to_string(),
            options: RemovalOptions {
                future_events: true,
            },
        })
        .await
    }
}
