//! Asynchronous bridge to a device calendar store.
//!
//! The store itself (permissions, persistence, recurrence expansion) is an
//! external collaborator implementing [`EventStore`], injected into
//! [`CalendarBridge`] at construction. The bridge shapes parameters
//! (explicit defaults, portable-to-native color conversion) and delegates,
//! so every failure it surfaces originates in the store.

pub mod authorization;
pub mod bridge;
pub mod calendar;
pub mod color;
pub mod error;
pub mod event;
pub mod protocol;
pub mod store;

pub use authorization::AuthorizationStatus;
pub use bridge::CalendarBridge;
pub use calendar::{Calendar, CalendarOptions};
pub use error::{BridgeError, BridgeResult};
pub use event::{
    Availability, Event, EventDetails, Frequency, RecurrenceRule, RemovalOptions, SaveOptions,
};
pub use store::EventStore;
