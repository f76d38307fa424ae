//! Core types for evtab.
//!
//! This crate provides the types shared by the evtab CLI and table UI:
//! - `Event`, `EventId` and `EventDraft` for event records
//! - `EventStore`, the in-memory mirror of server state

pub mod event;
pub mod store;

// Re-export the main types at crate root for convenience
pub use event::{DraftError, Event, EventDraft, EventId};
pub use store::EventStore;
