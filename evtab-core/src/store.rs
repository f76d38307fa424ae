//! In-memory mirror of server state.

use crate::event::{Event, EventId};

/// Ordered sequence of event records, insertion order as received from the
/// server or appended locally.
///
/// The store is the single rendering source of truth for the UI. It performs
/// no validation and no persistence; ids are only as unique as the server
/// guarantees. All mutation goes through the methods below.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire sequence.
    pub fn set_all(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// Read view of the current sequence.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    /// Find a record by id.
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Append one record.
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Replace the record whose id matches. No-op if there is no match.
    pub fn update(&mut self, event: Event) {
        if let Some(existing) = self.events.iter_mut().find(|e| e.id == event.id) {
            *existing = event;
        }
    }

    /// Drop the record whose id matches. No-op if there is no match.
    pub fn remove(&mut self, id: &EventId) {
        self.events.retain(|e| &e.id != id);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
