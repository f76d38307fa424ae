//! Event record types.
//!
//! These mirror the wire format of the events REST API: camelCase field
//! names, `YYYY-MM-DD` date strings, and server-assigned ids that may arrive
//! as JSON strings or numbers.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned event identifier.
///
/// The client never generates one of these; they only come from API
/// responses. Stored as a string regardless of how the server encodes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// The reference server hands out numeric ids; accept both encodings.
impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = EventId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or integer id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<EventId, E> {
                Ok(EventId::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<EventId, E> {
                Ok(EventId::new(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<EventId, E> {
                Ok(EventId::new(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// An event record as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub event_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// The POST/PUT body: an event without an id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub event_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Validation errors for user-entered event fields.
#[derive(Error, Debug, PartialEq)]
pub enum DraftError {
    #[error("Please fill in the {0}")]
    Missing(&'static str),

    #[error("Invalid {field}: \"{value}\" (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
}

impl EventDraft {
    /// Validate raw form input into a draft.
    ///
    /// All three fields are required; the name is trimmed. No ordering check
    /// between start and end is made.
    pub fn parse(name: &str, start: &str, end: &str) -> Result<Self, DraftError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DraftError::Missing("event name"));
        }

        Ok(EventDraft {
            event_name: name.to_string(),
            start_date: parse_date("start date", start)?,
            end_date: parse_date("end date", end)?,
        })
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DraftError::Missing(field));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| DraftError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
