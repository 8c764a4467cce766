use super::event_type::EventType;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One sleep/wake transition, normalized to UTC.
/// Immutable once created; the emission order of events encodes the
/// alternating sleep/wake pattern of the source sheet.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimeEvent {
    pub time: DateTime<Utc>,
    pub kind: EventType,
}

impl TimeEvent {
    pub fn new(time: DateTime<Utc>, kind: EventType) -> Self {
        Self { time, kind }
    }

    pub fn timestamp_str(&self) -> String {
        self.time.to_rfc3339()
    }
}
