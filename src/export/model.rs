// src/export/model.rs

use crate::models::event::TimeEvent;
use serde::Serialize;

/// Struttura "piatta" per export degli eventi.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub timestamp: String, // RFC 3339, UTC
    pub date: String,      // YYYY-MM-DD (UTC)
    pub time: String,      // HH:MM:SS (UTC)
    pub kind: String,      // "sleep" | "wake"
}

impl From<&TimeEvent> for EventExport {
    fn from(ev: &TimeEvent) -> Self {
        Self {
            timestamp: ev.timestamp_str(),
            date: ev.time.format("%Y-%m-%d").to_string(),
            time: ev.time.format("%H:%M:%S").to_string(),
            kind: ev.kind.et_as_str().to_string(),
        }
    }
}
