use super::event::TimeEvent;
use chrono::NaiveDate;
use serde::Serialize;

/// Parsed representation of one sheet column: a calendar date plus its
/// ordered sleep/wake events.
#[derive(Debug, Clone, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub values: Vec<TimeEvent>,
}
