//! Column parser: turns one raw sheet column into a [`Day`].
//!
//! A column is, by convention of the source sheet, a `dd/MM/yy` date header
//! followed by a run of time-of-day cells and blank padding. The time cells
//! encode alternating sleep/wake transitions, with two sentinel values mixed
//! in by the sheet's author: `00:00[:00]` marks a midnight rollover (the next
//! real entry is a wake-up, not a bedtime) and `23:59[:00]` marks the end of
//! a day. Neither sentinel is an event. Accidental duplicate entries of the
//! same clock time are noise and collapse into one event.

use crate::errors::{AppError, AppResult};
use crate::models::{day::Day, event::TimeEvent, event_type::EventType};
use crate::sheet::Grid;
use crate::utils::date::parse_sheet_date;
use crate::utils::time::{parse_sheet_time, to_utc};
use chrono::TimeZone;

/// Parse one data-bearing column into a `Day`.
///
/// Wall-clock cells are interpreted in `tz` and stored normalized to UTC.
/// A date or time cell that does not parse is fatal for the column.
pub fn parse_column<Tz: TimeZone>(tz: &Tz, cells: &[String]) -> AppResult<Day> {
    let header = cells
        .first()
        .ok_or_else(|| AppError::InvalidDate(String::new()))?;
    let date = parse_sheet_date(header)?;

    // Everything at or after the first empty cell is padding.
    let first_blank = cells
        .iter()
        .position(|c| c.is_empty())
        .unwrap_or(cells.len());
    let vals = &cells[1..first_blank];

    let mut kind = EventType::Sleep;
    let mut last_accepted: Option<&str> = None;
    let mut events = Vec::new();

    for val in vals {
        if val == "00:00" || val == "00:00:00" {
            // Midnight rollover: the next accepted entry is a wake-up.
            kind = EventType::Wake;
            continue;
        }

        if val == "23:59" || val == "23:59:00" {
            continue;
        }

        if last_accepted.is_some_and(|prev| prev == val.as_str()) {
            continue;
        }
        last_accepted = Some(val.as_str());

        let wall = date.and_time(parse_sheet_time(val)?);
        events.push(TimeEvent::new(to_utc(tz, wall)?, kind));
        kind = kind.flip();
    }

    Ok(Day {
        date,
        values: events,
    })
}

/// Parse every data-bearing column of a column-major grid, in column order.
/// A column whose first cell is empty carries no data and is skipped.
pub fn parse_columns<Tz: TimeZone>(tz: &Tz, grid: &Grid) -> AppResult<Vec<Day>> {
    grid.iter()
        .filter(|col| col.first().is_some_and(|c| !c.is_empty()))
        .map(|col| parse_column(tz, col))
        .collect()
}
