//! Event-to-row folder: pairs each SLEEP timestamp with the next WAKE into
//! CSV rows for the timeline renderer.
//!
//! The fold is incremental rather than a pairwise zip: a log that begins
//! mid-sleep has no leading SLEEP marker, and a day that opens on a midnight
//! rollover can put two WAKE events against one SLEEP, so the most recent
//! unmatched sleep timestamp has to be tracked across the whole stream.

use crate::errors::{AppError, AppResult};
use crate::models::{event::TimeEvent, event_type::EventType};
use crate::utils::time::start_of_day;
use chrono::{NaiveDateTime, TimeZone};
use regex::Regex;

/// Timestamp format of the generated rows. The browser renderer re-parses
/// them with [`RENDERER_DATETIME_PATTERN`]; field order, separator and this
/// format are its input contract.
pub const ROW_DATETIME_FMT: &str = "%d/%m/%Y %H:%M:%S";

/// The renderer's date/time regex (DD/MM/YYYY HH:mm:ss).
pub const RENDERER_DATETIME_PATTERN: &str =
    r"^(\d{2})/(\d{2})/(\d{4}) (\d{2}):(\d{2}):(\d{2})$";

/// One completed sleep session, as wall-clock timestamps ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepRow {
    pub sleep: NaiveDateTime,
    pub wake: NaiveDateTime,
}

impl SleepRow {
    pub fn render(&self) -> String {
        format!(
            "{},{}",
            self.sleep.format(ROW_DATETIME_FMT),
            self.wake.format(ROW_DATETIME_FMT)
        )
    }
}

/// Fold a flattened, chronologically ordered event stream into sleep rows.
///
/// The input is trusted to be in true chronological order; no sorting happens
/// here. An empty stream is an explicit error, callers decide how to surface
/// it.
///
/// Boundary rule: when the stream opens on a WAKE the log began mid-sleep, so
/// the pending sleep timestamp starts at wall-clock midnight (in `tz`) of
/// that first event's day.
pub fn fold_rows<Tz: TimeZone>(tz: &Tz, events: &[TimeEvent]) -> AppResult<Vec<SleepRow>> {
    let first = events.first().ok_or(AppError::NoEvents)?;

    let mut sleep = match first.kind {
        EventType::Wake => start_of_day(tz, first.time),
        EventType::Sleep => first.time.naive_utc(),
    };

    let mut rows = Vec::new();
    for ev in events {
        match ev.kind {
            EventType::Sleep => sleep = ev.time.naive_utc(),
            EventType::Wake => rows.push(SleepRow {
                sleep,
                wake: ev.time.naive_utc(),
            }),
        }
    }

    Ok(rows)
}

/// Render sleep rows as the final CSV text: a fixed header, rows separated by
/// a single newline, no trailing newline after the last row.
pub fn render_csv(rows: &[SleepRow]) -> String {
    let mut csv = String::from("Sleep,Wake\n");
    let body: Vec<String> = rows.iter().map(SleepRow::render).collect();
    csv.push_str(&body.join("\n"));
    csv
}

/// Full folding contract: event stream in, CSV text out.
pub fn fold_events<Tz: TimeZone>(tz: &Tz, events: &[TimeEvent]) -> AppResult<String> {
    let rows = fold_rows(tz, events)?;
    Ok(render_csv(&rows))
}

/// Check every data row against the renderer's date/time pattern before the
/// file is written; the renderer throws away the whole chart on the first
/// field it cannot parse, so a malformed row is fatal here instead.
pub fn check_renderer_contract(csv: &str) -> AppResult<()> {
    let re = Regex::new(RENDERER_DATETIME_PATTERN).unwrap();

    for line in csv.lines().skip(1) {
        let ok = match line.split_once(',') {
            Some((sleep, wake)) => re.is_match(sleep) && re.is_match(wake),
            None => false,
        };
        if !ok {
            return Err(AppError::MalformedRow(line.to_string()));
        }
    }

    Ok(())
}
