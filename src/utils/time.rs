//! Time utilities: sheet time parsing, timezone resolution, local→UTC
//! conversion, duration computations.

use crate::errors::{AppError, AppResult};
use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

/// Resolved timezone setting. The sheet's wall-clock times are interpreted in
/// this zone; everything downstream is UTC.
#[derive(Debug, Clone, Copy)]
pub enum Zone {
    Local,
    Fixed(FixedOffset),
}

/// Accepts "local", "utc"/"UTC"/"Z", or a fixed offset such as "+02:00".
pub fn parse_zone(s: &str) -> AppResult<Zone> {
    match s.trim() {
        "" | "local" | "Local" => Ok(Zone::Local),
        "utc" | "UTC" | "Z" => Ok(Zone::Fixed(FixedOffset::east_opt(0).unwrap())),
        other => other
            .parse::<FixedOffset>()
            .map(Zone::Fixed)
            .map_err(|_| AppError::InvalidTimezone(s.to_string())),
    }
}

/// Parse a sheet time cell. The sheet mixes "HH:MM" and "HH:MM:SS"; the
/// second format is a fallback, not an error path.
pub fn parse_sheet_time(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// Interpret a wall-clock datetime in `tz` and normalize it to UTC.
/// An ambiguous wall time (DST fold) resolves to the earliest instant; a
/// nonexistent one (DST gap) is an error.
pub fn to_utc<Tz: TimeZone>(tz: &Tz, wall: NaiveDateTime) -> AppResult<DateTime<Utc>> {
    match tz.from_local_datetime(&wall) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(AppError::InvalidTime(wall.to_string())),
    }
}

/// Wall-clock midnight, in `tz`, of the day containing the given instant.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, t: DateTime<Utc>) -> NaiveDateTime {
    t.with_timezone(tz)
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}
