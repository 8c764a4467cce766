//! Column parser behavior against the library API.

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use sleepcharter::core::parser::{parse_column, parse_columns};
use sleepcharter::errors::AppError;
use sleepcharter::models::event_type::EventType;

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn col(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_example_column_parses_to_day() {
    let day = parse_column(&utc(), &col(&["05/03/24", "23:10", "07:15", ""])).unwrap();

    assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(day.values.len(), 2);

    assert_eq!(day.values[0].kind, EventType::Sleep);
    assert_eq!(
        day.values[0].time,
        Utc.with_ymd_and_hms(2024, 3, 5, 23, 10, 0).unwrap()
    );

    assert_eq!(day.values[1].kind, EventType::Wake);
    assert_eq!(
        day.values[1].time,
        Utc.with_ymd_and_hms(2024, 3, 5, 7, 15, 0).unwrap()
    );
}

#[test]
fn test_times_are_converted_from_zone_to_utc() {
    let cet = FixedOffset::east_opt(3600).unwrap();
    let day = parse_column(&cet, &col(&["05/03/24", "23:10", "07:15", ""])).unwrap();

    assert_eq!(
        day.values[0].time,
        Utc.with_ymd_and_hms(2024, 3, 5, 22, 10, 0).unwrap()
    );
    assert_eq!(
        day.values[1].time,
        Utc.with_ymd_and_hms(2024, 3, 5, 6, 15, 0).unwrap()
    );
}

#[test]
fn test_event_types_strictly_alternate_from_sleep() {
    let day = parse_column(
        &utc(),
        &col(&["05/03/24", "13:00", "14:30", "23:10", "07:15", ""]),
    )
    .unwrap();

    let kinds: Vec<EventType> = day.values.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventType::Sleep,
            EventType::Wake,
            EventType::Sleep,
            EventType::Wake
        ]
    );
}

#[test]
fn test_midnight_sentinel_forces_wake_and_emits_nothing() {
    let day = parse_column(&utc(), &col(&["01/02/24", "00:00", "07:15", "23:30", ""])).unwrap();

    // 00:00 itself is not an event; the next accepted entry is a wake-up and
    // alternation resumes from there.
    assert_eq!(day.values.len(), 2);
    assert_eq!(day.values[0].kind, EventType::Wake);
    assert_eq!(day.values[1].kind, EventType::Sleep);
}

#[test]
fn test_midnight_sentinel_with_seconds() {
    let day = parse_column(&utc(), &col(&["01/02/24", "00:00:00", "07:15", ""])).unwrap();

    assert_eq!(day.values.len(), 1);
    assert_eq!(day.values[0].kind, EventType::Wake);
}

#[test]
fn test_end_of_day_sentinel_is_skipped_without_flipping() {
    for sentinel in ["23:59", "23:59:00"] {
        let day =
            parse_column(&utc(), &col(&["05/03/24", sentinel, "23:10", "07:15", ""])).unwrap();

        assert_eq!(day.values.len(), 2);
        assert_eq!(day.values[0].kind, EventType::Sleep);
        assert_eq!(day.values[1].kind, EventType::Wake);
    }
}

#[test]
fn test_consecutive_duplicate_cells_collapse() {
    let day = parse_column(&utc(), &col(&["05/03/24", "23:10", "23:10", "07:15", ""])).unwrap();

    assert_eq!(day.values.len(), 2);
    assert_eq!(day.values[0].kind, EventType::Sleep);
    assert_eq!(day.values[1].kind, EventType::Wake);
}

#[test]
fn test_duplicate_across_sentinel_still_collapses() {
    // Sentinels do not update the last accepted value, so a repeat separated
    // by one is still noise.
    let day = parse_column(
        &utc(),
        &col(&["05/03/24", "23:10", "23:59", "23:10", "07:15", ""]),
    )
    .unwrap();

    assert_eq!(day.values.len(), 2);
}

#[test]
fn test_cells_after_first_blank_are_padding() {
    let day = parse_column(&utc(), &col(&["05/03/24", "23:10", "", "07:15"])).unwrap();

    assert_eq!(day.values.len(), 1);
}

#[test]
fn test_column_without_blank_uses_full_tail() {
    let day = parse_column(&utc(), &col(&["05/03/24", "23:10", "07:15"])).unwrap();

    assert_eq!(day.values.len(), 2);
}

#[test]
fn test_seconds_format_is_a_fallback() {
    let day = parse_column(&utc(), &col(&["05/03/24", "23:10:30", "07:15", ""])).unwrap();

    assert_eq!(
        day.values[0].time,
        Utc.with_ymd_and_hms(2024, 3, 5, 23, 10, 30).unwrap()
    );
}

#[test]
fn test_bad_date_cell_is_fatal() {
    let res = parse_column(&utc(), &col(&["2024-03-05", "23:10", ""]));
    assert!(matches!(res, Err(AppError::InvalidDate(_))));
}

#[test]
fn test_bad_time_cell_is_fatal() {
    let res = parse_column(&utc(), &col(&["05/03/24", "banana", ""]));
    assert!(matches!(res, Err(AppError::InvalidTime(_))));
}

#[test]
fn test_parse_columns_skips_headerless_columns() {
    let grid = vec![
        col(&["", "23:10", "07:15"]),
        col(&["05/03/24", "23:10", "07:15", ""]),
        col(&["", "", ""]),
        col(&["06/03/24", "22:45", "06:50", ""]),
    ];

    let days = parse_columns(&utc(), &grid).unwrap();

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
}
