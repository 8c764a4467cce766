// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse --range / --period (year / month / day / intervallo).
///
/// Supporta:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - start:end negli stessi formati
/// Turn an optional --range/--period value into inclusive date bounds.
/// `None` and the special value "all" mean no filtering.
pub(crate) fn resolve_bounds(range: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match range {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}

pub(crate) fn in_bounds(d: NaiveDate, bounds: &Option<(NaiveDate, NaiveDate)>) -> bool {
    match bounds {
        None => true,
        Some((start, end)) => *start <= d && d <= *end,
    }
}

pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start, _) = parse_period(start_raw.trim())?;
        let (_, end) = parse_period(end_raw.trim())?;

        if start > end {
            return Err(AppError::from(std::io::Error::other(
                "range start is after range end",
            )));
        }

        Ok((start, end))
    } else {
        parse_period(r.trim())
    }
}

/// Inclusive date bounds of one period expression.
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::from(std::io::Error::other("invalid year")))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::from(std::io::Error::other("invalid start date")))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::from(std::io::Error::other("invalid end date")))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| AppError::from(std::io::Error::other("invalid month")))?;
            let last = month_last_day(first)
                .ok_or_else(|| AppError::from(std::io::Error::other("invalid month")))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::from(std::io::Error::other("invalid date")))?;
            Ok((d, d))
        }
        _ => Err(AppError::from(std::io::Error::other(
            "unsupported period format",
        ))),
    }
}

fn month_last_day(first: NaiveDate) -> Option<NaiveDate> {
    use chrono::Datelike;

    let (y, m) = (first.year(), first.month());
    let next_month_first = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)?
    };
    next_month_first.pred_opt()
}
