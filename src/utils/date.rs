use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse a sheet date header cell (day/month/2-digit-year, e.g. "05/03/24").
pub fn parse_sheet_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%y").map_err(|_| AppError::InvalidDate(s.to_string()))
}
