//! Excel serial dates
//!
//! Serial day numbers are converted through the Unix epoch: serial 25569 is
//! 1970-01-01, so `(serial - 25569) * 86400 * 1000` is milliseconds since the
//! epoch. Dates are rendered in UTC as `DD-MM-YYYY`.

use chrono::{DateTime, NaiveDate};

use crate::types::CellValue;

/// Serial day number of 1970-01-01
pub const EXCEL_UNIX_EPOCH_DAYS: f64 = 25569.0;

const SECONDS_PER_DAY: f64 = 86400.0;
const MILLIS_PER_SECOND: f64 = 1000.0;

/// Display format for converted dates (day-month-year)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Convert an Excel serial day number to a calendar date
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let millis = ((serial - EXCEL_UNIX_EPOCH_DAYS) * SECONDS_PER_DAY * MILLIS_PER_SECOND).trunc();
    if millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64).map(|dt| dt.date_naive())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date previously rendered with [`DATE_FORMAT`]
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Render a rounding-date cell.
///
/// Blank cells become `sentinel`. Cells holding a number (or text that parses
/// as one) are treated as serial dates; anything else is passed through.
pub fn render_date_cell(cell: &CellValue, sentinel: &str) -> String {
    if cell.is_blank() {
        return sentinel.to_string();
    }
    match cell.as_number().and_then(serial_to_date) {
        Some(date) => format_date(date),
        None => cell.to_display(),
    }
}
