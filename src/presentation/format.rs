/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/2/26
******************************************************************************/

//! Display formatting helpers
//!
//! The platform services emit ISO-8601 timestamps, usually without an offset
//! marker, and progress ratios as fractions. These helpers turn both into the
//! display strings the frontends show.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Formats an ISO-8601 timestamp for display as `YYYY/MM/DD HH:MM`
///
/// Accepts offset-carrying timestamps, naive timestamps (with or without
/// fractional seconds) and bare dates. An input that parses as none of these
/// is returned unchanged.
#[must_use]
pub fn format_date(iso: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return format!("{} 00:00", date.format("%Y/%m/%d"));
    }
    iso.to_string()
}

/// Formats a fractional ratio as a percentage with one decimal place
///
/// `0.256` becomes `"25.6%"`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
