//! UTC day-boundary utilities based on `chrono`.
//!
//! This module provides the calendar primitives the date range is built
//! from: truncating an instant to UTC midnight, stepping back one day,
//! and rendering instants in the two string forms the export pipeline
//! consumes.
//!
//! # Provided Functions
//! - [`truncate_to_midnight`]: Zeroes the time-of-day of an instant.
//! - [`previous_day`]: Subtracts exactly 24 hours, if representable.
//! - [`format_iso_utc`]: `YYYY-MM-DDTHH:MM:SSZ`
//! - [`format_path_segment`]: `YYYY/MM/DD`

use chrono::{DateTime, NaiveTime, TimeDelta, Utc};

/// `strftime` pattern for ISO-8601 UTC timestamps with a literal `Z`.
pub const ISO_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// `strftime` pattern for hierarchical storage key segments.
pub const PATH_SEGMENT_FORMAT: &str = "%Y/%m/%d";

/// Returns 00:00:00.000 UTC of the calendar day containing `instant`.
///
/// ## Example
/// ```
/// use log_export_dates::chrono::{TimeZone, Utc};
/// use log_export_dates::time::midnight::truncate_to_midnight;
///
/// let t = Utc.with_ymd_and_hms(2025, 6, 15, 23, 59, 59).unwrap();
/// let midnight = truncate_to_midnight(t);
/// assert_eq!(midnight, Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap());
/// ```
pub fn truncate_to_midnight(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Returns `instant` minus exactly one day (24 hours).
///
/// Returns `None` only when the result would fall before the earliest
/// instant `chrono` can represent.
pub fn previous_day(instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
    instant.checked_sub_signed(TimeDelta::days(1))
}

/// Formats `instant` as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_iso_utc(instant: &DateTime<Utc>) -> String {
    instant.format(ISO_UTC_FORMAT).to_string()
}

/// Formats the date of `instant` as `YYYY/MM/DD`.
pub fn format_path_segment(instant: &DateTime<Utc>) -> String {
    instant.format(PATH_SEGMENT_FORMAT).to_string()
}
