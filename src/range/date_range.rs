//! # Export Date Range
//!
//! [`DateRange`] is the typed form of the window handed to the log-export
//! step: from yesterday's UTC midnight (inclusive) to today's UTC midnight
//! (exclusive).
//!
//! The string record returned to callers is
//! [`ExportRange`](crate::range::export_range::ExportRange), derived from
//! this type so both views always agree.

use chrono::{DateTime, Utc};

use crate::error::range::DateRangeError;
use crate::time::midnight::{previous_day, truncate_to_midnight};

/// Half-open UTC window `[start, end)` covering exactly one calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Builds the range that ends at the UTC midnight starting the day of `now`.
    ///
    /// # Errors
    /// Returns [`DateRangeError::OutOfRange`] if the day before `now` cannot be
    /// represented.
    ///
    /// # Example
    /// ```
    /// use log_export_dates::chrono::{TimeZone, Utc};
    /// use log_export_dates::range::date_range::DateRange;
    ///
    /// let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    /// let range = DateRange::ending_on_day_of(now).unwrap();
    ///
    /// assert_eq!(range.start(), Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap());
    /// assert_eq!(range.end(), Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    /// ```
    pub fn ending_on_day_of(now: DateTime<Utc>) -> Result<Self, DateRangeError> {
        let end = truncate_to_midnight(now);
        let start = previous_day(end).ok_or(DateRangeError::OutOfRange { instant: now })?;

        Ok(Self { start, end })
    }

    /// Yesterday, 00:00:00 UTC. Inclusive.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Today, 00:00:00 UTC. Exclusive.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Start as milliseconds since the Unix epoch, the unit log-export APIs expect.
    pub fn start_millis(&self) -> i64 {
        self.start.timestamp_millis()
    }

    /// End as milliseconds since the Unix epoch.
    pub fn end_millis(&self) -> i64 {
        self.end.timestamp_millis()
    }
}
