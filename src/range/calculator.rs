//! # Date Range Calculator
//!
//! Derives the `[yesterday, today)` export window from a single instant.
//!
//! [`compute`] is the pure function: instant in, record out.
//! [`DateRangeCalculator`] wires it to a [`Clock`] and an optional
//! [`ResultSink`] for the per-invocation diagnostic line.
//!
//! # Example
//! ```rust
//! use std::sync::Arc;
//!
//! use log_export_dates::chrono::{TimeZone, Utc};
//! use log_export_dates::range::calculator::DateRangeCalculator;
//! use log_export_dates::time::clock::FixedClock;
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 1, 2, 0, 0).unwrap();
//! let calculator = DateRangeCalculator::new(Arc::new(FixedClock::new(now)));
//!
//! let range = calculator.calculate().unwrap();
//! assert_eq!(range.yesterday_path, "2024/02/29");
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::range::DateRangeError;
use crate::range::date_range::DateRange;
use crate::range::export_range::ExportRange;
use crate::report::sink::ResultSink;
use crate::time::clock::Clock;

/// Computes the export record for the UTC day containing `now`.
///
/// `today` is `now` truncated to UTC midnight, `yesterday` is exactly 24
/// hours earlier, and `yesterday_path` is `yesterday` as `YYYY/MM/DD`.
/// Only the calendar date of `now` matters.
///
/// # Errors
/// [`DateRangeError::OutOfRange`] if the day before `now` is not representable.
pub fn compute(now: DateTime<Utc>) -> Result<ExportRange, DateRangeError> {
    let range = DateRange::ending_on_day_of(now)?;
    debug!(
        start_ms = range.start_millis(),
        end_ms = range.end_millis(),
        "derived export window"
    );

    Ok(ExportRange::from(&range))
}

/// Samples a [`Clock`] once per call and derives the export record from it.
#[derive(Clone)]
pub struct DateRangeCalculator {
    clock: Arc<dyn Clock>,
    sink: Option<Arc<dyn ResultSink>>,
}

impl DateRangeCalculator {
    /// Creates a calculator with no diagnostic sink.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, sink: None }
    }

    /// Attaches a sink that receives every computed record.
    pub fn with_sink(mut self, sink: Arc<dyn ResultSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Samples the clock, computes the record and reports it to the sink.
    pub fn calculate(&self) -> Result<ExportRange, DateRangeError> {
        let now = self.clock.now();
        debug!(%now, "sampled current instant");

        let range = compute(now)?;

        if let Some(sink) = &self.sink {
            sink.emit(&range);
        }

        Ok(range)
    }
}

impl std::fmt::Debug for DateRangeCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateRangeCalculator")
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::{TimeZone, Timelike};

    use crate::report::sink::NoopSink;
    use crate::time::clock::FixedClock;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn epoch_seconds(iso: &str) -> i64 {
        DateTime::parse_from_rfc3339(iso).unwrap().timestamp()
    }

    /// Records every emitted range.
    #[derive(Default)]
    struct RecordingSink {
        emitted: Mutex<Vec<ExportRange>>,
    }

    impl ResultSink for RecordingSink {
        fn emit(&self, range: &ExportRange) {
            self.emitted.lock().unwrap().push(range.clone());
        }
    }

    /// Counts how often the clock is read.
    struct CountingClock {
        instant: DateTime<Utc>,
        reads: AtomicUsize,
    }

    impl Clock for CountingClock {
        fn now(&self) -> DateTime<Utc> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.instant
        }
    }

    #[test]
    fn non_leap_year_march_first() {
        let range = compute(utc(2025, 3, 1, 0, 0, 0)).unwrap();

        assert_eq!(range.today, "2025-03-01T00:00:00Z");
        assert_eq!(range.yesterday, "2025-02-28T00:00:00Z");
        assert_eq!(range.yesterday_path, "2025/02/28");
    }

    #[test]
    fn leap_year_march_first() {
        let range = compute(utc(2024, 3, 1, 0, 0, 0)).unwrap();

        assert_eq!(range.today, "2024-03-01T00:00:00Z");
        assert_eq!(range.yesterday, "2024-02-29T00:00:00Z");
        assert_eq!(range.yesterday_path, "2024/02/29");
    }

    #[test]
    fn new_year_crosses_into_previous_year() {
        let range = compute(utc(2025, 1, 1, 0, 0, 0)).unwrap();

        assert_eq!(range.today, "2025-01-01T00:00:00Z");
        assert_eq!(range.yesterday, "2024-12-31T00:00:00Z");
        assert_eq!(range.yesterday_path, "2024/12/31");
    }

    #[test]
    fn time_of_day_does_not_affect_output() {
        let late = compute(utc(2025, 6, 15, 23, 59, 59)).unwrap();
        let early = compute(utc(2025, 6, 15, 0, 0, 1)).unwrap();

        assert_eq!(late, early);
        assert_eq!(late.today, "2025-06-15T00:00:00Z");
        assert_eq!(late.yesterday_path, "2025/06/14");
    }

    #[test]
    fn same_instant_yields_identical_output() {
        let now = utc(2025, 8, 9, 10, 11, 12);

        let first = serde_json::to_string(&compute(now).unwrap()).unwrap();
        let second = serde_json::to_string(&compute(now).unwrap()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn properties_hold_across_a_sweep_of_instants() {
        // Every 7h13m over roughly four years, covering a leap day and
        // all month boundaries at varied times of day.
        let mut t = utc(2023, 1, 1, 0, 0, 0);
        let stop = utc(2027, 1, 1, 0, 0, 0);
        let step = chrono::TimeDelta::minutes(7 * 60 + 13);

        while t < stop {
            let range = compute(t).unwrap();

            let today = DateTime::parse_from_rfc3339(&range.today).unwrap();
            assert_eq!((today.hour(), today.minute(), today.second()), (0, 0, 0));
            assert_eq!(today.date_naive(), t.date_naive());

            assert_eq!(
                epoch_seconds(&range.today) - epoch_seconds(&range.yesterday),
                86_400
            );

            let expected_path = range.yesterday[..10].replace('-', "/");
            assert_eq!(range.yesterday_path, expected_path);

            t += step;
        }
    }

    #[test]
    fn earliest_representable_day_is_an_error() {
        let err = compute(DateTime::<Utc>::MIN_UTC).unwrap_err();

        assert!(matches!(err, DateRangeError::OutOfRange { .. }));
    }

    #[test]
    fn calculator_samples_clock_once() {
        let clock = Arc::new(CountingClock {
            instant: utc(2025, 3, 1, 12, 0, 0),
            reads: AtomicUsize::new(0),
        });
        let calculator = DateRangeCalculator::new(clock.clone());

        calculator.calculate().unwrap();

        assert_eq!(clock.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn calculator_emits_one_record_per_calculation() {
        let sink = Arc::new(RecordingSink::default());
        let calculator =
            DateRangeCalculator::new(Arc::new(FixedClock::new(utc(2025, 1, 1, 5, 0, 0))))
                .with_sink(sink.clone());

        let range = calculator.calculate().unwrap();

        let emitted = sink.emitted.lock().unwrap();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0], range);
    }

    #[test]
    fn sink_does_not_change_the_result() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(utc(2024, 3, 1, 1, 2, 3)));

        let bare = DateRangeCalculator::new(clock.clone()).calculate().unwrap();
        let noop = DateRangeCalculator::new(clock)
            .with_sink(Arc::new(NoopSink))
            .calculate()
            .unwrap();

        assert_eq!(bare, noop);
    }

    #[test]
    fn failed_calculation_emits_nothing() {
        let sink = Arc::new(RecordingSink::default());
        let calculator =
            DateRangeCalculator::new(Arc::new(FixedClock::new(DateTime::<Utc>::MIN_UTC)))
                .with_sink(sink.clone());

        assert!(calculator.calculate().is_err());
        assert!(sink.emitted.lock().unwrap().is_empty());
    }
}
