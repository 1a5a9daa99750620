use chrono::{DateTime, Utc};

/// A port that provides the **current instant** for the application.
///
/// # Purpose
/// This trait abstracts access to "now" so that:
///
/// - The date range computation does **not** read the system time itself
/// - Implementations can be swapped (system clock, fixed clock, replay, etc.)
/// - Tests can be deterministic and time-independent
///
/// # Design Notes
/// - The returned instant is always UTC. Callers never see a local offset.
/// - This trait represents an **external capability**, similar to a Repository or Mailer.
///
/// # Typical Implementations
/// - [`SystemClock`](crate::time::system_clock::SystemClock): Uses the OS clock
/// - [`FixedClock`]: Returns a constant instant (for tests and backfills)
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// A [`Clock`] that always returns the same instant.
///
/// # Example
/// ```
/// use log_export_dates::chrono::{TimeZone, Utc};
/// use log_export_dates::time::clock::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2025, 12, 5, 6, 0, 0).unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    #[test]
    fn fixed_clock_returns_given_instant() {
        let instant = Utc.with_ymd_and_hms(2025, 10, 2, 13, 45, 10).unwrap();
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn clock_trait_object_works() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(instant));

        assert_eq!(clock.now(), instant);
    }
}
