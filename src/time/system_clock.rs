use chrono::{DateTime, Utc};

use crate::time::clock::Clock;

/// A [`Clock`] implementation backed by the system clock.
///
/// # Overview
/// `SystemClock` samples the operating system's current time and reports it
/// in UTC. No timezone is configured: day boundaries are always UTC
/// midnight.
///
/// # Responsibility
/// - Choosing between `SystemClock` and a fixed instant is the responsibility
///   of the **composition root** (see [`AppConfig::build_calculator`]).
/// - Application logic should treat `Clock` as a trusted source.
///
/// [`AppConfig::build_calculator`]: crate::config::app::AppConfig::build_calculator
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
