//! Time source for workout timestamps.

use chrono::{DateTime, NaiveDate, Utc};

/// Where `created_at` stamps and default workout dates come from. Injected so
/// tests can pin the time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Calendar day of [`Clock::now`] in UTC. Used as the workout date when a
    /// request does not name one.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
