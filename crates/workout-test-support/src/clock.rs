//! Pinned `Clock` for tests.

use chrono::{DateTime, TimeZone, Utc};
use workout_core::clock::Clock;

/// A clock frozen at one instant, so `created_at` and defaulted workout dates
/// are predictable.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Freezes the clock at the given UTC wall time.
    ///
    /// # Panics
    ///
    /// Panics if the components do not form a valid UTC timestamp.
    #[must_use]
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
                .unwrap(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
