//! Wall-clock abstraction for testability
//!
//! Time-of-day logic needs a *local wall-clock* reading (calendar date plus
//! hour and minute), not a monotonic instant. [`Clock`] supplies that
//! reading so callers can swap the system clock for a fixed one in tests.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use flexkit_common::testing::{Clock, MockClock, SystemClock};
//!
//! // Use system clock in production
//! let clock = SystemClock;
//! let _now = clock.now();
//!
//! // Use mock clock in tests
//! let noon = NaiveDate::from_ymd_opt(2018, 2, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let mock = MockClock::at(noon);
//! mock.advance(Duration::hours(12));
//! assert_eq!(mock.now(), noon + Duration::hours(12));
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Duration, Local, NaiveDateTime};

/// Trait for wall-clock reads
pub trait Clock: Send + Sync {
    /// Current local date and time, without time zone information.
    fn now(&self) -> NaiveDateTime;
}

/// Real system clock reading the local time zone
///
/// Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Mock clock for deterministic testing
///
/// Clones share the same reading, so advancing one advances all of them.
#[derive(Debug, Clone)]
pub struct MockClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl MockClock {
    /// Create a mock clock pinned to the current system time
    pub fn new() -> Self {
        Self::at(SystemClock.now())
    }

    /// Create a mock clock pinned to `moment`
    pub fn at(moment: NaiveDateTime) -> Self {
        Self { current: Arc::new(Mutex::new(moment)) }
    }

    /// Advance the mock clock by a (possibly negative) duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += duration;
    }

    /// Set the mock clock to a specific moment
    pub fn set(&self, moment: NaiveDateTime) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = moment;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for testing::time.
    use chrono::{NaiveDate, Timelike};

    use super::*;

    fn moment(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 2, 1).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    /// Validates the system clock scenario.
    ///
    /// Assertions:
    /// - Ensures `now2 >= now1` evaluates to true.
    #[test]
    fn test_system_clock() {
        let clock = SystemClock;
        let now1 = clock.now();
        let now2 = clock.now();

        assert!(now2 >= now1);
    }

    /// Validates `MockClock::at` behavior for the advance across midnight
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms the reading rolls into the next calendar day.
    #[test]
    fn test_mock_clock_advance_across_midnight() {
        let clock = MockClock::at(moment(23, 30));
        clock.advance(Duration::minutes(45));

        let now = clock.now();
        assert_eq!(now.date(), NaiveDate::from_ymd_opt(2018, 2, 2).unwrap());
        assert_eq!((now.hour(), now.minute()), (0, 15));
    }

    #[test]
    fn test_mock_clock_negative_advance() {
        let clock = MockClock::at(moment(0, 10));
        clock.advance(Duration::minutes(-20));
        assert_eq!(clock.now(), moment(0, 10) - Duration::minutes(20));
    }

    /// Validates `MockClock::set` behavior.
    #[test]
    fn test_mock_clock_set() {
        let clock = MockClock::at(moment(6, 10));
        clock.set(moment(18, 10));
        assert_eq!(clock.now(), moment(18, 10));
    }

    /// Validates `MockClock::at` behavior for the mock clock clone scenario.
    ///
    /// Assertions:
    /// - Confirms clones observe each other's advances.
    #[test]
    fn test_mock_clock_clone() {
        let clock1 = MockClock::at(moment(12, 0));
        let clock2 = clock1.clone();

        // Cloned clocks share the same reading
        clock1.advance(Duration::minutes(5));
        assert_eq!(clock2.now(), moment(12, 5));
    }
}
