//! Testing utilities and helpers
//!
//! - **[`time`]**: wall-clock abstraction. [`SystemClock`] is the production
//!   source of "now"; [`MockClock`] pins it for deterministic tests.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use flexkit_common::testing::{Clock, MockClock};
//!
//! let start = NaiveDate::from_ymd_opt(2018, 2, 1).unwrap().and_hms_opt(7, 0, 0).unwrap();
//! let clock = MockClock::at(start);
//! clock.advance(Duration::minutes(90));
//! assert_eq!(clock.now(), start + Duration::minutes(90));
//! ```

pub mod time;

pub use time::{Clock, MockClock, SystemClock};
