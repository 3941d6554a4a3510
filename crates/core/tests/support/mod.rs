//! Shared test helpers for `flexkit-core` integration tests.
//!
//! Fixed reference moments keep nearest-future resolution deterministic, and
//! `init_tracing` routes the crate's debug output through the test harness
//! (filter with `RUST_LOG`).

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use flexkit_common::testing::MockClock;
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 2018-02-01 at the given wall-clock time
pub fn moment(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 2, 1)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .expect("valid date")
}

/// Clock pinned to 06:10
pub fn morning() -> MockClock {
    MockClock::at(moment(6, 10, 0))
}

/// Clock pinned to 18:10
pub fn evening() -> MockClock {
    MockClock::at(moment(18, 10, 0))
}
