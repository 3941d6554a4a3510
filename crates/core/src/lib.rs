//! # FlexKit Core
//!
//! Building blocks for chat-style command handling.
//!
//! This crate contains:
//! - [`command`]: a regex-driven command registry with all/first/one
//!   dispatch policies
//! - [`time`]: flexible time-of-day parsing with nearest-future
//!   disambiguation, arithmetic and token formatting
//!
//! ## Architecture Principles
//! - Only depends on `flexkit-common`
//! - No I/O: "now" comes from the wall clock behind
//!   [`flexkit_common::Clock`] or an explicit reference moment
//! - Handlers are plain closures, so callers pick their own return type
//!
//! ```
//! use chrono::NaiveDate;
//! use flexkit_core::command::{Command, CommandProcessor};
//! use flexkit_core::time::{FlexTime, FLEX_TIME_SUBSTRING_PATTERN};
//! use regex::Regex;
//!
//! let noon = NaiveDate::from_ymd_opt(2018, 2, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let pattern = Regex::new(&format!(r"^remind me at {FLEX_TIME_SUBSTRING_PATTERN}$")).unwrap();
//!
//! let mut processor = CommandProcessor::new();
//! processor
//!     .add_command(Command::new("remind", "Set a reminder", pattern, move |m| {
//!         FlexTime::parse(&m[1], noon).map(|t| t.format("HH:mm"))
//!     }))
//!     .unwrap();
//!
//! let outcome = processor.process_first("remind me at 830");
//! assert_eq!(outcome.into_value().unwrap().unwrap(), "20:30");
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod command;
pub mod time;

pub use command::{
    Command, CommandBuilder, CommandError, CommandProcessor, CommandResult, DispatchPolicy,
    MatchResult, ProcessOutcome,
};
pub use time::{FlexTime, FlexTimeError, FlexTimeResult, TimeOfDay, TimeSpec};
