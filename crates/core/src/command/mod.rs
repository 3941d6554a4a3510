//! Pattern-based command dispatch
//!
//! A [`CommandProcessor`] holds an ordered list of named [`Command`]s, each a
//! compiled regular expression plus a handler. Messages are matched against
//! every pattern in registration order and dispatched under one of three
//! policies:
//!
//! | Operation | Handlers run | No match | Several matches |
//! |-----------|--------------|----------|-----------------|
//! | [`CommandProcessor::process_all`] | every match | empty `Vec` | all of them |
//! | [`CommandProcessor::process_first`] | first match | `matched: false` | first only |
//! | [`CommandProcessor::process_one`] | the single match | `matched: false` | [`CommandError::AmbiguousCommand`] |
//!
//! Handlers receive a [`MatchResult`]: the full match at index 0 followed by
//! the capture groups.

mod error;
mod processor;
mod types;

pub use error::{CommandError, CommandResult};
pub use processor::{CommandProcessor, DispatchPolicy, ProcessOutcome};
pub use types::{Command, CommandBuilder, Handler, MatchResult, PatternSource};
