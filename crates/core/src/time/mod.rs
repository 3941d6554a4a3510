//! Flexible time-of-day handling
//!
//! [`FlexTime`] is a wall-clock hour and minute parsed from loosely written
//! strings such as `"830"`, `"0830"`, `"8:30p"` or `"20:30"`. Strings that
//! could be either morning or evening resolve to the next upcoming
//! occurrence relative to a reference moment.
//!
//! # Grammar
//!
//! One or two hour digits, an optional `:`, two minute digits, optional
//! whitespace, then an optional `a`, `am`, `p` or `pm` marker in any case.
//! Surrounding whitespace is ignored.
//!
//! | Input | Reading |
//! |-------|---------|
//! | `"0800"`, `"000"`, `"1312"` | 24-hour, reference ignored |
//! | `"800 am"`, `"11:11p"`, `"1212a"` | 12-hour with marker, reference ignored |
//! | `"830"`, `"1215"` | soonest upcoming occurrence after the reference |
//!
//! To pull a time out of a longer message, embed
//! [`FLEX_TIME_SUBSTRING_PATTERN`] in a command pattern or use
//! [`FlexTime::find_in`].

mod error;
mod flex;
pub mod format;

pub use error::{FlexTimeError, FlexTimeResult};
pub use flex::{
    flex_time_substring_regex, FlexTime, TimeOfDay, TimeSpec, FLEX_TIME_SUBSTRING_PATTERN,
};
pub use format::DEFAULT_FORMAT;
