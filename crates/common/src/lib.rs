//! Modular common utilities shared across FlexKit crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation` (default): errors, validation, wall-clock abstraction
//! - `observability`: tracing for validation failures (not included by
//!   default)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;
#[cfg(feature = "foundation")]
pub mod validation;

// Testing utilities
// ---------------------------------------------------------------
// `SystemClock` is also the production source of "now".
#[cfg(feature = "foundation")]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
#[cfg(feature = "foundation")]
pub use testing::time::{Clock, MockClock, SystemClock};
#[cfg(feature = "foundation")]
pub use validation::{validate_field, FieldValidator, RangeValidator, StringValidator};
