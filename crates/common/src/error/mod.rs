//! Common error types and utilities for FlexKit
//!
//! This module provides the error vocabulary shared by every FlexKit crate.
//!
//! # Error Handling Architecture
//!
//! 1. **`CommonError`**: the small set of failure shapes that recur across
//!    modules: validation, parse failures and conflicts.
//!
//! 2. **`ErrorClassification` trait**: a standard interface for classifying
//!    errors by retryability, severity and criticality.
//!
//! 3. **`ErrorSeverity` enum**: a unified severity level used when callers
//!    decide whether to log, surface, or abort.
//!
//! ## Composition
//!
//! Module-specific errors **compose** with `CommonError` rather than
//! duplicating its variants, and classify themselves with
//! [`impl_error_classification!`]:
//!
//! ```rust,ignore
//! #[derive(Debug, Error)]
//! pub enum WidgetError {
//!     #[error("Widget not registered: {0}")]
//!     Unknown(String),
//!
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//! }
//!
//! impl_error_classification!(WidgetError, Common,
//!     Self::Unknown(_) => {
//!         retryable: false,
//!         severity: ErrorSeverity::Error,
//!         critical: false,
//!     },
//! );
//! ```
//!
//! ## ErrorSeverity Levels
//!
//! | Level | Use Case | Examples |
//! |-------|----------|----------|
//! | **Info** | Expected conditions | Nothing matched |
//! | **Warning** | Caller must choose | Ambiguous dispatch, name conflicts |
//! | **Error** | Invalid input | Malformed definitions, bad time strings |
//! | **Critical** | Invariant broken | Module-specific faults |

use std::fmt;
use std::time::Duration;

/// Standard result type using CommonError
pub type CommonResult<T> = Result<T, CommonError>;

/// Common error variants that appear across multiple modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// A field failed a validation rule
    Validation { field: String, message: String, value: Option<String> },

    /// Text could not be parsed into the requested shape
    Parse { input: String, expected: Option<String> },

    /// Two resources collide (duplicate names, ambiguous selections)
    Conflict { resource_type: String, identifiers: Vec<String> },
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { field, message, value } => {
                if let Some(value) = value {
                    write!(
                        f,
                        "Validation error for field '{}' (value: '{}'): {}",
                        field, value, message
                    )
                } else {
                    write!(f, "Validation error for field '{}': {}", field, message)
                }
            }
            Self::Parse { input, expected } => {
                if let Some(expected) = expected {
                    write!(f, "Could not parse '{}' as {}", input, expected)
                } else {
                    write!(f, "Could not parse '{}'", input)
                }
            }
            Self::Conflict { resource_type, identifiers } => {
                if identifiers.is_empty() {
                    write!(f, "{} conflict", resource_type)
                } else {
                    let quoted: Vec<String> =
                        identifiers.iter().map(|id| format!("'{}'", id)).collect();
                    write!(f, "{} conflict between {}", resource_type, quoted.join(" and "))
                }
            }
        }
    }
}

impl std::error::Error for CommonError {}

impl ErrorClassification for CommonError {
    /// Nothing in FlexKit is transient: the same input fails the same way.
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation { .. } => ErrorSeverity::Error,
            Self::Parse { .. } => ErrorSeverity::Error,
            Self::Conflict { .. } => ErrorSeverity::Warning,
        }
    }

    /// Shared failures describe bad input, never a broken invariant.
    fn is_critical(&self) -> bool {
        false
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

impl CommonError {
    /// Create a validation error
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation { field: field.into(), message: message.into(), value: None }
    }

    /// Create a validation error with the invalid value
    pub fn validation_with_value<F: Into<String>, M: Into<String>, V: Into<String>>(
        field: F,
        message: M,
        value: V,
    ) -> Self {
        Self::Validation { field: field.into(), message: message.into(), value: Some(value.into()) }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(input: S) -> Self {
        Self::Parse { input: input.into(), expected: None }
    }

    /// Create a parse error naming the expected shape
    pub fn parse_expected<S: Into<String>, E: Into<String>>(input: S, expected: E) -> Self {
        Self::Parse { input: input.into(), expected: Some(expected.into()) }
    }

    /// Create a conflict error between the given identifiers
    pub fn conflict<T, I, S>(resource_type: T, identifiers: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Conflict {
            resource_type: resource_type.into(),
            identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Error classification trait for consistent error handling across modules
pub trait ErrorClassification {
    /// Check if this error is retryable
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    ///
    /// Used for logging and surfacing decisions.
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool;

    /// Get the suggested retry delay if applicable
    fn retry_after(&self) -> Option<Duration>;
}

/// Error severity levels for logging and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, the caller has to make a decision
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Macro to implement ErrorClassification by delegating to CommonError
///
/// Module errors that embed `CommonError` list their own variants and let
/// the embedded variant classify itself.
///
/// ```rust,ignore
/// impl_error_classification!(MyError, Common,
///     Self::Specific(_) => {
///         retryable: false,
///         severity: ErrorSeverity::Error,
///         critical: false,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_error_classification {
    (
        $error_type:ty,
        $common_variant:ident
        $(,
            $variant:pat => {
                retryable: $retryable:expr,
                severity: $severity:expr,
                critical: $critical:expr
                $(, retry_after: $retry_after:expr)?
                $(,)?
            }
        )*
        $(,)?
    ) => {
        impl $crate::error::ErrorClassification for $error_type {
            fn is_retryable(&self) -> bool {
                match self {
                    Self::$common_variant(e) => e.is_retryable(),
                    $(
                        $variant => $retryable,
                    )*
                }
            }

            fn severity(&self) -> $crate::error::ErrorSeverity {
                match self {
                    Self::$common_variant(e) => e.severity(),
                    $(
                        $variant => $severity,
                    )*
                }
            }

            fn is_critical(&self) -> bool {
                match self {
                    Self::$common_variant(e) => e.is_critical(),
                    $(
                        $variant => $critical,
                    )*
                }
            }

            fn retry_after(&self) -> Option<std::time::Duration> {
                match self {
                    Self::$common_variant(e) => e.retry_after(),
                    $(
                        $(
                            $variant => $retry_after,
                        )?
                    )*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    //! Unit tests for error handling functionality

    use super::*;

    /// Validates `CommonError::validation` behavior for the simple validation
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms `err.to_string()` equals `"Validation error for field
    ///   'name': must not be empty"`.
    /// - Confirms `err.severity()` equals `ErrorSeverity::Error`.
    #[test]
    fn test_error_validation_simple() {
        let err = CommonError::validation("name", "must not be empty");
        assert_eq!(err.to_string(), "Validation error for field 'name': must not be empty");
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(!err.is_retryable());
        assert!(!err.is_critical());
    }

    /// Validates `CommonError::validation_with_value` display formatting.
    #[test]
    fn test_error_validation_with_value() {
        let err = CommonError::validation_with_value("hour", "must not exceed 23", "24");
        assert_eq!(
            err.to_string(),
            "Validation error for field 'hour' (value: '24'): must not exceed 23"
        );
    }

    #[test]
    fn test_error_parse() {
        assert_eq!(CommonError::parse("fred").to_string(), "Could not parse 'fred'");
        assert_eq!(
            CommonError::parse_expected("2515", "time of day").to_string(),
            "Could not parse '2515' as time of day"
        );
    }

    /// Validates conflict formatting and its warning severity.
    ///
    /// Assertions:
    /// - Confirms both identifiers are quoted in order.
    /// - Confirms `err.severity()` equals `ErrorSeverity::Warning`.
    #[test]
    fn test_error_conflict() {
        let err = CommonError::conflict("Command", ["Command 1", "Command 2"]);
        assert_eq!(err.to_string(), "Command conflict between 'Command 1' and 'Command 2'");
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let bare = CommonError::conflict("Command", Vec::<String>::new());
        assert_eq!(bare.to_string(), "Command conflict");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
        assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
    }
}
