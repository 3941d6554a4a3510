use flexkit_common::error::{CommonError, ErrorClassification, ErrorSeverity};
use flexkit_common::impl_error_classification;
use thiserror::Error;

/// Errors raised while registering or dispatching commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A command definition is missing a field or has an unusable one
    #[error("Invalid command definition: field '{field}' {message}")]
    Validation { field: String, message: String },

    /// A command with the same name is already registered
    #[error("Duplicate command name \"{name}\".")]
    DuplicateCommand { name: String },

    /// More than one command matched under the exactly-one policy
    #[error("Ambiguous command \"{message}\" could be \"{first}\" or \"{second}\".")]
    AmbiguousCommand { message: String, first: String, second: String },

    /// A shared failure without a dedicated variant
    #[error(transparent)]
    Common(CommonError),
}

/// Result alias for command operations
pub type CommandResult<T> = Result<T, CommandError>;

impl CommandError {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }
}

// Field-level failures from the shared validators surface as command
// validation errors; everything else stays wrapped.
impl From<CommonError> for CommandError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::Validation { field, message, .. } => Self::Validation { field, message },
            other => Self::Common(other),
        }
    }
}

impl From<CommandError> for CommonError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validation { field, message } => CommonError::validation(field, message),
            CommandError::DuplicateCommand { name } => {
                CommonError::validation_with_value("name", "duplicates a registered command", name)
            }
            CommandError::AmbiguousCommand { first, second, .. } => {
                CommonError::conflict("Command", [first, second])
            }
            CommandError::Common(e) => e,
        }
    }
}

impl_error_classification!(CommandError, Common,
    Self::Validation { .. } => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::DuplicateCommand { .. } => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::AmbiguousCommand { .. } => {
        retryable: false,
        severity: ErrorSeverity::Warning,
        critical: false,
    },
);

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates the ambiguity message names both commands in scan order.
    #[test]
    fn test_ambiguous_message() {
        let err = CommandError::AmbiguousCommand {
            message: "This is a test.".to_string(),
            first: "Command 1".to_string(),
            second: "Command 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Ambiguous command \"This is a test.\" could be \"Command 1\" or \"Command 2\"."
        );
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_duplicate_message() {
        let err = CommandError::DuplicateCommand { name: "Command 1".to_string() };
        assert_eq!(err.to_string(), "Duplicate command name \"Command 1\".");
    }

    /// Validates the round trip through `CommonError`.
    ///
    /// Assertions:
    /// - Confirms shared validation failures become `CommandError::Validation`.
    /// - Confirms other common errors stay wrapped.
    #[test]
    fn test_common_conversions() {
        let err: CommandError = CommonError::validation("name", "is required").into();
        assert_eq!(err, CommandError::validation("name", "is required"));

        let err: CommandError = CommonError::parse("boom").into();
        assert!(matches!(err, CommandError::Common(CommonError::Parse { .. })));
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(!err.is_critical());

        let common: CommonError = CommandError::AmbiguousCommand {
            message: "x".to_string(),
            first: "a".to_string(),
            second: "b".to_string(),
        }
        .into();
        assert_eq!(common, CommonError::conflict("Command", ["a", "b"]));
    }
}
