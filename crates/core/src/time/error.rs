use flexkit_common::error::{CommonError, ErrorClassification, ErrorSeverity};
use flexkit_common::impl_error_classification;
use thiserror::Error;

/// Errors raised while constructing a [`FlexTime`](super::FlexTime)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlexTimeError {
    /// The text does not follow the flexible time grammar
    #[error("Invalid time string \"{0}\".")]
    InvalidTimeString(String),

    /// A structured initializer is out of range or unrepresentable
    #[error("Illegal flex time initializer {0}")]
    InvalidInitializer(String),

    /// A shared failure without a dedicated variant
    #[error(transparent)]
    Common(CommonError),
}

/// Result alias for flexible time operations
pub type FlexTimeResult<T> = Result<T, FlexTimeError>;

impl From<CommonError> for FlexTimeError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::Parse { input, .. } => Self::InvalidTimeString(input),
            CommonError::Validation { field, message, value } => {
                let detail = match value {
                    Some(value) => format!("{field}={value} ({message})"),
                    None => format!("{field} ({message})"),
                };
                Self::InvalidInitializer(detail)
            }
            other => Self::Common(other),
        }
    }
}

impl From<FlexTimeError> for CommonError {
    fn from(err: FlexTimeError) -> Self {
        match err {
            FlexTimeError::InvalidTimeString(input) => {
                CommonError::parse_expected(input, "flexible time")
            }
            FlexTimeError::InvalidInitializer(detail) => {
                CommonError::validation_with_value("init", "illegal flex time initializer", detail)
            }
            FlexTimeError::Common(e) => e,
        }
    }
}

impl_error_classification!(FlexTimeError, Common,
    Self::InvalidTimeString(_) => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::InvalidInitializer(_) => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    },
);
