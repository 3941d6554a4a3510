// Validation Module - field validators that report through CommonError
use std::fmt::Display;

mod validators;

pub use validators::{FieldValidator, RangeValidator, StringValidator};

use crate::error::{CommonError, CommonResult};

/// Run `validator` against `value`, reporting failures as
/// [`CommonError::Validation`] for `field`.
///
/// # Examples
///
/// ```
/// use flexkit_common::validation::{validate_field, RangeValidator};
///
/// assert!(validate_field("minute", &59u32, &RangeValidator::new(0, 59)).is_ok());
/// assert!(validate_field("minute", &60u32, &RangeValidator::new(0, 59)).is_err());
/// ```
pub fn validate_field<T, V>(field: &str, value: &T, validator: &V) -> CommonResult<()>
where
    T: Display + ?Sized,
    V: FieldValidator<T> + ?Sized,
{
    validator.validate(value).map_err(|message| {
        #[cfg(feature = "observability")]
        tracing::debug!(field, %value, %message, "field validation failed");
        CommonError::validation_with_value(field, message, value.to_string())
    })
}

/// Require an optional value to be present, reporting `field` when it is not.
pub fn require_present<T>(field: &str, value: Option<T>) -> CommonResult<T> {
    value.ok_or_else(|| CommonError::validation(field, "is required"))
}

#[cfg(test)]
mod tests {
    //! Unit tests for validation helpers.
    use super::*;

    /// Validates `validate_field` behavior for the failing range scenario.
    ///
    /// Assertions:
    /// - Confirms the error is a `CommonError::Validation` carrying the field
    ///   and the rendered value.
    #[test]
    fn test_validate_field_reports_field_and_value() {
        let err = validate_field("hour", &24u32, &RangeValidator::new(0, 23)).unwrap_err();
        assert_eq!(
            err,
            CommonError::Validation {
                field: "hour".to_string(),
                message: "Value must not exceed 23".to_string(),
                value: Some("24".to_string()),
            }
        );
    }

    #[test]
    fn test_validate_field_on_str() {
        let validator = StringValidator::new().not_empty();
        assert!(validate_field("name", "Command 1", &validator).is_ok());
        assert!(validate_field("name", "", &validator).is_err());
    }

    #[test]
    fn test_require_present() {
        assert_eq!(require_present("pattern", Some(3)).unwrap(), 3);
        let err = require_present::<u8>("pattern", None).unwrap_err();
        assert_eq!(err.to_string(), "Validation error for field 'pattern': is required");
    }
}
