// Field Validators - Reusable validation components
use std::fmt::Display;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Inclusive range validator for ordered types
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: T,
    max: T,
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display,
{
    /// Create a new range validator with inclusive min and max values
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        if value < &self.min {
            return Err(format!("Value must be at least {}", self.min));
        }

        if value > &self.max {
            return Err(format!("Value must not exceed {}", self.max));
        }

        Ok(())
    }
}

/// String validator for required text fields
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    not_empty: bool,
}

impl StringValidator {
    /// Create a new string validator
    ///
    /// Values are checked as given, whitespace included.
    pub fn new() -> Self {
        Self { not_empty: false }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.not_empty && value.is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for validation::validators.
    use super::*;

    /// Validates `RangeValidator::new` behavior at both inclusive bounds.
    ///
    /// Assertions:
    /// - Ensures `0` and `23` pass.
    /// - Ensures `24` fails with the "must not exceed" message.
    #[test]
    fn test_range_validator_bounds() {
        let hours = RangeValidator::new(0u32, 23);
        assert!(hours.validate(&0).is_ok());
        assert!(hours.validate(&23).is_ok());
        assert_eq!(hours.validate(&24), Err("Value must not exceed 23".to_string()));
    }

    #[test]
    fn test_range_validator_lower_bound() {
        let minutes = RangeValidator::new(0i64, 59);
        assert!(minutes.validate(&0).is_ok());
        assert_eq!(minutes.validate(&-1), Err("Value must be at least 0".to_string()));
    }

    /// Validates `StringValidator` checks the value as given.
    ///
    /// Assertions:
    /// - Ensures whitespace passes `not_empty`.
    /// - Ensures the empty string fails `not_empty`.
    /// - Ensures an unconfigured validator accepts anything.
    #[test]
    fn test_string_validator_not_empty() {
        let strict = StringValidator::new().not_empty();
        assert!(strict.validate(" ").is_ok());
        assert!(strict.validate(&"Command 1".to_string()).is_ok());
        assert_eq!(strict.validate(""), Err("Value cannot be empty".to_string()));

        assert!(StringValidator::default().validate("").is_ok());
    }
}
