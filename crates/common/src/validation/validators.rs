// Field Validators - Reusable validation components
use std::fmt::Display;

/// Type alias for a custom validation function (clippy::type_complexity)
type CustomValidationFn<T> = Box<dyn Fn(&T) -> Result<(), String> + Send + Sync>;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value, returning a human-readable message on failure
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Range validator for ordered types
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> Default for RangeValidator<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display,
{
    /// Inclusive `[min, max]`
    pub fn new(min: T, max: T) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        if let Some(ref min) = self.min {
            if value < min {
                return Err(format!("Value must be at least {}", min));
            }
        }

        if let Some(ref max) = self.max {
            if value > max {
                return Err(format!("Value must not exceed {}", max));
            }
        }

        Ok(())
    }
}

/// String validator with length constraints.
///
/// Lengths are counted in `char`s, not bytes, so accented text is measured
/// the way users see it.
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    not_empty: bool,
    trim: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator (trims by default)
    pub fn new() -> Self {
        Self { min_length: None, max_length: None, not_empty: false, trim: true }
    }

    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value };

        if self.not_empty && val.is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        let length = val.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("Length must be at least {} characters", min));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("Length must not exceed {} characters", max));
            }
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

/// Validator backed by a closure
pub struct CustomValidator<T> {
    check: CustomValidationFn<T>,
}

impl<T> CustomValidator<T> {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&T) -> Result<(), String> + Send + Sync + 'static,
    {
        Self { check: Box::new(check) }
    }
}

impl<T> std::fmt::Debug for CustomValidator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomValidator").field("check", &"<fn>").finish()
    }
}

impl<T> FieldValidator<T> for CustomValidator<T> {
    fn validate(&self, value: &T) -> Result<(), String> {
        (self.check)(value)
    }
}
