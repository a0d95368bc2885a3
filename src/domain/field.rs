//! The validated field capability shared by names and phone numbers.

use super::errors::ValidationResult;
use std::fmt;

/// A string value that passed a format rule at construction time.
///
/// Implementors store the raw value unchanged and stringify to it.
/// Any mutation they expose must go through [`Field::validate`] again.
pub trait Field: fmt::Display + AsRef<str> {
    /// Check `value` against this field's format rule.
    fn validate(value: &str) -> ValidationResult<()>
    where
        Self: Sized;

    /// The stored value.
    fn value(&self) -> &str;
}
