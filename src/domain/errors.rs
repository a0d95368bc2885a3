//! Domain validation errors.

use thiserror::Error;

/// Errors raised when a value fails its format rule.
///
/// This is the only error kind the address book, records and fields produce.
/// Lookups and deletes treat a missing entry as an empty result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name contains a non-letter character or is empty.
    #[error("Invalid name. Use only letters")]
    InvalidName(String),

    /// The phone number is not exactly 10 decimal digits.
    #[error("Phone number must be 10 digits")]
    InvalidPhone(String),

    /// An edit targeted a phone number the record does not hold.
    #[error("Phone {0} not found")]
    PhoneNotFound(String),
}

impl ValidationError {
    /// The offending input value.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidName(v) | Self::InvalidPhone(v) | Self::PhoneNotFound(v) => v,
        }
    }
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
