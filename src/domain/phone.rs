//! Phone value object.

use super::errors::{ValidationError, ValidationResult};
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[0-9]{{{}}}$", PHONE_DIGITS)).expect("Failed to compile phone regex")
});

/// A phone number of exactly ten decimal digits.
///
/// No separators, country codes or other formatting are accepted.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(Phone::new("123-456-7890").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value is exactly
    /// ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> ValidationResult<Self> {
        let phone = phone.into();
        Self::validate(&phone)?;
        Ok(Self(phone))
    }

    /// Replace the stored number, validating it first.
    ///
    /// The current value is kept if `phone` is invalid.
    pub fn set(&mut self, phone: impl Into<String>) -> ValidationResult<()> {
        let phone = phone.into();
        Self::validate(&phone)?;
        self.0 = phone;
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Phone {
    fn validate(value: &str) -> ValidationResult<()> {
        if !PHONE_REGEX.is_match(value) {
            return Err(ValidationError::InvalidPhone(value.to_string()));
        }
        Ok(())
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Phone {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert_eq!(phone.value().len(), PHONE_DIGITS);
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("123456789a").is_err());
        assert!(Phone::new("123-456-78").is_err());
        assert!(Phone::new("+123456789").is_err());
        assert!(Phone::new(" 123456789").is_err());
        assert!(Phone::new("1234567890\n").is_err());
        assert!(Phone::new("0000000000").is_ok());
    }

    #[test]
    fn test_phone_length_follows_digit_count() {
        assert!(Phone::new("7".repeat(PHONE_DIGITS)).is_ok());
        assert!(Phone::new("7".repeat(PHONE_DIGITS - 1)).is_err());
        assert!(Phone::new("7".repeat(PHONE_DIGITS + 1)).is_err());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits
        assert!(Phone::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_phone_error_carries_value() {
        let err = Phone::new("555").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("555".to_string()));
    }

    #[test]
    fn test_phone_set_validates() {
        let mut phone = Phone::new("1234567890").unwrap();
        phone.set("1112223333").unwrap();
        assert_eq!(phone.as_str(), "1112223333");

        assert!(phone.set("bad").is_err());
        assert_eq!(phone.as_str(), "1112223333");
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("5555555555").unwrap();
        assert_eq!(format!("{}", phone), "5555555555");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("5555555555").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"5555555555\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"555-1234\"");
        assert!(result.is_err());
    }
}
