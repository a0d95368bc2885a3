//! Record model: one contact's name and phone numbers.

use crate::domain::{Name, Phone, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// contain duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if `name` is not letters only.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `number` and append it. Duplicates are allowed.
    pub fn add_phone(&mut self, number: impl Into<String>) -> ValidationResult<()> {
        let phone = Phone::new(number)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`.
    ///
    /// `new_phone` is validated before anything else, so a failed call never
    /// changes the record. Later duplicates of `old_phone` are left alone.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidPhone` if `new_phone` is malformed
    /// - `ValidationError::PhoneNotFound` if no phone equals `old_phone`
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> ValidationResult<()> {
        let replacement = Phone::new(new_phone)?;

        let phone = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old_phone)
            .ok_or_else(|| ValidationError::PhoneNotFound(old_phone.to_string()))?;

        *phone = replacement;
        tracing::debug!(
            name = %self.name,
            old_phone = %old_phone,
            new_phone = %new_phone,
            "Edited phone"
        );
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        let found = self.phones.iter().find(|p| p.as_str() == phone);
        tracing::trace!(name = %self.name, phone = %phone, found = found.is_some(), "Phone lookup");
        found
    }

    /// Remove every phone equal to `phone`. Absent numbers are a no-op.
    pub fn delete_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();
        if removed > 0 {
            tracing::debug!(name = %self.name, phone = %phone, removed, "Deleted phone");
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
