//! Domain value objects and types.
//!
//! Validated fields for contact names and phone numbers. Each field checks
//! its format rule at construction so invalid data cannot be represented.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::{ValidationError, ValidationResult};
pub use field::Field;
pub use name::Name;
pub use phone::{Phone, PHONE_DIGITS};
