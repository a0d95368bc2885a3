//! Contact Book - an in-memory contact directory with validated fields.
//!
//! Records hold a letters-only name and an ordered list of ten-digit phone
//! numbers. The address book maps names to records and keeps insertion order.
//!
//! # Architecture
//!
//! - **domain**: Validated `Name` and `Phone` fields and `ValidationError`
//! - **models**: The `Record` type and its phone operations
//! - **book**: The `AddressBook` collection
//! - **config**: Configuration for the demonstration driver
//! - **error**: Application-level error types

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError, ValidationResult};
pub use error::{ConfigError, ConfigResult};
pub use models::Record;
