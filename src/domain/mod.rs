//! Domain value objects and types.
//!
//! This module contains the contact form's field names, the per-field
//! failure kinds, and type-safe wrappers for email addresses and phone
//! numbers. The wrappers validate at construction time so invalid values
//! never reach the submission path.

pub mod email;
pub mod errors;
pub mod field;
pub mod phone;

pub use email::EmailAddress;
pub use errors::{FieldError, ValidationError};
pub use field::Field;
pub use phone::PhoneNumber;
