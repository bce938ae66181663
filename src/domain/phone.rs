//! PhoneNumber value object.

use super::errors::ValidationError;
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// Formatting is kept as typed; only the digit count is checked, so
/// `(48) 99999-8888` and `48999998888` are both accepted.
///
/// # Example
///
/// ```
/// use contact_desk::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(48) 99999-8888").unwrap();
/// assert_eq!(phone.as_str(), "(48) 99999-8888");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Minimum number of digits (area code + subscriber number).
    pub const MIN_DIGITS: usize = 10;

    /// Create a new PhoneNumber, validating the digit count.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when fewer than
    /// [`Self::MIN_DIGITS`] digits are present.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if digit_count(&phone) < Self::MIN_DIGITS {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
