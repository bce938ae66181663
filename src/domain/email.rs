//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("Failed to compile email regex"));

/// A type-safe wrapper for email addresses.
///
/// The check is deliberately loose: something, an `@`, something, a dot,
/// something, with no whitespace anywhere.
///
/// # Example
///
/// ```
/// use contact_desk::domain::EmailAddress;
///
/// let email = EmailAddress::new("ana@x.com").unwrap();
/// assert_eq!(email.as_str(), "ana@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Check an address against the `local@domain.tld` shape.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("invalid").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@domain").is_err());
        assert!(EmailAddress::new("user @example.com").is_err());
        assert!(EmailAddress::new("a@b.c").is_ok());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_display() {
        let email = EmailAddress::new("ana@x.com").unwrap();
        assert_eq!(format!("E-mail: {}", email), "E-mail: ana@x.com");
    }
}
