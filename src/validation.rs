//! Contact form validation.
//!
//! [`validate`] is a pure function of the form: it never touches the
//! network or session state, so it can be called before submitting, on
//! every keystroke, or from tests. [`validate_contact`] runs the same checks
//! and, when they pass, hands back the form with its email and phone parsed
//! into value objects.

use crate::domain::{EmailAddress, Field, FieldError, PhoneNumber};
use crate::models::{ContactForm, ValidationErrors};

/// Minimum trimmed message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// A contact form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    /// Trimmed address
    pub email: EmailAddress,
    /// Present only when the visitor typed a phone; kept as typed
    pub phone: Option<PhoneNumber>,
    pub message: String,
}

/// Check every field and collect the failures.
///
/// An empty result means the form can be submitted.
pub fn validate(form: &ContactForm) -> ValidationErrors {
    validate_contact(form).err().unwrap_or_default()
}

/// Check every field, returning either the parsed contact or every failure.
pub fn validate_contact(form: &ContactForm) -> Result<ValidContact, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::Required);
    }

    let email = match form.email.trim() {
        "" => {
            errors.insert(Field::Email, FieldError::Required);
            None
        }
        trimmed => match EmailAddress::new(trimmed) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.insert(Field::Email, FieldError::InvalidFormat);
                None
            }
        },
    };

    // Phone is optional, but must be complete when given
    let phone = match form.phone().map(PhoneNumber::new) {
        None => None,
        Some(Ok(phone)) => Some(phone),
        Some(Err(_)) => {
            errors.insert(Field::Phone, FieldError::TooShort);
            None
        }
    };

    let message = form.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, FieldError::Required);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(Field::Message, FieldError::TooShort);
    }

    match email {
        Some(email) if errors.is_empty() => Ok(ValidContact {
            name: form.name.clone(),
            email,
            phone,
            message: form.message.clone(),
        }),
        _ => Err(errors),
    }
}
