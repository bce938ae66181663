//! Domain validation errors.

use super::field::Field;
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided name is not a contact form field.
    UnknownField(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::UnknownField(name) => write!(f, "Unknown form field: {}", name),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why a single contact form field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// The field is empty or whitespace-only.
    Required,

    /// The field does not have the expected shape.
    InvalidFormat,

    /// The field is shorter than its minimum.
    TooShort,
}

impl FieldError {
    /// The user-facing message shown next to `field`.
    pub fn message(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, _) => "Informe seu nome.",
            (Field::Email, Self::Required) => "Informe seu e-mail.",
            (Field::Email, _) => "E-mail inválido.",
            (Field::Phone, _) => "Telefone/WhatsApp inválido (mín. 10 dígitos).",
            (Field::Message, Self::TooShort) => "Mensagem muito curta (mín. 10 caracteres).",
            (Field::Message, _) => "Escreva sua mensagem.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::Required.message(Field::Name), "Informe seu nome.");
        assert_eq!(FieldError::Required.message(Field::Email), "Informe seu e-mail.");
        assert_eq!(FieldError::InvalidFormat.message(Field::Email), "E-mail inválido.");
        assert_eq!(
            FieldError::TooShort.message(Field::Message),
            "Mensagem muito curta (mín. 10 caracteres)."
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::UnknownField("address".to_string());
        assert_eq!(err.to_string(), "Unknown form field: address");
    }
}
