//! Contact form model and the outcome types of a submit attempt.

use crate::domain::{Field, FieldError};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// The visitor's contact request, edited field by field.
///
/// `phone` is optional; an empty (or whitespace-only) value means the
/// visitor left it out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Build a form from its four values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    /// Read one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Overwrite one field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    /// The phone number, if the visitor typed one.
    pub fn phone(&self) -> Option<&str> {
        if self.phone.trim().is_empty() {
            None
        } else {
            Some(&self.phone)
        }
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Field-level validation failures, keyed in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure, replacing any earlier one for the same field.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Drop the failure for one field, returning it if there was one.
    pub fn clear_field(&mut self, field: Field) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// The user-facing message for one field, if it failed.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|e| e.message(field))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }
}

// Serialized as `{ "field": "message" }`, the shape shown next to inputs
impl Serialize for ValidationErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.as_str(), error.message(*field))?;
        }
        map.end()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error.message(field)))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient user-facing message produced by a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    /// Shown when one or more fields failed validation.
    pub const VALIDATION_FAILED: &'static str = "Corrija os campos destacados.";

    /// Shown when the form-capture endpoint could not take the submission.
    pub const SUBMISSION_FAILED: &'static str = "Não foi possível enviar agora. Tente novamente.";

    /// Shown after a successful submission.
    pub const SUBMITTED: &'static str =
        "Mensagem enviada! Vou abrir o WhatsApp para você finalizar o contato.";

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// The messaging deep link handed to the link opener
    pub deep_link: String,

    /// The composed message text, before percent-encoding
    pub message_text: String,

    /// Whether the link opener reported success
    pub link_opened: bool,

    /// When the form-capture endpoint accepted the form (RFC 3339)
    pub submitted_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_set_and_get() {
        let mut form = ContactForm::default();
        form.set(Field::Email, "ana@x.com");
        assert_eq!(form.get(Field::Email), "ana@x.com");
        assert!(!form.is_empty());

        form.reset();
        assert!(form.is_empty());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_blank_phone_is_absent() {
        let mut form = ContactForm::new("Ana", "ana@x.com", "   ", "Quero um orçamento");
        assert_eq!(form.phone(), None);

        form.set(Field::Phone, "48999998888");
        assert_eq!(form.phone(), Some("48999998888"));
    }

    #[test]
    fn test_validation_errors_clear_field() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Name, FieldError::Required);
        errors.insert(Field::Email, FieldError::InvalidFormat);

        assert_eq!(errors.clear_field(Field::Name), Some(FieldError::Required));
        assert_eq!(errors.clear_field(Field::Phone), None);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::Email), Some("E-mail inválido."));
    }

    #[test]
    fn test_validation_errors_serialize_as_messages() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Message, FieldError::TooShort);
        errors.insert(Field::Name, FieldError::Required);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Informe seu nome.",
                "message": "Mensagem muito curta (mín. 10 caracteres)."
            })
        );
    }

    #[test]
    fn test_notice_serialization() {
        let json = serde_json::to_value(Notice::error(Notice::SUBMISSION_FAILED)).unwrap();
        assert_eq!(json["level"], "error");
    }
}
