//! Messaging deep links.
//!
//! After a form is captured, the visitor is handed off to WhatsApp with a
//! pre-filled message addressed to the studio. This module composes that
//! message, builds the `wa.me` link, and defines how the link is opened.

mod opener;

pub use opener::{LinkOpener, LoggedLinkOpener, SystemLinkOpener};

use crate::config::Config;
use crate::validation::ValidContact;

/// Compose the pre-filled message for a validated contact.
///
/// The phone line is only present when the visitor typed a phone number.
/// A whitespace-only phone counts as not typed and gets no line, although
/// the form-capture payload still carries it as typed.
pub fn compose_message(contact: &ValidContact) -> String {
    let mut text = format!("Olá! Meu nome é {}.\n", contact.name);
    if let Some(phone) = &contact.phone {
        text.push_str(&format!("Telefone: {}\n", phone));
    }
    text.push_str(&format!("E-mail: {}\n\n", contact.email));
    text.push_str(&format!("Mensagem:\n{}", contact.message));
    text
}

/// Where deep links point: a messaging base URL and a fixed number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkTarget {
    base_url: String,
    number: String,
}

impl DeepLinkTarget {
    pub fn new(base_url: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            number: number.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.messaging_base_url, &config.whatsapp_number)
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Link that opens a chat with `text` already typed.
    pub fn link_for(&self, text: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            self.number,
            urlencoding::encode(text)
        )
    }
}

impl Default for DeepLinkTarget {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_MESSAGING_BASE_URL,
            crate::config::DEFAULT_WHATSAPP_NUMBER,
        )
    }
}
