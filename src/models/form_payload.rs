//! URL-encoded payload for the form-capture endpoint.

use super::contact_form::ContactForm;
use crate::error::{FormCaptureError, FormCaptureResult};

/// Ordered key/value pairs posted to the form-capture endpoint.
///
/// The first pair is always `form-name`, which the capture service uses to
/// file the submission under the right form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pairs: Vec<(String, String)>,
}

impl FormPayload {
    /// Key of the form identifier field.
    pub const FORM_NAME_KEY: &'static str = "form-name";

    /// Build the payload for a contact form.
    pub fn from_form(form_name: &str, form: &ContactForm) -> Self {
        let pairs = vec![
            (Self::FORM_NAME_KEY.to_string(), form_name.to_string()),
            ("name".to_string(), form.name.clone()),
            ("email".to_string(), form.email.clone()),
            ("phone".to_string(), form.phone.clone()),
            ("message".to_string(), form.message.clone()),
        ];
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Value of the first pair with this key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        encode_form(&self.pairs)
    }
}

/// Percent-encode key/value pairs and join them with `&`.
pub fn encode_form<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                urlencoding::encode(k.as_ref()),
                urlencoding::encode(v.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode an `application/x-www-form-urlencoded` body.
///
/// `+` decodes to a space, as browsers send it.
pub fn decode_form(body: &str) -> FormCaptureResult<Vec<(String, String)>> {
    body.split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            Ok((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(component: &str) -> FormCaptureResult<String> {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| FormCaptureError::InvalidPayload(e.to_string()))
}
