//! The studio's public contact channels.

use serde::Serialize;

/// One way to reach the studio.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    /// Opens outside the site (new browsing context, no opener)
    pub external: bool,
}

/// Static profile shown next to the contact form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StudioProfile {
    pub channels: Vec<ContactChannel>,
    pub social: Vec<ContactChannel>,
    pub business_hours: Vec<&'static str>,
}

impl StudioProfile {
    pub fn builtin() -> Self {
        Self {
            channels: vec![
                ContactChannel {
                    label: "Telefone",
                    value: "(48) 98465-0120",
                    href: "https://wa.me/5548984650120",
                    external: true,
                },
                ContactChannel {
                    label: "Email",
                    value: "priprojetista@gmail.com",
                    href: "mailto:priprojetista@gmail.com",
                    external: false,
                },
                ContactChannel {
                    label: "Localização",
                    value: "Balneário Piçarras, SC",
                    href: "https://www.google.com/maps/search/?api=1&query=Balne%C3%A1rio%20Pi%C3%A7arras%2C%20SC",
                    external: true,
                },
            ],
            social: vec![ContactChannel {
                label: "Instagram",
                value: "@pri_projetista",
                href: "https://www.instagram.com/pri_projetista/",
                external: true,
            }],
            business_hours: vec![
                "Segunda a Sexta: 09:00 - 18:00",
                "Sábado: 10:00 - 14:00",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_phone_matches_deep_link_target() {
        let profile = StudioProfile::builtin();
        let phone = profile
            .channels
            .iter()
            .find(|c| c.label == "Telefone")
            .unwrap();
        assert!(phone.href.ends_with(crate::config::DEFAULT_WHATSAPP_NUMBER));
    }
}
