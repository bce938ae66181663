//! Data models for the studio's contact desk.
//!
//! This module contains the contact form and its validation result, the
//! URL-encoded payload sent to the form-capture endpoint, the project
//! portfolio entries, and the studio's public contact channels.

pub mod contact_form;
pub mod form_payload;
pub mod project;
pub mod studio;

pub use contact_form::{ContactForm, Notice, NoticeLevel, SubmissionReceipt, ValidationErrors};
pub use form_payload::{decode_form, encode_form, FormPayload};
pub use project::{CategoryFilter, Project, ProjectCategory};
pub use studio::{ContactChannel, StudioProfile};
