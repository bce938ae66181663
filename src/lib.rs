//! Contact Desk - contact submission flow and project portfolio for a
//! furniture design studio, served over the Model Context Protocol.
//!
//! A visitor's contact request is validated, posted to the site's hosted
//! form-capture endpoint, and then handed off to WhatsApp with the message
//! already typed.
//!
//! # Architecture
//!
//! - **domain**: Field names, field failures, email and phone value objects
//! - **models**: Contact form, form payload, projects, studio profile
//! - **validation**: Pure contact form validation
//! - **client**: HTTP client for the form-capture endpoint
//! - **messaging**: Message composition, deep links, link openers
//! - **catalog**: Project portfolio and fuzzy search
//! - **services**: Submission and catalog business logic
//! - **session**: One visitor's form state and in-flight guard
//! - **server**: MCP protocol server
//! - **config**, **error**, **metrics**: Ambient plumbing

pub mod catalog;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod messaging;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;
pub mod session;
pub mod validation;

pub use catalog::ProjectCatalog;
pub use client::FormCaptureClient;
pub use config::Config;
pub use error::{CatalogError, ConfigError, FormCaptureError, LinkError, SubmissionError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{
    ContactForm, FormPayload, Notice, NoticeLevel, Project, ProjectCategory, SubmissionReceipt,
    ValidationErrors,
};
pub use server::ContactDeskServer;
pub use session::{ContactSession, SessionSnapshot};
pub use validation::validate;
