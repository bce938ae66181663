//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the form-capture client, the link opener and the project catalog. They
//! provide a clean boundary between the MCP handlers and the data access
//! layer.

mod catalog_service;
mod submission_service;

pub use catalog_service::{CatalogService, CatalogServiceImpl};
pub use submission_service::{SubmissionService, SubmissionServiceImpl};

// Re-export common types used by services
pub use crate::catalog::{ProjectCatalog, ProjectMatch};
pub use crate::models::{ContactForm, Project, SubmissionReceipt, ValidationErrors};
