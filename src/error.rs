//! Error types for the Contact Desk.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::models::ValidationErrors;
use thiserror::Error;

/// Errors that can occur when talking to the form-capture endpoint.
#[derive(Error, Debug)]
pub enum FormCaptureError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Endpoint answered with a non-success status code
    #[error("Form endpoint error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// A form body could not be decoded
    #[error("Invalid form payload: {0}")]
    InvalidPayload(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced by a contact submission attempt.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// One or more fields failed validation
    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    /// The form-capture endpoint could not be reached or refused the form
    #[error("Submission failed: {0}")]
    SubmissionFailed(#[from] FormCaptureError),

    /// Another submission from the same session has not finished yet
    #[error("A submission is already in progress")]
    SubmissionInFlight,
}

/// Errors raised while opening a messaging deep link.
#[derive(Error, Debug)]
pub enum LinkError {
    /// The platform URL handler could not be launched
    #[error("Failed to open link: {0}")]
    OpenFailed(String),
}

/// Errors that can occur when browsing the project catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No project has the requested slug
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Category name is not one of the known categories
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Invalid search query
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}

/// Convenience type alias for Results with FormCaptureError
pub type FormCaptureResult<T> = Result<T, FormCaptureError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Convenience type alias for Results with CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
