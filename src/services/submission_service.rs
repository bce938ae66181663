//! Contact submission service.
//!
//! Validates a form, posts it to the form-capture endpoint and, only once
//! the endpoint has accepted it, hands the visitor a messaging deep link.

use crate::client::AsyncFormCaptureClient;
use crate::error::{SubmissionError, SubmissionResult};
use crate::messaging::{compose_message, DeepLinkTarget, LinkOpener};
use crate::metrics::Metrics;
use crate::models::{ContactForm, FormPayload, SubmissionReceipt, ValidationErrors};
use crate::validation;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Submission service trait for business operations.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Validate a form without submitting it.
    fn validate(&self, form: &ContactForm) -> ValidationErrors;

    /// Validate, post to the form-capture endpoint, then open the deep link.
    ///
    /// On any error the deep link is not opened.
    async fn submit(&self, form: &ContactForm) -> SubmissionResult<SubmissionReceipt>;
}

/// Default implementation of SubmissionService.
pub struct SubmissionServiceImpl {
    client: Arc<dyn AsyncFormCaptureClient>,
    opener: Arc<dyn LinkOpener>,
    form_name: String,
    target: DeepLinkTarget,
    metrics: Metrics,
}

impl SubmissionServiceImpl {
    /// Create a new submission service.
    pub fn new(
        client: Arc<dyn AsyncFormCaptureClient>,
        opener: Arc<dyn LinkOpener>,
        form_name: impl Into<String>,
        target: DeepLinkTarget,
        metrics: Metrics,
    ) -> Self {
        Self {
            client,
            opener,
            form_name: form_name.into(),
            target,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[async_trait]
impl SubmissionService for SubmissionServiceImpl {
    fn validate(&self, form: &ContactForm) -> ValidationErrors {
        validation::validate(form)
    }

    async fn submit(&self, form: &ContactForm) -> SubmissionResult<SubmissionReceipt> {
        let contact = match validation::validate_contact(form) {
            Ok(contact) => contact,
            Err(errors) => {
                tracing::debug!("Contact form rejected: {}", errors);
                self.metrics.record_validation_rejection();
                return Err(SubmissionError::ValidationFailed(errors));
            }
        };

        let payload = FormPayload::from_form(&self.form_name, form);
        if let Err(e) = self.client.submit(&payload).await {
            tracing::warn!("Form capture failed: {}", e);
            self.metrics.record_submission_failed();
            return Err(SubmissionError::SubmissionFailed(e));
        }
        self.metrics.record_submission_succeeded();
        let submitted_at = Utc::now().to_rfc3339();

        let message_text = compose_message(&contact);
        let deep_link = self.target.link_for(&message_text);
        // The form is already captured; a failed open only loses the handoff
        let link_opened = match self.opener.open(&deep_link) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Deep link not opened: {}", e);
                false
            }
        };

        tracing::info!(form = %self.form_name, link_opened, "Contact form submitted");

        Ok(SubmissionReceipt {
            deep_link,
            message_text,
            link_opened,
            submitted_at,
        })
    }
}
