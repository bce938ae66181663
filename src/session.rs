//! A visitor's contact session.
//!
//! The session owns the form being edited, the errors shown next to its
//! fields, and the notices produced by submit attempts. Only one submission
//! may be in flight at a time; a second submit while one is pending is
//! rejected, not queued. The session lock is never held across the network
//! call, so the form can still be read while a submission is pending.

use crate::domain::Field;
use crate::error::{SubmissionError, SubmissionResult};
use crate::models::{ContactForm, Notice, SubmissionReceipt, ValidationErrors};
use crate::services::SubmissionService;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct SessionState {
    form: ContactForm,
    errors: ValidationErrors,
    notices: Vec<Notice>,
}

/// Point-in-time view of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub form: ContactForm,
    pub errors: ValidationErrors,
    pub submitting: bool,
}

/// Releases the in-flight flag when the submission finishes or is dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Contact form state for one visitor.
pub struct ContactSession {
    state: Mutex<SessionState>,
    in_flight: AtomicBool,
    service: Arc<dyn SubmissionService>,
}

impl ContactSession {
    pub fn new(service: Arc<dyn SubmissionService>) -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            in_flight: AtomicBool::new(false),
            service,
        }
    }

    /// Set one field and clear the error shown for it.
    pub async fn edit(&self, field: Field, value: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.form.set(field, value);
        state.errors.clear_field(field);
    }

    /// Recompute errors for the current form.
    pub async fn validate(&self) -> ValidationErrors {
        let mut state = self.state.lock().await;
        let errors = self.service.validate(&state.form);
        state.errors = errors.clone();
        errors
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;
        SessionSnapshot {
            form: state.form.clone(),
            errors: state.errors.clone(),
            submitting: self.is_submitting(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Drain the notices produced since the last call.
    pub async fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.state.lock().await.notices)
    }

    /// Submit the current form.
    ///
    /// - invalid form: errors are stored, one error notice is emitted
    /// - endpoint failure: form untouched, one error notice is emitted
    /// - success: form and errors reset, one success notice is emitted
    pub async fn submit(&self) -> SubmissionResult<SubmissionReceipt> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Submit ignored: another submission is pending");
            return Err(SubmissionError::SubmissionInFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let form = self.state.lock().await.form.clone();
        let outcome = self.service.submit(&form).await;

        let mut state = self.state.lock().await;
        match &outcome {
            Ok(_) => {
                state.form.reset();
                state.errors.clear();
                state.notices.push(Notice::success(Notice::SUBMITTED));
            }
            Err(SubmissionError::ValidationFailed(errors)) => {
                state.errors = errors.clone();
                state.notices.push(Notice::error(Notice::VALIDATION_FAILED));
            }
            Err(SubmissionError::SubmissionFailed(_)) => {
                state.notices.push(Notice::error(Notice::SUBMISSION_FAILED));
            }
            Err(SubmissionError::SubmissionInFlight) => {}
        }

        outcome
    }
}
