use async_trait::async_trait;
use contact_desk::client::AsyncFormCaptureClient;
use contact_desk::error::{FormCaptureError, FormCaptureResult};
use contact_desk::models::{decode_form, FormPayload};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock form-capture endpoint for testing.
///
/// Records every decoded body it receives and can be told to fail or to
/// hold each request until released.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockFormCaptureClient {
    received: Arc<Mutex<Vec<Vec<(String, String)>>>>,
    fail_with_status: Arc<Mutex<Option<u16>>>,
    hold: Arc<Mutex<bool>>,
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

#[allow(dead_code)]
impl MockFormCaptureClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every following request with this status.
    pub fn fail_with(&self, status: u16) {
        *self.fail_with_status.lock().unwrap() = Some(status);
    }

    pub fn succeed(&self) {
        *self.fail_with_status.lock().unwrap() = None;
    }

    /// Park each request until `release` is called.
    pub fn hold_requests(&self) {
        *self.hold.lock().unwrap() = true;
    }

    /// Wait until a request has arrived.
    pub async fn wait_for_request(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn received(&self) -> Vec<Vec<(String, String)>> {
        self.received.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[async_trait]
impl AsyncFormCaptureClient for MockFormCaptureClient {
    async fn submit(&self, payload: &FormPayload) -> FormCaptureResult<()> {
        let pairs = decode_form(&payload.encode())?;
        self.received.lock().unwrap().push(pairs);

        let hold = *self.hold.lock().unwrap();
        if hold {
            self.entered.notify_one();
            self.release.notified().await;
        }

        let status = *self.fail_with_status.lock().unwrap();
        match status {
            Some(status) => Err(FormCaptureError::ApiError {
                status,
                message: "mock failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}
