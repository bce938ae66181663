//! Async wrapper around synchronous FormCaptureClient.
//!
//! This module provides an async interface to the synchronous FormCaptureClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::FormCaptureClient;
use crate::error::{FormCaptureError, FormCaptureResult};
use crate::models::FormPayload;
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for form-capture operations.
///
/// Submission services depend on this trait, so tests can swap in an
/// in-memory endpoint.
#[async_trait]
pub trait AsyncFormCaptureClient: Send + Sync {
    async fn submit(&self, payload: &FormPayload) -> FormCaptureResult<()>;
}

/// Async wrapper around synchronous FormCaptureClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncFormCaptureClientImpl {
    client: Arc<FormCaptureClient>,
}

impl AsyncFormCaptureClientImpl {
    pub fn new(client: FormCaptureClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncFormCaptureClient for AsyncFormCaptureClientImpl {
    async fn submit(&self, payload: &FormPayload) -> FormCaptureResult<()> {
        let client = self.client.clone();
        let payload = payload.clone();

        tokio::task::spawn_blocking(move || client.submit(&payload))
            .await
            .map_err(|e| FormCaptureError::HttpError(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactForm;

    #[tokio::test]
    async fn test_async_client_creation() {
        let client = FormCaptureClient::with_base_url("https://studio.example.com".to_string());
        let async_client = AsyncFormCaptureClientImpl::new(client);

        // Should be able to clone
        let _cloned = async_client.clone();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        // Port 9 (discard) on localhost is not listening in test environments
        let client = FormCaptureClient::with_base_url("http://127.0.0.1:9".to_string());
        let async_client = AsyncFormCaptureClientImpl::new(client);
        let payload = FormPayload::from_form("contato", &ContactForm::default());

        let result = async_client.submit(&payload).await;
        assert!(matches!(
            result,
            Err(FormCaptureError::HttpError(_)) | Err(FormCaptureError::Timeout)
        ));
    }
}
