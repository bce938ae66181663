//! HTTP client for the hosted form-capture endpoint.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client posts URL-encoded forms to the site's
//! root path and maps transport and status failures to [`FormCaptureError`].

mod async_wrapper;
pub use async_wrapper::{AsyncFormCaptureClient, AsyncFormCaptureClientImpl};

use crate::config::Config;
use crate::error::{FormCaptureError, FormCaptureResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::FormPayload;
use std::sync::Arc;
use std::time::Duration;

/// Content type of every form post.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client for the form-capture endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct FormCaptureClient {
    /// Site URL; forms are posted to its root path
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl FormCaptureClient {
    /// Create a new FormCaptureClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.form_endpoint_url.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a FormCaptureClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with a URL-encoded body.
    fn post_form(&self, path: &str, body: &str) -> Result<ureq::Response, FormCaptureError> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("POST {} ({} bytes)", url, body.len());

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", FORM_CONTENT_TYPE)
            .send_string(body)
            .map_err(|e| self.map_error(e))
            .and_then(|response| {
                if (200..300).contains(&response.status()) {
                    Ok(response)
                } else {
                    Err(FormCaptureError::ApiError {
                        status: response.status(),
                        message: response.status_text().to_string(),
                    })
                }
            });

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a FormCaptureError.
    fn map_error(&self, error: ureq::Error) -> FormCaptureError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                FormCaptureError::ApiError {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    FormCaptureError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io && is_timeout(&transport) {
                    FormCaptureError::Timeout
                } else {
                    FormCaptureError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Post a contact form payload to the site root.
    ///
    /// The response body is not read; only the status matters.
    pub fn submit(&self, payload: &FormPayload) -> FormCaptureResult<()> {
        self.post_form("/", &payload.encode())?;
        Ok(())
    }
}

/// True when the I/O error behind a transport failure is a read/write timeout.
fn is_timeout(transport: &ureq::Transport) -> bool {
    std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<std::io::Error>())
        .map(|e| matches!(e.kind(), std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_root() {
        let client = FormCaptureClient::with_base_url("https://studio.example.com/".to_string());
        assert_eq!(client.build_url("/"), "https://studio.example.com/");
        assert_eq!(client.build_url("forms"), "https://studio.example.com/forms");
    }

    #[test]
    fn test_new_uses_config_url() {
        let config = Config {
            form_endpoint_url: "https://studio.example.com".to_string(),
            ..Config::default()
        };
        let client = FormCaptureClient::new(&config);
        assert_eq!(client.build_url("/"), "https://studio.example.com/");
        assert_eq!(client.metrics().http_requests_total(), 0);
    }

    #[test]
    fn test_io_timeout_maps_to_timeout() {
        let client = FormCaptureClient::with_base_url("https://studio.example.com".to_string());
        let error = ureq::Error::from(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "timed out reading response",
        ));
        assert!(matches!(client.map_error(error), FormCaptureError::Timeout));
    }

    #[test]
    fn test_connection_reset_is_not_a_timeout() {
        let client = FormCaptureClient::with_base_url("https://studio.example.com".to_string());
        let error = ureq::Error::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        ));
        match client.map_error(error) {
            FormCaptureError::HttpError(message) => assert!(message.contains("connection reset")),
            other => panic!("expected HttpError, got {:?}", other),
        }
    }
}
