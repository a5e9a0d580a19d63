//! HTTP client for posting onboarding submissions.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client sends exactly one request per call and
//! maps the outcome to success, a server error carrying the status code, or a network
//! error carrying the transport failure.

mod async_wrapper;
pub use async_wrapper::{AsyncOnboardClient, AsyncOnboardClientImpl};

use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::ValidatedSubmission;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the onboarding endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`. It never retries.
#[derive(Clone)]
pub struct OnboardClient {
    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl OnboardClient {
    /// Create a new OnboardClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(Duration::from_secs(config.request_timeout))
    }

    /// Create an OnboardClient with an explicit request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Share a metrics collector with the caller.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// POST a submission as JSON to `url`.
    ///
    /// Any 2xx status is a success; the response body is not read.
    ///
    /// # Errors
    ///
    /// - `SubmitError::Server` for any other status code
    /// - `SubmitError::Network` when no response was obtained
    /// - `SubmitError::Json` if the submission cannot be serialized
    pub fn post_submission(&self, url: &str, submission: &ValidatedSubmission) -> SubmitResult<()> {
        let body = submission.to_json()?;

        tracing::debug!(
            "POST {} ({} fields, {} services)",
            url,
            body.as_object().map_or(0, |fields| fields.len()),
            submission.services().services().len()
        );

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_json(&body)
            .map_err(Self::map_error)
            .and_then(Self::check_status);

        match &result {
            Ok(()) => {
                tracing::debug!("POST {} - Success", url);
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Reject responses outside the 2xx range that `ureq` did not treat as errors.
    fn check_status(response: ureq::Response) -> SubmitResult<()> {
        let status = response.status();
        if (200..300).contains(&status) {
            return Ok(());
        }

        Err(SubmitError::Server {
            status,
            message: response.into_string().unwrap_or_default(),
        })
    }

    /// Map a ureq error to a SubmitError.
    fn map_error(error: ureq::Error) -> SubmitError {
        match error {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                SubmitError::Server { status, message }
            }
            ureq::Error::Transport(transport) => SubmitError::Network(transport.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = Config {
            onboard_url: Some("https://hooks.example.com/onboard".to_string()),
            request_timeout: 5,
            log_level: "error".to_string(),
        };

        let client = OnboardClient::new(&config);
        assert_eq!(client.metrics().http_requests_total(), 0);
    }

    #[test]
    fn test_with_metrics_shares_counters() {
        let metrics = Metrics::new();
        let client = OnboardClient::with_timeout(Duration::from_secs(1)).with_metrics(metrics.clone());

        client.metrics().record_http_error();
        assert_eq!(metrics.http_errors_total(), 1);
    }
}
