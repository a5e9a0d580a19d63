//! Submission controller.
//!
//! Owns the submit lifecycle: validate the draft, check that an endpoint is
//! configured, post the submission once and record the terminal status.
//!
//! ```text
//! Idle -> Submitting -> Success | ValidationError | ConfigError | ServerError | NetworkError
//! ```
//!
//! Any terminal status goes back to `Submitting` on the next attempt. While
//! one submission is in flight, further attempts are ignored.

mod status;

pub use status::SubmissionStatus;

use crate::client::AsyncOnboardClient;
use crate::error::SubmitError;
use crate::metrics::Metrics;
use crate::models::DraftInput;
use crate::validation;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Message for a submit with no configured endpoint.
pub const ENDPOINT_NOT_CONFIGURED: &str = "Server endpoint not configured.";

/// Result of calling [`SubmissionController::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// The pipeline ran and ended in this terminal status.
    Completed(SubmissionStatus),
    /// Another submission was in flight; nothing was done.
    IgnoredWhileSubmitting,
}

impl SubmitAttempt {
    /// The terminal status, if the attempt ran.
    pub fn status(&self) -> Option<&SubmissionStatus> {
        match self {
            SubmitAttempt::Completed(status) => Some(status),
            SubmitAttempt::IgnoredWhileSubmitting => None,
        }
    }
}

/// Clears the in-flight flag when dropped, whatever way the submit ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs the onboarding submit pipeline and owns its status.
pub struct SubmissionController {
    client: Arc<dyn AsyncOnboardClient>,
    endpoint: Option<String>,
    status: Mutex<SubmissionStatus>,
    in_flight: AtomicBool,
    metrics: Metrics,
}

impl SubmissionController {
    /// Create a controller. An empty `endpoint` counts as not configured.
    pub fn new(client: Arc<dyn AsyncOnboardClient>, endpoint: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.filter(|url| !url.trim().is_empty()),
            status: Mutex::new(SubmissionStatus::Idle),
            in_flight: AtomicBool::new(false),
            metrics: Metrics::new(),
        }
    }

    /// Use a shared metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> SubmissionStatus {
        self.lock_status().clone()
    }

    /// Whether a submission is currently awaiting its response.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit a draft, validating against the local calendar date.
    pub async fn submit(&self, draft: &DraftInput) -> SubmitAttempt {
        self.submit_on(draft, chrono::Local::now().date_naive()).await
    }

    /// Submit a draft, treating `today` as the earliest allowed start date.
    pub async fn submit_on(&self, draft: &DraftInput, today: NaiveDate) -> SubmitAttempt {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Submit ignored: a submission is already in flight");
            self.metrics.record_submission_ignored();
            return SubmitAttempt::IgnoredWhileSubmitting;
        }
        let _in_flight = InFlight(&self.in_flight);

        self.metrics.record_submission_attempt();
        self.set_status(SubmissionStatus::Submitting);

        let terminal = self.run(draft, today).await;
        self.set_status(terminal.clone());

        SubmitAttempt::Completed(terminal)
    }

    async fn run(&self, draft: &DraftInput, today: NaiveDate) -> SubmissionStatus {
        let submission = match validation::validate_on(draft, today) {
            Ok(submission) => submission,
            Err(errors) => {
                info!("Submission rejected by validation: {}", errors);
                self.metrics.record_validation_failure();
                return SubmissionStatus::ValidationError(errors);
            }
        };

        let Some(endpoint) = self.endpoint.as_deref() else {
            warn!("Submission not sent: no endpoint configured");
            return SubmissionStatus::ConfigError(ENDPOINT_NOT_CONFIGURED.to_string());
        };

        match self.client.post_submission(endpoint, &submission).await {
            Ok(()) => {
                info!("Submission accepted by {}", endpoint);
                self.metrics.record_submission_success();
                SubmissionStatus::Success(submission)
            }
            Err(SubmitError::Server { status, message }) => {
                warn!("Endpoint returned {}: {}", status, message);
                SubmissionStatus::ServerError { status }
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                SubmissionStatus::NetworkError(describe_failure(e))
            }
        }
    }

    fn set_status(&self, status: SubmissionStatus) {
        *self.lock_status() = status;
    }

    fn lock_status(&self) -> MutexGuard<'_, SubmissionStatus> {
        // The status is replaced wholesale, so a poisoned value is still consistent
        self.status.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Underlying failure text for anything that is not a server response.
fn describe_failure(error: SubmitError) -> String {
    match error {
        SubmitError::Network(description) | SubmitError::Task(description) => description,
        other => other.to_string(),
    }
}
