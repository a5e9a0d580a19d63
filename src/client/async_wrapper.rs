//! Async wrapper around synchronous OnboardClient.
//!
//! This module provides an async interface to the synchronous OnboardClient by using
//! `tokio::task::spawn_blocking` to run the HTTP call on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::OnboardClient;
use crate::error::{SubmitError, SubmitResult};
use crate::models::ValidatedSubmission;
use async_trait::async_trait;
use std::sync::Arc;

/// Async transport used by the submission controller.
///
/// Implementations must issue at most one request per call.
#[async_trait]
pub trait AsyncOnboardClient: Send + Sync {
    async fn post_submission(&self, url: &str, submission: &ValidatedSubmission) -> SubmitResult<()>;
}

/// Async wrapper around synchronous OnboardClient.
#[derive(Clone)]
pub struct AsyncOnboardClientImpl {
    client: Arc<OnboardClient>,
}

impl AsyncOnboardClientImpl {
    pub fn new(client: OnboardClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncOnboardClient for AsyncOnboardClientImpl {
    async fn post_submission(&self, url: &str, submission: &ValidatedSubmission) -> SubmitResult<()> {
        let client = self.client.clone();
        let url = url.to_string();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || client.post_submission(&url, &submission))
            .await
            .map_err(|e| SubmitError::Task(e.to_string()))?
    }
}
