use async_trait::async_trait;
use client_onboarding::error::{SubmitError, SubmitResult};
use client_onboarding::{AsyncOnboardClient, ValidatedSubmission};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Canned outcome for the next posts.
#[allow(dead_code)]
#[derive(Clone, Debug)]
pub enum MockResponse {
    Ok,
    Status(u16),
    Network(String),
    /// The transport task died before producing a response
    Task(String),
}

/// Recorded call to `post_submission`.
#[allow(dead_code)]
#[derive(Clone, Debug)]
pub struct RecordedPost {
    pub url: String,
    pub submission: ValidatedSubmission,
}

/// Mock transport for testing the controller without HTTP.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockOnboardClient {
    response: Arc<Mutex<MockResponse>>,
    calls: Arc<Mutex<Vec<RecordedPost>>>,
    gate: Option<Gate>,
}

/// Holds a post open until the test releases it.
#[allow(dead_code)]
#[derive(Clone)]
pub struct Gate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

#[allow(dead_code)]
impl MockOnboardClient {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response: Arc::new(Mutex::new(response)),
            calls: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// A mock whose posts wait for `gate.release` after signalling `gate.started`.
    pub fn gated(response: MockResponse) -> (Self, Gate) {
        let gate = Gate {
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        };
        let mut mock = Self::new(response);
        mock.gate = Some(gate.clone());
        (mock, gate)
    }

    pub fn set_response(&self, response: MockResponse) {
        *self.response.lock().unwrap() = response;
    }

    pub fn calls(&self) -> Vec<RecordedPost> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AsyncOnboardClient for MockOnboardClient {
    async fn post_submission(&self, url: &str, submission: &ValidatedSubmission) -> SubmitResult<()> {
        self.calls.lock().unwrap().push(RecordedPost {
            url: url.to_string(),
            submission: submission.clone(),
        });

        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        let response = self.response.lock().unwrap().clone();
        match response {
            MockResponse::Ok => Ok(()),
            MockResponse::Status(status) => Err(SubmitError::Server {
                status,
                message: String::new(),
            }),
            MockResponse::Network(description) => Err(SubmitError::Network(description)),
            MockResponse::Task(description) => Err(SubmitError::Task(description)),
        }
    }
}
