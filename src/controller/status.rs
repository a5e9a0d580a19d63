//! Submission status.

use crate::models::ValidatedSubmission;
use crate::validation::FieldErrors;

/// Where the submit lifecycle currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A submission is being validated or is awaiting its response.
    Submitting,

    /// The endpoint accepted the submission shown here.
    Success(ValidatedSubmission),

    /// The draft failed validation; no request was made.
    ValidationError(FieldErrors),

    /// No endpoint is configured; no request was made.
    ConfigError(String),

    /// The endpoint answered with a non-success status.
    ServerError { status: u16 },

    /// No response was obtained.
    NetworkError(String),
}

impl SubmissionStatus {
    /// Whether this status ends a submit attempt.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SubmissionStatus::Idle | SubmissionStatus::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success(_))
    }

    /// Top-level message for the status area of the form.
    ///
    /// Validation errors are shown next to each field instead, so they have
    /// no banner.
    pub fn banner(&self) -> Option<String> {
        match self {
            SubmissionStatus::Idle
            | SubmissionStatus::Submitting
            | SubmissionStatus::ValidationError(_) => None,
            SubmissionStatus::Success(_) => {
                Some("Success! Your submission was received.".to_string())
            }
            SubmissionStatus::ConfigError(message) => Some(message.clone()),
            SubmissionStatus::ServerError { status } => Some(format!("Server returned {}", status)),
            SubmissionStatus::NetworkError(description) => {
                Some(format!("Network error: {}", description))
            }
        }
    }

    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        match self {
            SubmissionStatus::Submitting => "Submitting Application...",
            _ => "Submit Application",
        }
    }
}
