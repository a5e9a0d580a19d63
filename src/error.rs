//! Error types for the onboarding client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation failures live in [`crate::validation::FieldErrors`].

use thiserror::Error;

/// Errors that can occur when posting a submission to the onboarding endpoint.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status code
    #[error("Server returned {status}")]
    Server { status: u16, message: String },

    /// No response was obtained (DNS, refused connection, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Failed to serialize the request body
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The blocking HTTP task could not be joined
    #[error("Task join error: {0}")]
    Task(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
