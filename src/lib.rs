//! Client onboarding - validation and submission pipeline for a client intake form.
//!
//! This library validates raw onboarding form input against a fixed schema and
//! posts the validated submission as JSON to a configured endpoint.
//!
//! # Architecture
//!
//! - **domain**: Value objects for each form field
//! - **models**: Raw draft input and the validated submission
//! - **validation**: Schema validator producing a submission or per-field errors
//! - **controller**: Submit lifecycle and its terminal statuses
//! - **client**: HTTP client for the onboarding endpoint
//! - **prefill**: Service pre-selection from a query string
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: In-process counters for submissions and HTTP calls

pub mod client;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod prefill;
pub mod validation;

// Re-export commonly used types
pub use client::{AsyncOnboardClient, AsyncOnboardClientImpl, OnboardClient};
pub use config::Config;
pub use controller::{SubmissionController, SubmissionStatus, SubmitAttempt};
pub use domain::Service;
pub use error::{ConfigError, SubmitError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{DraftInput, ValidatedSubmission};
pub use prefill::{apply_service_prefill, services_from_query};
pub use validation::{validate, validate_on, Field, FieldError, FieldErrors};
