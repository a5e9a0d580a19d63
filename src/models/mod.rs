//! Data models for the onboarding form.
//!
//! This module contains the raw draft input collected from the user and the
//! validated submission that is sent to the onboarding endpoint.

pub mod draft;
pub mod submission;

pub use draft::DraftInput;
pub use submission::ValidatedSubmission;
