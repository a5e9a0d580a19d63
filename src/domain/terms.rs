//! Terms acceptance.
//!
//! Like the budget, the checkbox value is coerced first (boolean `true` or
//! the string `"true"` become `true`, anything else `false`) and the
//! canonical boolean is validated afterwards.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize, Serializer};

/// Raw terms checkbox value as it arrives from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermsInput {
    Flag(bool),
    Text(String),
}

impl TermsInput {
    /// Normalize an optional raw checkbox value to a boolean.
    pub fn coerce(input: Option<&TermsInput>) -> bool {
        match input {
            Some(TermsInput::Flag(flag)) => *flag,
            Some(TermsInput::Text(text)) => text == "true",
            None => false,
        }
    }
}

/// Proof that the terms were accepted. Serializes as `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermsAccepted;

impl TermsAccepted {
    /// Validate the coerced checkbox value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TermsNotAccepted` unless `accepted` is `true`.
    pub fn validate(accepted: bool) -> Result<Self, ValidationError> {
        if accepted {
            Ok(Self)
        } else {
            Err(ValidationError::TermsNotAccepted)
        }
    }
}

impl Serialize for TermsAccepted {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(true)
    }
}
