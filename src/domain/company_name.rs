//! CompanyName value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum length of a company name, in characters.
pub const COMPANY_NAME_MIN_LEN: usize = 2;

/// Maximum length of a company name, in characters.
pub const COMPANY_NAME_MAX_LEN: usize = 100;

/// The client's company name. Any characters are allowed; only the length is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyName(String);

impl CompanyName {
    /// Create a new CompanyName.
    ///
    /// # Errors
    ///
    /// Returns `CompanyNameTooShort` or `CompanyNameTooLong` when the length
    /// is outside the accepted range.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let len = name.chars().count();

        if len < COMPANY_NAME_MIN_LEN {
            return Err(ValidationError::CompanyNameTooShort);
        }
        if len > COMPANY_NAME_MAX_LEN {
            return Err(ValidationError::CompanyNameTooLong);
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for CompanyName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
