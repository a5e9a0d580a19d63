//! FullName value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum length of a full name, in characters.
pub const FULL_NAME_MIN_LEN: usize = 2;

/// Maximum length of a full name, in characters.
pub const FULL_NAME_MAX_LEN: usize = 80;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ' -]+$").expect("Failed to compile full name regex")
});

/// A person's full name as entered on the form.
///
/// The value is kept exactly as given (no trimming). Letters are limited to
/// ASCII and the Latin-1 letter ranges, plus apostrophe, hyphen and space.
///
/// # Example
///
/// ```
/// use client_onboarding::domain::FullName;
///
/// let name = FullName::new("Zoë O'Brien-Smith").unwrap();
/// assert_eq!(name.as_str(), "Zoë O'Brien-Smith");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName(String);

impl FullName {
    /// Create a new FullName.
    ///
    /// Every rule is checked independently, so a single value can fail
    /// several of them at once.
    ///
    /// # Errors
    ///
    /// Returns each failed rule, in check order: too short, too long,
    /// invalid characters.
    pub fn new(name: impl Into<String>) -> Result<Self, Vec<ValidationError>> {
        let name = name.into();
        let issues = Self::issues(&name);

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(Self(name))
    }

    fn issues(name: &str) -> Vec<ValidationError> {
        let len = name.chars().count();
        let mut issues = Vec::new();

        if len < FULL_NAME_MIN_LEN {
            issues.push(ValidationError::FullNameTooShort);
        }
        if len > FULL_NAME_MAX_LEN {
            issues.push(ValidationError::FullNameTooLong);
        }
        if !NAME_REGEX.is_match(name) {
            issues.push(ValidationError::FullNameInvalidCharacters);
        }

        issues
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for FullName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
