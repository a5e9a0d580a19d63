//! Domain validation errors.

use std::fmt;

/// Errors that can occur while building a domain value object from draft input.
///
/// The `Display` output of each variant is the message shown next to the
/// offending form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was not supplied at all.
    Required,

    /// Full name is shorter than the minimum length.
    FullNameTooShort,

    /// Full name is longer than the maximum length.
    FullNameTooLong,

    /// Full name contains characters outside the allowed set.
    FullNameInvalidCharacters,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// Company name is shorter than the minimum length.
    CompanyNameTooShort,

    /// Company name is longer than the maximum length.
    CompanyNameTooLong,

    /// No service was selected.
    NoServiceSelected,

    /// A selected service is not part of the offered services.
    UnknownService(String),

    /// Budget is not an integer inside the accepted range.
    BudgetOutOfRange,

    /// Start date is empty, unparseable, or before today.
    StartDateNotAllowed,

    /// Terms were not accepted.
    TermsNotAccepted,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "Required"),
            Self::FullNameTooShort => write!(f, "Full name must be at least 2 characters"),
            Self::FullNameTooLong => write!(f, "Full name must be at most 80 characters"),
            Self::FullNameInvalidCharacters => write!(f, "Full name contains invalid characters"),
            Self::InvalidEmail(_) => write!(f, "Invalid email address"),
            Self::CompanyNameTooShort => write!(f, "Company name is required"),
            Self::CompanyNameTooLong => write!(f, "Company name must be at most 100 characters"),
            Self::NoServiceSelected => write!(f, "Select at least one service"),
            Self::UnknownService(received) => write!(
                f,
                "Invalid enum value. Expected 'UI/UX' | 'Branding' | 'Web Dev' | 'Mobile App', received '{}'",
                received
            ),
            Self::BudgetOutOfRange => {
                write!(f, "Budget must be an integer between 100 and 1,000,000")
            }
            Self::StartDateNotAllowed => write!(f, "Project start date must be today or later"),
            Self::TermsNotAccepted => write!(f, "You must accept the terms"),
        }
    }
}

impl std::error::Error for ValidationError {}
