//! ProjectStartDate value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Wire and input format of the start date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The day the project should start: today or later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectStartDate(NaiveDate);

impl ProjectStartDate {
    /// Parse an ISO `YYYY-MM-DD` date and check it against `today`.
    ///
    /// Both sides are calendar days, so time of day never matters.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::StartDateNotAllowed` when the value is empty,
    /// is not a calendar date, or falls before `today`.
    pub fn new(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::StartDateNotAllowed);
        }

        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| ValidationError::StartDateNotAllowed)?;

        if date < today {
            return Err(ValidationError::StartDateNotAllowed);
        }

        Ok(Self(date))
    }

    /// The calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Serialize for ProjectStartDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format(DATE_FORMAT))
    }
}

impl fmt::Display for ProjectStartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
