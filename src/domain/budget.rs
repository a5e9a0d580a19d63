//! Budget input coercion and the validated budget amount.
//!
//! The budget field accepts loosely typed input (a JSON number or any
//! string). Handling happens in two explicit stages:
//!
//! 1. [`BudgetInput::coerce`] turns the raw value into a [`BudgetCoercion`]:
//!    not provided, a numeric candidate, or the original unparsed text.
//! 2. [`BudgetUsd::validate`] accepts only whole numbers inside
//!    [`BUDGET_MIN_USD`]..=[`BUDGET_MAX_USD`].

use super::errors::ValidationError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Smallest accepted budget, in US dollars.
pub const BUDGET_MIN_USD: u32 = 100;

/// Largest accepted budget, in US dollars.
pub const BUDGET_MAX_USD: u32 = 1_000_000;

/// Raw budget value as it arrives from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BudgetInput {
    Number(f64),
    Text(String),
}

/// Result of the coercion stage.
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetCoercion {
    /// Nothing was entered.
    NotProvided,
    /// The input is a number (not yet range-checked).
    Numeric(f64),
    /// The input could not be read as a number and is kept as given.
    Unparsed(String),
}

impl BudgetInput {
    /// Normalize an optional raw budget.
    ///
    /// Absent input, empty strings and whitespace-only strings count as not
    /// provided. Strings are trimmed before being parsed as a decimal number.
    pub fn coerce(input: Option<&BudgetInput>) -> BudgetCoercion {
        match input {
            None => BudgetCoercion::NotProvided,
            Some(BudgetInput::Number(value)) => BudgetCoercion::Numeric(*value),
            Some(BudgetInput::Text(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return BudgetCoercion::NotProvided;
                }
                // Rust float syntax only: hex/binary/octal literals are not numbers here
                match trimmed.parse::<f64>() {
                    Ok(value) => BudgetCoercion::Numeric(value),
                    Err(_) => BudgetCoercion::Unparsed(text.clone()),
                }
            }
        }
    }
}

/// A budget in whole US dollars, inside the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BudgetUsd(u32);

impl BudgetUsd {
    /// Validate a coerced budget.
    ///
    /// Returns `Ok(None)` when no budget was provided.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BudgetOutOfRange` for unparsed text,
    /// fractional values, and values outside the accepted range.
    pub fn validate(coerced: BudgetCoercion) -> Result<Option<Self>, ValidationError> {
        match coerced {
            BudgetCoercion::NotProvided => Ok(None),
            BudgetCoercion::Numeric(value) => Self::from_number(value).map(Some),
            BudgetCoercion::Unparsed(_) => Err(ValidationError::BudgetOutOfRange),
        }
    }

    fn from_number(value: f64) -> Result<Self, ValidationError> {
        let in_range =
            value >= f64::from(BUDGET_MIN_USD) && value <= f64::from(BUDGET_MAX_USD);

        if !value.is_finite() || value.fract() != 0.0 || !in_range {
            return Err(ValidationError::BudgetOutOfRange);
        }

        Ok(Self(value as u32))
    }

    /// The amount in dollars.
    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl Serialize for BudgetUsd {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl fmt::Display for BudgetUsd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
