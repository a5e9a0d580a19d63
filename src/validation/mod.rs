//! Schema validation for onboarding drafts.
//!
//! Turns a [`DraftInput`] into either a [`ValidatedSubmission`] or a
//! non-empty, ordered list of per-field errors. Every field is checked
//! independently, so one pass reports every problem on the form.

use crate::domain::{
    BudgetInput, BudgetUsd, CompanyName, EmailAddress, FullName, ProjectStartDate,
    ServiceSelection, TermsAccepted, TermsInput, ValidationError,
};
use crate::models::{DraftInput, ValidatedSubmission};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Top-level form field an error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    CompanyName,
    Services,
    BudgetUsd,
    ProjectStartDate,
    AcceptTerms,
}

impl Field {
    /// The field's key in the draft and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::CompanyName => "companyName",
            Field::Services => "services",
            Field::BudgetUsd => "budgetUsd",
            Field::ProjectStartDate => "projectStartDate",
            Field::AcceptTerms => "acceptTerms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Every rule a draft failed, in field order.
///
/// Never empty when returned from [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{} field error(s): {}", .0.len(), summarize(.0))]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl FieldErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any error is attached to `field`.
    pub fn has(&self, field: Field) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// All messages for one field, in check order.
    pub fn messages_for(&self, field: Field) -> Vec<&str> {
        self.0
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// The first message for one field.
    pub fn first_for(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Fields with at least one error, in order, without repeats.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = Vec::new();
        for error in &self.0 {
            if !fields.contains(&error.field) {
                fields.push(error.field);
            }
        }
        fields
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collects failures while each field is checked.
#[derive(Default)]
struct Collector(Vec<FieldError>);

impl Collector {
    fn push(&mut self, field: Field, error: ValidationError) {
        self.0.push(FieldError {
            field,
            message: error.to_string(),
        });
    }

    fn single<T>(&mut self, field: Field, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(field, error);
                None
            }
        }
    }

    fn many<T>(&mut self, field: Field, result: Result<T, Vec<ValidationError>>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                for error in errors {
                    self.push(field, error);
                }
                None
            }
        }
    }

    fn required<'a>(&mut self, field: Field, value: Option<&'a str>) -> Option<&'a str> {
        if value.is_none() {
            self.push(field, ValidationError::Required);
        }
        value
    }
}

/// Validate a draft against the local calendar date.
pub fn validate(draft: &DraftInput) -> Result<ValidatedSubmission, FieldErrors> {
    validate_on(draft, Local::now().date_naive())
}

/// Validate a draft, treating `today` as the earliest allowed start date.
///
/// # Errors
///
/// Returns every failed rule as a [`FieldErrors`] list when any field is
/// invalid.
pub fn validate_on(draft: &DraftInput, today: NaiveDate) -> Result<ValidatedSubmission, FieldErrors> {
    let mut errors = Collector::default();

    let full_name = errors
        .required(Field::FullName, draft.full_name.as_deref())
        .and_then(|name| errors.many(Field::FullName, FullName::new(name)));

    let email = errors
        .required(Field::Email, draft.email.as_deref())
        .and_then(|email| errors.single(Field::Email, EmailAddress::new(email)));

    let company_name = errors
        .required(Field::CompanyName, draft.company_name.as_deref())
        .and_then(|name| errors.single(Field::CompanyName, CompanyName::new(name)));

    let services = errors.many(
        Field::Services,
        ServiceSelection::new(draft.selected_services()),
    );

    let budget = errors.single(
        Field::BudgetUsd,
        BudgetUsd::validate(BudgetInput::coerce(draft.budget_usd.as_ref())),
    );

    let start_date = errors
        .required(Field::ProjectStartDate, draft.project_start_date.as_deref())
        .and_then(|date| {
            errors.single(Field::ProjectStartDate, ProjectStartDate::new(date, today))
        });

    let terms = errors.single(
        Field::AcceptTerms,
        TermsAccepted::validate(TermsInput::coerce(draft.accept_terms.as_ref())),
    );

    match (full_name, email, company_name, services, budget, start_date, terms) {
        (
            Some(full_name),
            Some(email),
            Some(company_name),
            Some(services),
            Some(budget),
            Some(start_date),
            Some(_),
        ) if errors.0.is_empty() => Ok(ValidatedSubmission::new(
            full_name,
            email,
            company_name,
            services,
            budget,
            start_date,
        )),
        _ => Err(FieldErrors(errors.0)),
    }
}
