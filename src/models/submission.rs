//! Validated submission: the trusted payload sent to the onboarding endpoint.

use crate::domain::{
    BudgetUsd, CompanyName, EmailAddress, FullName, ProjectStartDate, ServiceSelection,
    TermsAccepted,
};
use serde::Serialize;

/// A schema-passing onboarding submission.
///
/// Only the validator can build one; callers read fields through accessors.
/// Serializes to the wire format with camelCase keys, leaving `budgetUsd`
/// out entirely when no budget was given.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedSubmission {
    full_name: FullName,
    email: EmailAddress,
    company_name: CompanyName,
    services: ServiceSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget_usd: Option<BudgetUsd>,
    project_start_date: ProjectStartDate,
    accept_terms: TermsAccepted,
}

impl ValidatedSubmission {
    pub(crate) fn new(
        full_name: FullName,
        email: EmailAddress,
        company_name: CompanyName,
        services: ServiceSelection,
        budget_usd: Option<BudgetUsd>,
        project_start_date: ProjectStartDate,
    ) -> Self {
        Self {
            full_name,
            email,
            company_name,
            services,
            budget_usd,
            project_start_date,
            accept_terms: TermsAccepted,
        }
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn company_name(&self) -> &CompanyName {
        &self.company_name
    }

    pub fn services(&self) -> &ServiceSelection {
        &self.services
    }

    pub fn budget_usd(&self) -> Option<BudgetUsd> {
        self.budget_usd
    }

    pub fn project_start_date(&self) -> ProjectStartDate {
        self.project_start_date
    }

    /// Always `true`; a submission cannot exist without accepted terms.
    pub fn accept_terms(&self) -> bool {
        true
    }

    /// The JSON request body.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Indented JSON for showing the submitted data back to the user.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
