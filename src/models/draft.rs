//! Draft input: the raw, untrusted form state.

use crate::domain::{BudgetInput, TermsInput};
use crate::domain::start_date::DATE_FORMAT;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw onboarding form values as entered by the user.
///
/// Every field is optional so that a partially filled form can be
/// represented; nothing here is trusted until it has been validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftInput {
    pub full_name: Option<String>,

    pub email: Option<String>,

    pub company_name: Option<String>,

    /// Selected service labels; absent is treated as no selection
    pub services: Option<Vec<String>>,

    /// Number or string; `null` is the same as absent
    pub budget_usd: Option<BudgetInput>,

    /// ISO `YYYY-MM-DD`
    pub project_start_date: Option<String>,

    /// Boolean or the string `"true"`
    pub accept_terms: Option<TermsInput>,
}

impl DraftInput {
    /// The state of a freshly opened form.
    ///
    /// Text fields are empty, no service is selected, the start date is
    /// `today` and the terms are not accepted.
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            full_name: Some(String::new()),
            email: Some(String::new()),
            company_name: Some(String::new()),
            services: Some(Vec::new()),
            budget_usd: Some(BudgetInput::Text(String::new())),
            project_start_date: Some(today.format(DATE_FORMAT).to_string()),
            accept_terms: Some(TermsInput::Flag(false)),
        }
    }

    /// Selected service labels, empty when none were given.
    pub fn selected_services(&self) -> &[String] {
        self.services.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let draft: DraftInput = serde_json::from_str(
            r#"{
                "fullName": "Jane Doe",
                "email": "jane@example.com",
                "companyName": "Acme",
                "services": ["UI/UX"],
                "budgetUsd": "500",
                "projectStartDate": "2026-10-16",
                "acceptTerms": "true"
            }"#,
        )
        .unwrap();

        assert_eq!(draft.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(draft.selected_services(), &["UI/UX".to_string()]);
        assert_eq!(draft.budget_usd, Some(BudgetInput::Text("500".to_string())));
        assert_eq!(
            draft.accept_terms,
            Some(TermsInput::Text("true".to_string()))
        );
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let draft: DraftInput =
            serde_json::from_str(r#"{"budgetUsd": null, "acceptTerms": true}"#).unwrap();

        assert_eq!(draft.full_name, None);
        assert_eq!(draft.budget_usd, None);
        assert!(draft.selected_services().is_empty());
        assert_eq!(draft.accept_terms, Some(TermsInput::Flag(true)));
    }

    #[test]
    fn test_deserialize_rejects_malformed_shape() {
        let result: Result<DraftInput, _> = serde_json::from_str(r#"{"budgetUsd": {"amount": 5}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_defaults() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let draft = DraftInput::with_defaults(today);

        assert_eq!(draft.project_start_date.as_deref(), Some("2026-10-16"));
        assert_eq!(draft.accept_terms, Some(TermsInput::Flag(false)));
        assert!(draft.selected_services().is_empty());
    }
}
