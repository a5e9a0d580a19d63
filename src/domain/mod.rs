//! Domain value objects and types.
//!
//! Each field of an onboarding submission has a type-safe wrapper that
//! validates at construction time, so an invalid value cannot be
//! represented once it has passed through here.

pub mod budget;
pub mod company_name;
pub mod email;
pub mod errors;
pub mod full_name;
pub mod service;
pub mod start_date;
pub mod terms;

pub use budget::{BudgetCoercion, BudgetInput, BudgetUsd, BUDGET_MAX_USD, BUDGET_MIN_USD};
pub use company_name::CompanyName;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use full_name::FullName;
pub use service::{selected_services_label, Service, ServiceSelection};
pub use start_date::ProjectStartDate;
pub use terms::{TermsAccepted, TermsInput};
