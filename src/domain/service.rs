//! Offered services and the validated service selection.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A service a client can sign up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl Service {
    /// Every offered service, in display order.
    pub const ALL: [Service; 4] = [
        Service::UiUx,
        Service::Branding,
        Service::WebDev,
        Service::MobileApp,
    ];

    /// The label used on the form and on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Service::UiUx => "UI/UX",
            Service::Branding => "Branding",
            Service::WebDev => "Web Dev",
            Service::MobileApp => "Mobile App",
        }
    }

    /// Look up a service by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.label() == label)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A non-empty set of offered services.
///
/// Order of first selection is kept; repeated labels collapse to one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceSelection(Vec<Service>);

impl ServiceSelection {
    /// Build a selection from raw labels.
    ///
    /// The selection is all-or-nothing: one unknown label rejects the whole
    /// input.
    ///
    /// # Errors
    ///
    /// Returns `NoServiceSelected` for an empty input, otherwise one
    /// `UnknownService` per unrecognised label.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Result<Self, Vec<ValidationError>> {
        if labels.is_empty() {
            return Err(vec![ValidationError::NoServiceSelected]);
        }

        let mut services = Vec::with_capacity(labels.len());
        let mut issues = Vec::new();

        for label in labels {
            let label = label.as_ref();
            match Service::from_label(label) {
                Some(service) if !services.contains(&service) => services.push(service),
                Some(_) => {}
                None => issues.push(ValidationError::UnknownService(label.to_string())),
            }
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(Self(services))
    }

    /// The selected services.
    pub fn services(&self) -> &[Service] {
        &self.0
    }

    /// Whether a given service was selected.
    pub fn contains(&self, service: Service) -> bool {
        self.0.contains(&service)
    }
}

/// Render a selection the way the form summarises it: `None` when empty,
/// otherwise the labels joined by commas.
pub fn selected_services_label<S: AsRef<str>>(labels: &[S]) -> String {
    if labels.is_empty() {
        return "None".to_string();
    }

    labels
        .iter()
        .map(|label| label.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}
