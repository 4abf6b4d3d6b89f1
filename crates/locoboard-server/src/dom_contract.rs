//! Element IDs and form fields the location page must carry.
//!
//! Checked once at startup against a sample render. A miss means the template
//! and the handlers disagree, so the server refuses to start.

use locoboard_core::Weekday;
use thiserror::Error;

pub const REQUIRED_IDS: [&str; 6] = [
    "loco",
    "addLocationBtn",
    "addLocoPlaceholder",
    "dropBtn",
    "dropdown-content",
    "submitLocoBtn",
];

pub const FORM_FIELDS: [&str; 7] = [
    "latitude",
    "longitude",
    "city",
    "address",
    "zip",
    "open",
    "close",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomContractError {
    #[error("page markup is missing element #{id}")]
    MissingElement { id: &'static str },

    #[error("add-location form is missing field '{name}'")]
    MissingField { name: &'static str },

    #[error("#dropdown-content holds {found} checkboxes, expected {expected}")]
    CheckboxCount { expected: usize, found: usize },
}

/// Verifies `html` against the contract.
///
/// # Errors
///
/// Returns the first [`DomContractError`] found.
pub fn verify(html: &str) -> Result<(), DomContractError> {
    for id in REQUIRED_IDS {
        if !html.contains(&format!("id=\"{id}\"")) {
            return Err(DomContractError::MissingElement { id });
        }
    }

    // Fields must sit inside the add-location placeholder.
    let form_start = html.find("id=\"addLocoPlaceholder\"").unwrap_or_default();
    let form_html = &html[form_start..];
    for name in FORM_FIELDS {
        if !form_html.contains(&format!("name=\"{name}\"")) {
            return Err(DomContractError::MissingField { name });
        }
    }

    let panel_start = html.find("id=\"dropdown-content\"").unwrap_or_default();
    let found = html[panel_start..].matches("type=\"checkbox\"").count();
    if found != Weekday::ALL.len() {
        return Err(DomContractError::CheckboxCount {
            expected: Weekday::ALL.len(),
            found,
        });
    }

    Ok(())
}
