//! Form validation
//!
//! Copy, open and invite actions are only allowed once the form is valid.
//! Failures are expected user-input states and come back as values.

use thiserror::Error;

use crate::reference::validate_reference;

/// Why the form cannot be shared yet. The `Display` text is the message
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("No USD file selected. Please select a valid omniverse:// or http(s):// USD file URL")]
    NoReference,

    #[error("USD file is not shareable. Use omniverse:// or http(s):// format.")]
    NotShareable,

    /// The base URL still points at the placeholder domain
    #[error("Configure Base URL to match your organization's Innoactive Portal domain name.")]
    DefaultBaseUrlUnset,
}

pub type ValidationResult = Result<(), ValidationError>;

/// Validate the form. Checks run in order: reference present, reference
/// shareable, base URL configured.
pub fn validate_form(reference: &str, base_url: &str, default_base_url: &str) -> ValidationResult {
    if reference.is_empty() {
        Err(ValidationError::NoReference)
    } else if !validate_reference(reference) {
        Err(ValidationError::NotShareable)
    } else if base_url == default_base_url {
        Err(ValidationError::DefaultBaseUrlUnset)
    } else {
        Ok(())
    }
}
