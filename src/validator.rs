//! URL validation for the request editor.
//!
//! A URL is accepted when it parses as an absolute URL with a host. URLs
//! that still contain `{{name}}` tokens are judged after substitution, or
//! accepted provisionally when no variables are available yet.

use crate::models::Variable;
use crate::variables::{has_variables, substitute};
use std::fmt;
use url::Url;

/// Why a URL was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlValidationError {
    /// The URL is empty.
    Required,

    /// The URL is not absolute or has no host.
    Invalid,

    /// The URL only became invalid once variables were substituted.
    InvalidAfterSubstitution,
}

impl UrlValidationError {
    /// Message shown next to the URL field.
    pub fn message(&self) -> &'static str {
        match self {
            UrlValidationError::Required => "URL is required",
            UrlValidationError::Invalid => "Please enter a valid URL",
            UrlValidationError::InvalidAfterSubstitution => {
                "Please enter a valid URL (variables may have invalid values)"
            }
        }
    }
}

impl fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for UrlValidationError {}

fn is_absolute_with_host(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| parsed.host_str().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}

/// Validates `url` against the user's variables.
pub fn validate(url: &str, variables: &[Variable]) -> Result<(), UrlValidationError> {
    if url.is_empty() {
        return Err(UrlValidationError::Required);
    }

    if !has_variables(url) {
        return if is_absolute_with_host(url) {
            Ok(())
        } else {
            Err(UrlValidationError::Invalid)
        };
    }

    if variables.is_empty() {
        return Ok(());
    }

    if is_absolute_with_host(&substitute(url, variables)) {
        Ok(())
    } else {
        Err(UrlValidationError::InvalidAfterSubstitution)
    }
}

/// Like [`validate`], but returns the message directly; `""` means valid.
pub fn validation_message(url: &str, variables: &[Variable]) -> String {
    match validate(url, variables) {
        Ok(()) => String::new(),
        Err(err) => err.message().to_string(),
    }
}
