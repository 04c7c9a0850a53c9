//! Configuration schema.
//!
//! Every setting is optional in the user's JSON; missing settings fall back
//! to the defaults below.

use crate::codegen::{Language, UnknownLanguage};
use crate::variables::JsonFileVariableStore;
use serde::{Deserialize, Serialize};

/// User-configurable settings, read from the `"rest-client"` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestClientConfig {
    /// `Content-Type` sent when the request does not set one.
    ///
    /// Defaults to `application/json`.
    #[serde(default = "default_content_type")]
    pub default_content_type: String,

    /// Code generation target preselected in pickers. Must be a known
    /// language id. Defaults to `curl`.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// JSON file backing the per-user variable store.
    #[serde(default = "default_variables_file")]
    pub variables_file: String,

    /// Prefix under which encoded request paths are served, e.g. `/rest`.
    ///
    /// Empty or starting with `/`. Defaults to empty.
    #[serde(default)]
    pub route_prefix: String,

    /// `User-Agent` sent with every request unless the request overrides it.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self {
            default_content_type: default_content_type(),
            default_language: default_language(),
            variables_file: default_variables_file(),
            route_prefix: String::new(),
            user_agent: default_user_agent(),
        }
    }
}

impl RestClientConfig {
    /// Validates the configuration and returns a descriptive message for the
    /// first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_content_type.trim().is_empty() {
            return Err("defaultContentType must not be empty".to_string());
        }

        if self.default_language.parse::<Language>().is_err() {
            return Err(format!(
                "defaultLanguage '{}' is not a known language",
                self.default_language
            ));
        }

        if self.variables_file.trim().is_empty() {
            return Err("variablesFile must not be empty".to_string());
        }

        if !self.route_prefix.is_empty() && !self.route_prefix.starts_with('/') {
            return Err("routePrefix must start with '/'".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("userAgent must not be empty".to_string());
        }

        Ok(())
    }

    /// The default code generation target.
    ///
    /// Falls back to curl for configs that skipped [`validate`](Self::validate).
    pub fn language(&self) -> Language {
        self.default_language.parse().unwrap_or(Language::Curl)
    }

    /// Resolves an explicitly requested target, falling back to the
    /// configured default when none is given.
    pub fn resolve_language(&self, requested: Option<&str>) -> Result<Language, UnknownLanguage> {
        match requested {
            Some(id) => id.parse(),
            None => Ok(self.language()),
        }
    }

    /// The per-user variable store backed by [`variables_file`](Self::variables_file).
    pub fn variable_store(&self) -> JsonFileVariableStore {
        JsonFileVariableStore::new(&self.variables_file)
    }

    /// Merges this configuration with another, using values from `other`.
    pub fn merge(&self, other: &RestClientConfig) -> Self {
        Self {
            default_content_type: other.default_content_type.clone(),
            default_language: other.default_language.clone(),
            variables_file: other.variables_file.clone(),
            route_prefix: other.route_prefix.clone(),
            user_agent: other.user_agent.clone(),
        }
    }
}

// Default value functions for serde

fn default_content_type() -> String {
    "application/json".to_string()
}

fn default_language() -> String {
    Language::Curl.id().to_string()
}

fn default_variables_file() -> String {
    "rest-client-variables.json".to_string()
}

fn default_user_agent() -> String {
    format!("rest-client/{}", env!("CARGO_PKG_VERSION"))
}
