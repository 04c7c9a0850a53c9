//! Variable substitution engine.
//!
//! This module replaces `{{variable}}` tokens in request text with values from
//! a user's variable list. Substitution is a single pass: a substituted value
//! that itself contains tokens is not expanded again. Unknown tokens are kept
//! verbatim, so substitution never fails.

use crate::models::{RequestSpec, Variable};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

/// Cached regex pattern for matching {{variableName}} with optional whitespace.
static VARIABLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("Failed to compile variable regex"));

/// Stricter pattern used for counting: names made of letters, digits, `_`, `-`, `.`.
static COUNTABLE_VARIABLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([\p{L}\p{N}_\-.]+)\s*\}\}").expect("Failed to compile variable regex")
});

/// Builds the name → value lookup. Later entries win on duplicate names.
fn variable_map(variables: &[Variable]) -> HashMap<&str, &str> {
    variables
        .iter()
        .map(|v| (v.name.as_str(), v.value.as_str()))
        .collect()
}

/// Substitutes all {{variable}} tokens in the input text.
///
/// Whitespace inside the braces is ignored, so `{{id}}`, `{{ id }}` and
/// `{{  id  }}` are equivalent. Tokens with no matching variable are left as
/// they are, braces included.
///
/// # Examples
///
/// ```
/// use rest_share::models::Variable;
/// use rest_share::variables::substitute;
///
/// let vars = vec![Variable::new("1", "host", "api.example.com")];
/// assert_eq!(
///     substitute("https://{{ host }}/users/{{id}}", &vars),
///     "https://api.example.com/users/{{id}}"
/// );
/// ```
pub fn substitute(text: &str, variables: &[Variable]) -> String {
    // Fast path: nothing to substitute
    if variables.is_empty() || !text.contains("{{") {
        return text.to_string();
    }

    let lookup = variable_map(variables);

    VARIABLE_REGEX
        .replace_all(text, |caps: &regex::Captures| {
            let name = caps[1].trim();
            match lookup.get(name) {
                Some(value) => (*value).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Substitutes an optional string; a missing value becomes `""`.
pub fn substitute_opt(text: Option<&str>, variables: &[Variable]) -> String {
    text.map(|t| substitute(t, variables)).unwrap_or_default()
}

/// Substitutes inside an arbitrary JSON value after coercing it to text.
///
/// `null` becomes `""`, strings are used as-is and every other value is
/// rendered in its compact JSON form (numbers in decimal).
pub fn substitute_json(value: &Value, variables: &[Variable]) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => substitute(s, variables),
        other => substitute(&other.to_string(), variables),
    }
}

/// Applies substitution to the URL, body and every header name and value.
///
/// The method is carried over unchanged.
pub fn substitute_request(spec: &RequestSpec, variables: &[Variable]) -> RequestSpec {
    RequestSpec {
        method: spec.method,
        url: substitute(&spec.url, variables),
        body: substitute(&spec.body, variables),
        headers: spec
            .headers
            .iter()
            .map(|h| crate::models::Header {
                name: substitute(&h.name, variables),
                value: substitute(&h.value, variables),
            })
            .collect(),
    }
}

/// Returns true when the text contains at least one `{{...}}` token.
pub fn has_variables(text: &str) -> bool {
    VARIABLE_REGEX.is_match(text)
}

/// Lists token names in order of appearance, trimmed, duplicates kept.
pub fn extract_variable_names(text: &str) -> Vec<String> {
    VARIABLE_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Counts tokens whose names consist of letters, digits, `_`, `-` or `.`.
pub fn count_variables(text: &str) -> usize {
    COUNTABLE_VARIABLE_REGEX.find_iter(text).count()
}

/// Names of tokens in `text` that have no matching variable.
pub fn unresolved_variables(text: &str, variables: &[Variable]) -> Vec<String> {
    let lookup = variable_map(variables);
    extract_variable_names(text)
        .into_iter()
        .filter(|name| !lookup.contains_key(name.as_str()))
        .collect()
}
