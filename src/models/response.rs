//! HTTP response data models.
//!
//! `RestResponse` is the JSON-shaped result of executing a request. A failed
//! execution is flattened into the same shape with `status: 0` and an `error`
//! message, which is what history collaborators persist.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Status text used for flattened failures.
pub const ERROR_STATUS_TEXT: &str = "Error";

/// Result of executing a request.
///
/// Every field is optional so the same shape can describe both a received
/// response and a failed attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestResponse {
    /// HTTP status code, or `0` for a flattened failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Status text reported by the server (or `"Error"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,

    /// Response headers, names as reported by the HTTP client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,

    /// Response payload: parsed JSON for JSON responses, a string otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Human-readable failure message. Presence signals failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Wall-clock start of the request in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    /// Duration of the request in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl RestResponse {
    /// Builds the flattened failure shape for an error message.
    pub fn failure(message: impl Into<String>, time: i64) -> Self {
        Self {
            status: Some(0),
            status_text: Some(ERROR_STATUS_TEXT.to_string()),
            headers: Some(HashMap::new()),
            data: None,
            error: Some(message.into()),
            time: Some(time),
            duration: Some(0),
        }
    }

    /// A response is a failure when it carries an error or has no status.
    pub fn is_error(&self) -> bool {
        self.error.is_some() || self.status.is_none()
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        !self.is_error() && self.status.map_or(false, |s| (200..300).contains(&s))
    }

    /// Gets a response header case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        })
    }

    /// Length of the payload serialized as JSON, in UTF-16 code units.
    ///
    /// Empty payloads (`null`, `""`, `false`, `0`) count as `0`.
    pub fn data_size(&self) -> usize {
        match &self.data {
            None | Some(Value::Null) | Some(Value::Bool(false)) => 0,
            Some(Value::String(s)) if s.is_empty() => 0,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => 0,
            Some(value) => value.to_string().encode_utf16().count(),
        }
    }
}
