//! Data models for request history.

use crate::models::{HttpMethod, RestResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One executed request, as recorded by history collaborators.
///
/// Sizes are measured the way the JSON payloads would be measured by a
/// browser: UTF-16 code units of their JSON serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The URL the request was sent to.
    pub endpoint: String,

    pub method: HttpMethod,

    /// HTTP status, `0` for a failed execution, absent when unknown.
    pub status_code: Option<u16>,

    /// Request duration in milliseconds.
    pub duration: Option<u64>,

    /// Length of the request body serialized as a JSON string literal, `0`
    /// for an empty body.
    pub request_size: usize,

    /// Length of the response payload serialized as JSON, `0` without one.
    pub response_size: usize,

    pub error: Option<String>,

    pub timestamp: DateTime<Utc>,

    /// The encoded request path, so the entry can be reopened.
    pub encoded_path: String,
}

impl HistoryEntry {
    /// Builds an entry for a finished execution, stamped with the current time.
    pub fn record(
        endpoint: impl Into<String>,
        method: HttpMethod,
        response: &RestResponse,
        request_body: &str,
        encoded_path: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            endpoint: endpoint.into(),
            method,
            status_code: response.status,
            duration: response.duration,
            request_size: request_body_size(request_body),
            response_size: response.data_size(),
            error: response.error.clone(),
            timestamp: Utc::now(),
            encoded_path: encoded_path.into(),
        }
    }

    /// True when the recorded execution failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some() || self.status_code == Some(0)
    }
}

fn request_body_size(body: &str) -> usize {
    if body.is_empty() {
        return 0;
    }
    Value::String(body.to_string())
        .to_string()
        .encode_utf16()
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_success() {
        let response = RestResponse {
            status: Some(201),
            status_text: Some("Created".to_string()),
            data: Some(json!({"id": 1})),
            duration: Some(42),
            ..Default::default()
        };

        let entry = HistoryEntry::record(
            "https://api.example.com/items",
            HttpMethod::POST,
            &response,
            r#"{"name":"x"}"#,
            "/POST/aHR0cHM6Ly9hcGkuZXhhbXBsZS5jb20vaXRlbXM=",
        );

        assert_eq!(entry.status_code, Some(201));
        assert_eq!(entry.duration, Some(42));
        // "{\"name\":\"x\"}" with its quotes and escapes
        assert_eq!(entry.request_size, 18);
        assert_eq!(entry.response_size, 8);
        assert_eq!(entry.error, None);
        assert!(!entry.is_error());
        assert!(uuid::Uuid::parse_str(&entry.id).is_ok());
    }

    #[test]
    fn test_record_failure() {
        let response = RestResponse::failure("HTTP 404: Not Found", 0);
        let entry = HistoryEntry::record("https://a.com", HttpMethod::GET, &response, "", "/GET/x");

        assert_eq!(entry.status_code, Some(0));
        assert_eq!(entry.duration, Some(0));
        assert_eq!(entry.request_size, 0);
        assert_eq!(entry.response_size, 0);
        assert_eq!(entry.error.as_deref(), Some("HTTP 404: Not Found"));
        assert!(entry.is_error());
    }

    #[test]
    fn test_serializes_camel_case() {
        let entry = HistoryEntry::record(
            "https://a.com",
            HttpMethod::GET,
            &RestResponse::default(),
            "",
            "/GET/x",
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["method"], "GET");
        assert_eq!(json["statusCode"], Value::Null);
        assert_eq!(json["encodedPath"], "/GET/x");
    }
}
