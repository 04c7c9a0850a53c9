//! Request path decoding errors.

use std::fmt;

/// The part of an encoded request path that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeField {
    Method,
    Url,
    Body,
    Variables,
    Headers,
}

impl DecodeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeField::Method => "method",
            DecodeField::Url => "url",
            DecodeField::Body => "body",
            DecodeField::Variables => "variables",
            DecodeField::Headers => "headers",
        }
    }
}

impl fmt::Display for DecodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a field failed to decode.
#[derive(Debug)]
pub enum DecodeFailure {
    /// The segment is not valid base64.
    Base64(base64::DecodeError),

    /// The decoded bytes are not UTF-8.
    Utf8(std::string::FromUtf8Error),

    /// The decoded text is not the expected JSON.
    Json(serde_json::Error),

    /// A header value could not be percent-decoded.
    Percent(String),

    /// The method segment names no supported HTTP method.
    UnknownMethod(String),
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeFailure::Base64(err) => write!(f, "invalid base64: {}", err),
            DecodeFailure::Utf8(err) => write!(f, "invalid UTF-8: {}", err),
            DecodeFailure::Json(err) => write!(f, "invalid JSON: {}", err),
            DecodeFailure::Percent(msg) => write!(f, "invalid percent-encoding: {}", msg),
            DecodeFailure::UnknownMethod(method) => write!(f, "unknown method '{}'", method),
        }
    }
}

/// A decoding failure tagged with the field it happened in.
#[derive(Debug)]
pub struct DecodeError {
    pub field: DecodeField,
    pub reason: DecodeFailure,
}

impl DecodeError {
    pub fn new(field: DecodeField, reason: DecodeFailure) -> Self {
        Self { field, reason }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to decode request {}: {}", self.field, self.reason)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            DecodeFailure::Base64(err) => Some(err),
            DecodeFailure::Utf8(err) => Some(err),
            DecodeFailure::Json(err) => Some(err),
            DecodeFailure::Percent(_) | DecodeFailure::UnknownMethod(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DecodeError::new(
            DecodeField::Method,
            DecodeFailure::UnknownMethod("TRACE".to_string()),
        );
        assert_eq!(
            format!("{}", err),
            "Failed to decode request method: unknown method 'TRACE'"
        );
    }
}
