//! HTTP request execution error types.
//!
//! Every failure maps to one of six categories. [`RequestError::user_message`]
//! gives the text shown to users; `Display` adds the underlying detail where
//! there is one.

use std::fmt;

/// The category of a failed execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    InvalidUrl,
    VariableSubstitution,
    UrlParse,
    Http,
    Other,
}

/// Errors that can occur while executing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The server could not be reached: connection, DNS or transport failure.
    Network(String),

    /// The URL could not be parsed at all.
    InvalidUrl(String),

    /// The URL still contains tokens after substitution.
    VariableSubstitution(String),

    /// The URL parsed but is not an http(s) URL with a host.
    UrlParse(String),

    /// The server answered with a non-2xx status.
    Http {
        status: u16,
        status_text: String,
        message: String,
    },

    /// Anything else, such as a response body that could not be read.
    Other(String),
}

impl RequestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RequestError::Network(_) => ErrorKind::Network,
            RequestError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            RequestError::VariableSubstitution(_) => ErrorKind::VariableSubstitution,
            RequestError::UrlParse(_) => ErrorKind::UrlParse,
            RequestError::Http { .. } => ErrorKind::Http,
            RequestError::Other(_) => ErrorKind::Other,
        }
    }

    /// Builds the error for a non-2xx response.
    pub fn http(status: u16, status_text: impl Into<String>) -> Self {
        let status_text = status_text.into();
        let message = http_error_message(status, &status_text);
        RequestError::Http {
            status,
            status_text,
            message,
        }
    }

    /// The message presented to users for this error.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Network(_) => "Network error: Unable to connect to the server. Please check your internet connection and try again.".to_string(),
            RequestError::InvalidUrl(_) => {
                "Invalid URL: The URL format is incorrect. Please check your endpoint URL."
                    .to_string()
            }
            RequestError::VariableSubstitution(detail) => {
                format!("Variable substitution failed: {}", detail)
            }
            RequestError::UrlParse(_) => {
                "URL parsing failed: The URL contains invalid characters or format.".to_string()
            }
            RequestError::Http {
                status, message, ..
            } => format!("HTTP {}: {}", status, message),
            RequestError::Other(detail) => format!("Request failed: {}", detail),
        }
    }
}

/// Maps a status code to the explanation shown after `HTTP <status>:`.
pub fn http_error_message(status: u16, status_text: &str) -> String {
    let message = match status {
        400 => "Bad Request - The server could not understand the request. Please check your request format.",
        401 => "Unauthorized - Authentication required. Please check your credentials.",
        403 => "Forbidden - You do not have permission to access this resource.",
        404 => "Not Found - The requested resource was not found. Please check your URL.",
        405 => "Method Not Allowed - The HTTP method is not supported for this endpoint.",
        408 => "Request Timeout - The server timed out waiting for the request.",
        429 => "Too Many Requests - Rate limit exceeded. Please try again later.",
        500 => "Internal Server Error - The server encountered an unexpected error.",
        502 => "Bad Gateway - The server received an invalid response from upstream.",
        503 => "Service Unavailable - The server is temporarily unavailable.",
        504 => "Gateway Timeout - The server did not receive a timely response.",
        _ if !status_text.is_empty() => status_text,
        _ => "Unknown error occurred",
    };
    message.to_string()
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Network(detail)
            | RequestError::InvalidUrl(detail)
            | RequestError::UrlParse(detail) => {
                write!(f, "{} ({})", self.user_message(), detail)
            }
            _ => write!(f, "{}", self.user_message()),
        }
    }
}

impl std::error::Error for RequestError {}

/// Transport failures count as network errors; the rest are unexpected.
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            RequestError::Network(err.to_string())
        } else {
            RequestError::Other(err.to_string())
        }
    }
}

impl From<url::ParseError> for RequestError {
    fn from(err: url::ParseError) -> Self {
        RequestError::InvalidUrl(err.to_string())
    }
}
