//! HTTP request executor.
//!
//! Sends a [`RequestSpec`] with reqwest and reports the outcome either as a
//! typed `Result` ([`RequestExecutor::try_execute`]) or flattened into the
//! [`RestResponse`] JSON shape ([`RequestExecutor::execute`]), where failures
//! carry `status: 0` and a user-facing `error` message.
//!
//! There are no retries, timeouts or cancellation: one request, one await.

pub mod config;
pub mod error;

pub use config::ExecutionConfig;
pub use error::{http_error_message, ErrorKind, RequestError};

use crate::models::{HttpMethod, RequestSpec, RestResponse, Variable};
use crate::variables::{substitute_request, unresolved_variables};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Instant;
use url::Url;

const CONTENT_TYPE: &str = "Content-Type";
const TEXT_PLAIN: &str = "text/plain";

/// Executes requests over a shared reqwest client.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    client: reqwest::Client,
    config: ExecutionConfig,
}

impl RequestExecutor {
    /// Builds an executor with a client configured from `config`.
    pub fn new(config: ExecutionConfig) -> Result<Self, RequestError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| RequestError::Other(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Builds an executor around an existing client.
    pub fn with_client(client: reqwest::Client, config: ExecutionConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Executes the request, returning the response or the failure category.
    ///
    /// Non-2xx responses are errors.
    pub async fn try_execute(&self, spec: &RequestSpec) -> Result<RestResponse, RequestError> {
        let url = parse_http_url(&spec.url)?;

        let mut headers = prepare_headers(&self.config.default_content_type, spec);
        let body = prepare_body(spec, &mut headers);

        let mut builder = self.client.request(to_reqwest_method(spec.method), url);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        log::debug!("Sending {} {}", spec.method, spec.url);

        let time = chrono::Utc::now().timestamp_millis();
        let started = Instant::now();

        let response = builder.send().await?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let response_headers = collect_headers(response.headers());
        let text = response.text().await?;

        let duration = started.elapsed().as_millis() as u64;

        if !status.is_success() {
            log::debug!("{} {} answered {}", spec.method, spec.url, status);
            return Err(RequestError::http(status.as_u16(), status_text));
        }

        let is_json = response_headers
            .get("content-type")
            .is_some_and(|ct| ct.contains("application/json"));
        let data = if is_json {
            serde_json::from_str(&text).map_err(|e| {
                RequestError::Other(format!("Failed to parse JSON response: {}", e))
            })?
        } else {
            Value::String(text)
        };

        Ok(RestResponse {
            status: Some(status.as_u16()),
            status_text: Some(status_text),
            headers: Some(response_headers),
            data: Some(data),
            error: None,
            time: Some(time),
            duration: Some(duration),
        })
    }

    /// Executes the request; failures are flattened into the response shape.
    pub async fn execute(&self, spec: &RequestSpec) -> RestResponse {
        self.try_execute(spec).await.unwrap_or_else(flatten_error)
    }

    /// Substitutes variables into the URL, body and headers, then executes.
    ///
    /// A URL token with no matching variable fails before any network access.
    pub async fn try_execute_with_variables(
        &self,
        spec: &RequestSpec,
        variables: &[Variable],
    ) -> Result<RestResponse, RequestError> {
        let unresolved = unresolved_variables(&spec.url, variables);
        if !unresolved.is_empty() {
            return Err(RequestError::VariableSubstitution(format!(
                "Failed to substitute variables: {}",
                unresolved.join(", ")
            )));
        }

        self.try_execute(&substitute_request(spec, variables)).await
    }

    /// Flattening counterpart of [`try_execute_with_variables`](Self::try_execute_with_variables).
    pub async fn execute_with_variables(
        &self,
        spec: &RequestSpec,
        variables: &[Variable],
    ) -> RestResponse {
        self.try_execute_with_variables(spec, variables)
            .await
            .unwrap_or_else(flatten_error)
    }
}

fn flatten_error(err: RequestError) -> RestResponse {
    log::warn!("Request failed: {}", err);
    RestResponse::failure(err.user_message(), chrono::Utc::now().timestamp_millis())
}

/// Accepts only absolute http(s) URLs with a host.
fn parse_http_url(raw: &str) -> Result<Url, RequestError> {
    let url = Url::parse(raw)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(RequestError::UrlParse(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(RequestError::UrlParse("missing host".to_string()));
    }

    Ok(url)
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::PATCH => reqwest::Method::PATCH,
        HttpMethod::DELETE => reqwest::Method::DELETE,
        HttpMethod::HEAD => reqwest::Method::HEAD,
        HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
    }
}

/// Replaces a header (matched case-insensitively) or appends it.
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
    {
        Some(entry) => *entry = (name.to_string(), value.to_string()),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

/// The default `Content-Type` followed by the caller's headers, later names
/// overriding earlier ones case-insensitively. Nameless headers are dropped.
fn prepare_headers(default_content_type: &str, spec: &RequestSpec) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_string(), default_content_type.to_string())];
    for header in spec.headers.iter().filter(|h| !h.name.is_empty()) {
        set_header(&mut headers, &header.name, &header.value);
    }
    headers
}

/// The body to send, if any. JSON is re-serialized compactly; anything else
/// is sent verbatim as `text/plain`.
fn prepare_body(spec: &RequestSpec, headers: &mut Vec<(String, String)>) -> Option<String> {
    let body = spec.effective_body()?;

    match serde_json::from_str::<Value>(body) {
        Ok(json) => Some(json.to_string()),
        Err(_) => {
            set_header(headers, CONTENT_TYPE, TEXT_PLAIN);
            Some(body.to_string())
        }
    }
}

/// Response headers keyed by lowercase name; repeated headers are joined
/// with `", "`.
fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    collected
}
