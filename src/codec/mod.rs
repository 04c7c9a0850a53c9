//! Request codec.
//!
//! Turns a [`RequestSpec`] plus the user's variables into a navigable,
//! shareable path and back. The URL, body and variable list travel as
//! URL-safe base64 path segments; headers travel in the query string.
//!
//! The body is wrapped as a JSON string literal before it is encoded and
//! JSON-parsed after it is decoded. For bodies produced by [`encode`] this
//! restores the original text exactly; links whose body segment holds raw
//! JSON decode to the parsed JSON value instead.
//!
//! # Example
//!
//! ```
//! use rest_share::codec::{decode_path, encode};
//! use rest_share::models::{HttpMethod, RequestSpec, Variable};
//!
//! let spec = RequestSpec::new(HttpMethod::POST, "https://api.x.com/u/{{id}}")
//!     .with_body(r#"{"n":1}"#)
//!     .with_header("X", "y");
//! let vars = vec![Variable::new("1", "id", "42")];
//!
//! let path = encode(&spec, Some(vars.as_slice()));
//! let decoded = decode_path(&path, "").unwrap();
//!
//! assert_eq!(decoded.method, HttpMethod::POST);
//! assert_eq!(decoded.url, "https://api.x.com/u/42");
//! assert_eq!(decoded.body_text(), r#"{"n":1}"#);
//! ```

pub mod error;
pub mod path;
pub mod url_safe;

pub use error::{DecodeError, DecodeFailure, DecodeField};
pub use path::EncodedRequestPath;

use crate::models::{Header, HttpMethod, RequestSpec, Variable};
use crate::variables::substitute;
use serde_json::{json, Value};
use url::form_urlencoded;

/// A request reconstructed from an encoded path.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Parsed JSON when the decoded body is JSON, otherwise the raw text as a
    /// JSON string.
    pub body: Value,
    pub headers: Vec<Header>,
    pub variables: Vec<Variable>,
}

impl DecodedRequest {
    /// The body as editable text: strings verbatim, other JSON compact.
    pub fn body_text(&self) -> String {
        match &self.body {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Converts into a request description, dropping the variables.
    pub fn into_spec(self) -> RequestSpec {
        let body = self.body_text();
        RequestSpec {
            method: self.method,
            url: self.url,
            body,
            headers: self.headers,
        }
    }
}

fn variables_json(variables: &[Variable]) -> String {
    Value::Array(
        variables
            .iter()
            .map(|v| json!({ "id": v.id, "name": v.name, "value": v.value }))
            .collect(),
    )
    .to_string()
}

/// Builds the header query string: one `name=percentEncode(value)` pair per
/// header with a non-empty name and value, in order.
fn encode_headers(headers: &[Header]) -> Option<String> {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;

    for header in headers {
        if header.name.is_empty() || header.value.is_empty() {
            continue;
        }
        serializer.append_pair(&header.name, &urlencoding::encode(&header.value));
        any = true;
    }

    any.then(|| serializer.finish())
}

/// Encodes a request into its path parts.
///
/// The URL is encoded after substitution so the path reflects what is sent.
/// When a variable list is given but the body is empty, the body segment
/// carries the empty JSON string `""` to keep the variables in their slot.
pub fn encode_parts(spec: &RequestSpec, variables: Option<&[Variable]>) -> EncodedRequestPath {
    let resolved_url = substitute(&spec.url, variables.unwrap_or(&[]));

    let encoded_body = if spec.body.is_empty() && variables.is_none() {
        None
    } else {
        let literal = Value::String(spec.body.clone()).to_string();
        Some(url_safe::encode(&literal))
    };

    EncodedRequestPath {
        method: Some(spec.method.as_str().to_string()),
        encoded_url: Some(url_safe::encode(&resolved_url)),
        encoded_body,
        encoded_variables: variables.map(|vars| url_safe::encode(&variables_json(vars))),
        query: encode_headers(&spec.headers),
    }
}

/// Encodes a request into a path such as `/POST/<url>/<body>/<vars>?X=y`.
pub fn encode(spec: &RequestSpec, variables: Option<&[Variable]>) -> String {
    let path = encode_parts(spec, variables).to_string();
    log::debug!("Encoded {} request into {} byte path", spec.method, path.len());
    path
}

fn decode_method(method: Option<&str>) -> Result<HttpMethod, DecodeError> {
    match method {
        None => Ok(HttpMethod::GET),
        Some(m) => m.parse().map_err(|_| {
            DecodeError::new(
                DecodeField::Method,
                DecodeFailure::UnknownMethod(m.to_string()),
            )
        }),
    }
}

fn decode_body(encoded: Option<&str>) -> Result<Value, DecodeError> {
    let Some(encoded) = encoded else {
        return Ok(Value::String(String::new()));
    };

    let text =
        url_safe::decode(encoded).map_err(|reason| DecodeError::new(DecodeField::Body, reason))?;

    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

fn decode_variables(encoded: Option<&str>) -> Result<Vec<Variable>, DecodeError> {
    let Some(encoded) = encoded else {
        return Ok(Vec::new());
    };

    let text = url_safe::decode(encoded)
        .map_err(|reason| DecodeError::new(DecodeField::Variables, reason))?;

    serde_json::from_str(&text)
        .map_err(|e| DecodeError::new(DecodeField::Variables, DecodeFailure::Json(e)))
}

fn decode_headers(query: Option<&str>) -> Result<Vec<Header>, DecodeError> {
    let Some(query) = query else {
        return Ok(Vec::new());
    };

    form_urlencoded::parse(query.as_bytes())
        .map(|(name, value)| {
            let value = urlencoding::decode(&value).map_err(|e| {
                DecodeError::new(DecodeField::Headers, DecodeFailure::Percent(e.to_string()))
            })?;
            Ok(Header::new(name.into_owned(), value.into_owned()))
        })
        .collect()
}

/// Decodes path parts back into a request.
///
/// Every field failure is reported as a [`DecodeError`] naming the field.
pub fn decode(parts: &EncodedRequestPath) -> Result<DecodedRequest, DecodeError> {
    let method = decode_method(parts.method.as_deref())?;

    let url = match parts.encoded_url.as_deref() {
        Some(encoded) => url_safe::decode(encoded)
            .map_err(|reason| DecodeError::new(DecodeField::Url, reason))?,
        None => String::new(),
    };

    Ok(DecodedRequest {
        method,
        url,
        body: decode_body(parts.encoded_body.as_deref())?,
        headers: decode_headers(parts.query.as_deref())?,
        variables: decode_variables(parts.encoded_variables.as_deref())?,
    })
}

/// Like [`decode`], but a broken variable segment yields an empty list.
///
/// URL, body, method and header failures are still reported.
pub fn decode_lenient(parts: &EncodedRequestPath) -> Result<DecodedRequest, DecodeError> {
    match decode(parts) {
        Err(err) if err.field == DecodeField::Variables => {
            log::warn!("Ignoring undecodable variables segment: {}", err.reason);
            let without_variables = EncodedRequestPath {
                encoded_variables: None,
                ..parts.clone()
            };
            decode(&without_variables)
        }
        other => other,
    }
}

/// Parses and decodes a full path, stripping `prefix` first.
pub fn decode_path(path: &str, prefix: &str) -> Result<DecodedRequest, DecodeError> {
    decode(&EncodedRequestPath::parse(path, prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spec() -> RequestSpec {
        RequestSpec::new(HttpMethod::POST, "https://api.x.com/u/{{id}}")
            .with_body(r#"{"n":1}"#)
            .with_header("X", "y")
    }

    #[test]
    fn test_encode_layout() {
        let spec = RequestSpec::new(HttpMethod::GET, "https://a.com");
        let path = encode(&spec, None);
        assert_eq!(path, format!("/GET/{}", url_safe::encode("https://a.com")));
    }

    #[test]
    fn test_encode_substitutes_url() {
        let vars = vec![Variable::new("1", "id", "42")];
        let parts = encode_parts(&sample_spec(), Some(vars.as_slice()));
        assert_eq!(
            url_safe::decode(parts.encoded_url.as_deref().unwrap()).unwrap(),
            "https://api.x.com/u/42"
        );
    }

    #[test]
    fn test_encode_wraps_body_as_json_string() {
        let parts = encode_parts(&sample_spec(), None);
        let raw = url_safe::decode(parts.encoded_body.as_deref().unwrap()).unwrap();
        assert_eq!(raw, r#""{\"n\":1}""#);
    }

    #[test]
    fn test_encode_empty_body_placeholder_with_variables() {
        let spec = RequestSpec::new(HttpMethod::GET, "https://a.com");
        let parts = encode_parts(&spec, Some(&[][..]));
        assert_eq!(parts.encoded_body.as_deref(), Some("IiI="));
        assert_eq!(parts.encoded_variables.as_deref(), Some("W10="));

        let decoded = decode(&parts).unwrap();
        assert_eq!(decoded.body_text(), "");
        assert!(decoded.variables.is_empty());
    }

    #[test]
    fn test_encode_headers_skip_empty_and_double_encode() {
        let spec = RequestSpec::new(HttpMethod::GET, "https://a.com")
            .with_header("Authorization", "Bearer a/b")
            .with_header("", "orphan")
            .with_header("X-Empty", "");

        let parts = encode_parts(&spec, None);
        assert_eq!(parts.query.as_deref(), Some("Authorization=Bearer%2520a%252Fb"));
    }

    #[test]
    fn test_scenario_round_trip() {
        let vars = vec![Variable::new("1", "id", "42")];
        let spec = sample_spec();

        let decoded = decode_path(&encode(&spec, Some(vars.as_slice())), "").unwrap();

        assert_eq!(decoded.method, HttpMethod::POST);
        assert_eq!(decoded.url, "https://api.x.com/u/42");
        assert_eq!(decoded.body, Value::String(r#"{"n":1}"#.to_string()));
        assert!(decoded.headers.contains(&Header::new("X", "y")));
        assert_eq!(decoded.variables, vars);
    }

    #[test]
    fn test_decode_defaults() {
        let decoded = decode(&EncodedRequestPath::default()).unwrap();
        assert_eq!(decoded.method, HttpMethod::GET);
        assert_eq!(decoded.url, "");
        assert_eq!(decoded.body_text(), "");
        assert!(decoded.headers.is_empty());
        assert!(decoded.variables.is_empty());
    }

    #[test]
    fn test_decode_method_is_case_insensitive() {
        let parts = EncodedRequestPath {
            method: Some("post".to_string()),
            ..Default::default()
        };
        assert_eq!(decode(&parts).unwrap().method, HttpMethod::POST);
    }

    #[test]
    fn test_decode_raw_json_body_yields_parsed_value() {
        let parts = EncodedRequestPath {
            encoded_body: Some(url_safe::encode(r#"{"name": "John", "age": 30}"#)),
            ..Default::default()
        };
        let decoded = decode(&parts).unwrap();
        assert_eq!(decoded.body, json!({"name": "John", "age": 30}));
        assert_eq!(decoded.body_text(), r#"{"name":"John","age":30}"#);
    }

    #[test]
    fn test_decode_plain_text_body() {
        let parts = EncodedRequestPath {
            encoded_body: Some(url_safe::encode("plain text body")),
            ..Default::default()
        };
        assert_eq!(decode(&parts).unwrap().body_text(), "plain text body");
    }

    #[test]
    fn test_decode_variables_without_ids() {
        let parts = EncodedRequestPath {
            encoded_variables: Some(url_safe::encode(r#"[{"name": "id", "value": "123"}]"#)),
            ..Default::default()
        };
        let decoded = decode(&parts).unwrap();
        assert_eq!(decoded.variables, vec![Variable::new("", "id", "123")]);
    }

    #[test]
    fn test_decode_headers_in_order() {
        let parts = EncodedRequestPath {
            query: Some("Content-Type=application%252Fjson&Authorization=Bearer%2520token123".to_string()),
            ..Default::default()
        };
        let decoded = decode(&parts).unwrap();
        assert_eq!(
            decoded.headers,
            vec![
                Header::new("Content-Type", "application/json"),
                Header::new("Authorization", "Bearer token123"),
            ]
        );
    }

    #[test]
    fn test_decode_errors_name_the_field() {
        let bad_url = EncodedRequestPath {
            encoded_url: Some("***".to_string()),
            ..Default::default()
        };
        assert_eq!(decode(&bad_url).unwrap_err().field, DecodeField::Url);

        let bad_body = EncodedRequestPath {
            encoded_body: Some("***".to_string()),
            ..Default::default()
        };
        assert_eq!(decode(&bad_body).unwrap_err().field, DecodeField::Body);

        let bad_method = EncodedRequestPath {
            method: Some("BREW".to_string()),
            ..Default::default()
        };
        assert_eq!(decode(&bad_method).unwrap_err().field, DecodeField::Method);

        let bad_vars = EncodedRequestPath {
            encoded_variables: Some(url_safe::encode("invalid json")),
            ..Default::default()
        };
        let err = decode(&bad_vars).unwrap_err();
        assert_eq!(err.field, DecodeField::Variables);
        assert!(matches!(err.reason, DecodeFailure::Json(_)));
    }

    #[test]
    fn test_decode_lenient_drops_broken_variables_only() {
        let parts = EncodedRequestPath {
            encoded_url: Some(url_safe::encode("https://a.com")),
            encoded_variables: Some(url_safe::encode("invalid json")),
            ..Default::default()
        };
        let decoded = decode_lenient(&parts).unwrap();
        assert_eq!(decoded.url, "https://a.com");
        assert!(decoded.variables.is_empty());

        let broken_url = EncodedRequestPath {
            encoded_url: Some("***".to_string()),
            ..parts
        };
        assert_eq!(decode_lenient(&broken_url).unwrap_err().field, DecodeField::Url);
    }
}
