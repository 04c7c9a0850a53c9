//! Code generation for shared requests.
//!
//! Renders a request as a runnable snippet in one of eight targets. Each
//! target is a pure renderer function registered in a strategy table keyed by
//! [`Language`]; [`generate`] looks the target up by its id and falls back to
//! a placeholder comment for ids it does not know.

pub mod csharp;
pub mod curl;
pub mod go;
pub mod java;
pub mod javascript;
pub mod nodejs;
pub mod python;

use crate::models::{Header, HttpMethod};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Supported code generation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Curl,
    /// Browser `fetch()`
    JavascriptFetch,
    /// Browser `XMLHttpRequest`
    JavascriptXhr,
    /// Node.js `http`/`https` modules
    Nodejs,
    /// Python `requests`
    Python,
    /// Java `HttpURLConnection`
    Java,
    /// C# `HttpWebRequest`
    Csharp,
    /// Go `net/http`
    Go,
}

impl Language {
    /// Returns the identifier used in settings and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Curl => "curl",
            Language::JavascriptFetch => "javascript-fetch",
            Language::JavascriptXhr => "javascript-xhr",
            Language::Nodejs => "nodejs",
            Language::Python => "python",
            Language::Java => "java",
            Language::Csharp => "csharp",
            Language::Go => "go",
        }
    }

    /// Returns a human readable name for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Curl => "cURL",
            Language::JavascriptFetch => "JavaScript - Fetch",
            Language::JavascriptXhr => "JavaScript - XHR",
            Language::Nodejs => "Node.js",
            Language::Python => "Python - Requests",
            Language::Java => "Java",
            Language::Csharp => "C#",
            Language::Go => "Go",
        }
    }

    /// Returns all targets in display order.
    pub fn all() -> Vec<Language> {
        RENDERERS.iter().map(|(language, _)| *language).collect()
    }

    fn renderer(&self) -> Renderer {
        RENDERERS
            .iter()
            .find(|(language, _)| language == self)
            .map(|(_, renderer)| *renderer)
            .unwrap_or(curl::render)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Returned when a language id names no known target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language '{}' is not supported", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RENDERERS
            .iter()
            .map(|(language, _)| *language)
            .find(|language| language.id() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Everything a renderer needs, already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInput<'a> {
    pub method: HttpMethod,
    pub url: &'a str,
    /// Flattened headers: last value wins, first position kept.
    pub headers: IndexMap<String, String>,
    /// The body, present only when the method allows one and it is non-empty.
    pub body: Option<&'a str>,
}

impl<'a> RenderInput<'a> {
    pub fn new(method: HttpMethod, url: &'a str, body: &'a str, headers: &[Header]) -> Self {
        let mut flattened = IndexMap::new();
        for header in headers {
            flattened.insert(header.name.clone(), header.value.clone());
        }

        let body = (method.allows_body() && !body.is_empty()).then_some(body);

        Self {
            method,
            url,
            headers: flattened,
            body,
        }
    }

    /// The body parsed as JSON, if there is a body and it is valid JSON.
    pub fn json_body(&self) -> Option<Value> {
        self.body.and_then(|body| serde_json::from_str(body).ok())
    }
}

/// A pure function rendering one target.
pub type Renderer = fn(&RenderInput) -> String;

const RENDERERS: [(Language, Renderer); 8] = [
    (Language::Curl, curl::render),
    (Language::JavascriptFetch, javascript::render_fetch),
    (Language::JavascriptXhr, javascript::render_xhr),
    (Language::Nodejs, nodejs::render),
    (Language::Python, python::render),
    (Language::Java, java::render),
    (Language::Csharp, csharp::render),
    (Language::Go, go::render),
];

/// Renders the request for a known target.
pub fn generate_for(
    language: Language,
    method: HttpMethod,
    url: &str,
    body: &str,
    headers: &[Header],
) -> String {
    let input = RenderInput::new(method, url, body, headers);
    (language.renderer())(&input)
}

/// Renders the request for the target named by `language`.
///
/// Unknown ids produce a placeholder comment instead of an error.
///
/// # Examples
///
/// ```
/// use rest_share::codegen::generate;
/// use rest_share::models::{Header, HttpMethod};
///
/// let code = generate(
///     HttpMethod::POST,
///     "https://api.example.com/users",
///     r#"{"a":1}"#,
///     &[Header::new("Content-Type", "application/json")],
///     "curl",
/// );
/// assert!(code.starts_with("curl -X POST \"https://api.example.com/users\""));
/// assert!(code.contains("-d '{\"a\":1}'"));
///
/// let code = generate(HttpMethod::GET, "https://a.com", "", &[], "rust");
/// assert_eq!(code, "// Code generation for rust not implemented yet");
/// ```
pub fn generate(
    method: HttpMethod,
    url: &str,
    body: &str,
    headers: &[Header],
    language: &str,
) -> String {
    match language.parse::<Language>() {
        Ok(language) => generate_for(language, method, url, body, headers),
        Err(UnknownLanguage(id)) => {
            log::debug!("No code generator registered for '{}'", id);
            format!("// Code generation for {} not implemented yet", id)
        }
    }
}

/// Double-quoted string literal with JSON escapes, valid in JS, Java, C#,
/// Python and Go.
pub(crate) fn quoted(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Single-quoted JavaScript string literal.
pub(crate) fn single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_ids_round_trip() {
        for language in Language::all() {
            assert_eq!(language.id().parse::<Language>(), Ok(language));
        }
        assert_eq!(Language::all().len(), 8);
    }

    #[test]
    fn test_language_labels() {
        assert_eq!(Language::Curl.label(), "cURL");
        assert_eq!(Language::Nodejs.label(), "Node.js");
        let mut labels: Vec<&str> = Language::all().iter().map(|l| l.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn test_unknown_language() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("cobol".to_string()));
        assert_eq!(err.to_string(), "Language 'cobol' is not supported");
        assert_eq!(
            generate(HttpMethod::GET, "https://a.com", "", &[], "cobol"),
            "// Code generation for cobol not implemented yet"
        );
    }

    #[test]
    fn test_render_input_flattens_headers() {
        let headers = vec![
            Header::new("A", "1"),
            Header::new("B", "2"),
            Header::new("A", "3"),
        ];
        let input = RenderInput::new(HttpMethod::GET, "https://a.com", "", &headers);
        let flattened: Vec<_> = input.headers.iter().collect();
        assert_eq!(
            flattened,
            vec![
                (&"A".to_string(), &"3".to_string()),
                (&"B".to_string(), &"2".to_string())
            ]
        );
    }

    #[test]
    fn test_render_input_body_policy() {
        let get = RenderInput::new(HttpMethod::GET, "u", "{}", &[]);
        assert_eq!(get.body, None);

        let delete = RenderInput::new(HttpMethod::DELETE, "u", "{}", &[]);
        assert_eq!(delete.body, Some("{}"));

        let empty = RenderInput::new(HttpMethod::POST, "u", "", &[]);
        assert_eq!(empty.body, None);
    }

    #[test]
    fn test_every_target_renders_url() {
        for language in Language::all() {
            let code = generate_for(
                language,
                HttpMethod::GET,
                "https://api.example.com/users",
                "",
                &[],
            );
            assert!(
                code.contains("api.example.com"),
                "{} output lacks the host",
                language
            );
        }
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(quoted("a\"b\\c\nd"), r#""a\"b\\c\nd""#);
        assert_eq!(single_quoted("it's"), r"'it\'s'");
    }
}
