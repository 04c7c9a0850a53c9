//! Splitting and joining of encoded request paths.
//!
//! Layout: `/<METHOD>/<encodedUrl>[/<encodedBody>][/<encodedVariables>][?<query>]`.
//! Segment positions are fixed; absent trailing segments are omitted.

use std::fmt;

/// The raw, still-encoded parts of a request path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedRequestPath {
    pub method: Option<String>,
    pub encoded_url: Option<String>,
    pub encoded_body: Option<String>,
    pub encoded_variables: Option<String>,
    /// Header query string without the leading `?`.
    pub query: Option<String>,
}

impl EncodedRequestPath {
    /// Splits a path such as `/POST/aHR0cA==/IiI=?X=y`.
    ///
    /// `prefix` is a route prefix (for example `/rest`) stripped before
    /// splitting; pass `""` when there is none. Empty segments count as absent.
    pub fn parse(path: &str, prefix: &str) -> Self {
        let (path_part, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        let trimmed_prefix = prefix.trim_end_matches('/');
        let path_part = if !trimmed_prefix.is_empty() {
            path_part
                .strip_prefix(trimmed_prefix)
                .unwrap_or(path_part)
        } else {
            path_part
        };

        let mut segments = path_part
            .trim_start_matches('/')
            .split('/')
            .map(|s| (!s.is_empty()).then(|| s.to_string()));

        let mut next = || segments.next().flatten();

        Self {
            method: next(),
            encoded_url: next(),
            encoded_body: next(),
            encoded_variables: next(),
            query: query.filter(|q| !q.is_empty()).map(|q| q.to_string()),
        }
    }

    /// Renders the path under a route prefix.
    pub fn to_path_with_prefix(&self, prefix: &str) -> String {
        format!("{}{}", prefix.trim_end_matches('/'), self)
    }
}

impl fmt::Display for EncodedRequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.method.as_deref().unwrap_or("GET"))?;
        for segment in [&self.encoded_url, &self.encoded_body, &self.encoded_variables]
            .into_iter()
            .flatten()
        {
            write!(f, "/{}", segment)?;
        }
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}
