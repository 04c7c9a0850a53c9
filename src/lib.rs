//! Shareable, replayable HTTP requests.
//!
//! A request (method, URL, body, headers) plus the user's `{{name}}`
//! variables can be encoded into a path, pasted anywhere, decoded back,
//! rendered as code in eight targets, and executed.
//!
//! # Architecture
//!
//! - **models**: the request description, response shape and variables
//! - **variables**: `{{name}}` substitution and per-user variable stores
//! - **codec**: request ⇄ `/METHOD/<url>/<body>/<variables>?<headers>` path
//! - **validator**: URL checks for the request editor
//! - **codegen**: curl, fetch, XHR, Node.js, Python, Java, C# and Go snippets
//! - **executor**: sends requests with reqwest and reports the outcome
//! - **history**: the record kept for each execution
//! - **config**: settings loaded from the `"rest-client"` JSON key
//!
//! # Example
//!
//! ```
//! use rest_share::codec;
//! use rest_share::codegen;
//! use rest_share::models::{HttpMethod, RequestSpec, Variable};
//!
//! let spec = RequestSpec::new(HttpMethod::GET, "https://{{host}}/users")
//!     .with_header("Accept", "application/json");
//! let vars = vec![Variable::new("1", "host", "api.example.com")];
//!
//! let path = codec::encode(&spec, Some(vars.as_slice()));
//! let decoded = codec::decode_path(&path, "").unwrap();
//! assert_eq!(decoded.url, "https://api.example.com/users");
//!
//! let snippet = codegen::generate(
//!     decoded.method,
//!     &decoded.url,
//!     &decoded.body_text(),
//!     &decoded.headers,
//!     "curl",
//! );
//! assert!(snippet.contains("-H \"Accept: application/json\""));
//! ```

pub mod codec;
pub mod codegen;
pub mod config;
pub mod executor;
pub mod history;
pub mod models;
pub mod validator;
pub mod variables;

pub use codec::{decode, decode_lenient, decode_path, encode, DecodeError, DecodedRequest};
pub use codegen::{generate, generate_for, Language};
pub use config::{load_config, RestClientConfig};
pub use executor::{ExecutionConfig, RequestError, RequestExecutor};
pub use history::HistoryEntry;
pub use models::{Header, HttpMethod, RequestSpec, RestResponse, Variable};
pub use validator::{validate, validation_message, UrlValidationError};
pub use variables::{substitute, VariableStore};
