//! Request history records.
//!
//! Persisting the records is left to the caller; this module only defines
//! what a record holds and how it is derived from an execution.
//!
//! # Example
//!
//! ```
//! use rest_share::history::HistoryEntry;
//! use rest_share::models::{HttpMethod, RestResponse};
//!
//! let response = RestResponse::failure("Network error", 0);
//! let entry = HistoryEntry::record("https://a.com", HttpMethod::GET, &response, "", "/GET/x");
//! assert!(entry.is_error());
//! ```

pub mod models;

pub use models::HistoryEntry;
