//! Data models for requests, responses and variables.
//!
//! This module contains the core data structures shared by the codec, the
//! substitution engine, the code generator and the executor.

pub mod request;
pub mod response;
pub mod variable;

pub use request::{Header, HttpMethod, RequestSpec, UnknownMethod};
pub use response::RestResponse;
pub use variable::Variable;
