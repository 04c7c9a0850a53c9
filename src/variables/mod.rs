//! Variables module
//!
//! Template substitution for `{{name}}` tokens and the persistence contract
//! for a user's variable list.

pub mod store;
pub mod substitution;

pub use store::{JsonFileVariableStore, MemoryVariableStore, StoreError, VariableStore};
pub use substitution::{
    count_variables, extract_variable_names, has_variables, substitute, substitute_json,
    substitute_opt, substitute_request, unresolved_variables,
};
