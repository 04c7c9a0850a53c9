//! User-scoped template variables.

use serde::{Deserialize, Serialize};

/// A named value usable inside `{{name}}` templates.
///
/// Identity is `id`. Keeping names unique within a user's set is up to the
/// caller; substitution resolves duplicates last-writer-wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    /// Stable identifier. Variable lists carried in shared links may omit it.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub value: String,
}

impl Variable {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a variable with a freshly generated id.
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), name, value)
    }

    /// Whether id, name and value are all non-empty.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && !self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_generates_id() {
        let var = Variable::named("host", "api.example.com");
        assert_eq!(var.id.len(), 36);
        assert!(var.is_well_formed());
    }

    #[test]
    fn test_missing_id_deserializes_empty() {
        let var: Variable = serde_json::from_str(r#"{"name": "id", "value": "123"}"#).unwrap();
        assert_eq!(var.id, "");
        assert_eq!(var.name, "id");
        assert!(!var.is_well_formed());
    }
}
