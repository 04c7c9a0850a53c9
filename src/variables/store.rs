//! Per-user persistence of variable lists.
//!
//! The core only relies on the [`VariableStore`] contract: load a user's list,
//! replace it, or clear it. Two implementations are provided: an in-memory
//! store and a JSON file holding every user's list keyed by user id.

use crate::models::Variable;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Errors raised by variable stores.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io(std::io::Error),

    /// The variable list could not be serialized.
    Serialization(serde_json::Error),

    /// The store's internal lock was poisoned by a panicking writer.
    Poisoned,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "Variable storage error: {}", err),
            StoreError::Serialization(err) => {
                write!(f, "Variable serialization error: {}", err)
            }
            StoreError::Poisoned => write!(f, "Variable store lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Serialization(err) => Some(err),
            StoreError::Poisoned => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err)
    }
}

/// Persistence contract for a user's variables.
///
/// The user id is always passed explicitly; stores never look up a "current"
/// user on their own.
pub trait VariableStore {
    /// Loads the user's variables, dropping malformed entries.
    fn load(&self, user_id: &str) -> Result<Vec<Variable>, StoreError>;

    /// Replaces the user's variables.
    fn save(&self, variables: &[Variable], user_id: &str) -> Result<(), StoreError>;

    /// Removes the user's variables, leaving other users untouched.
    fn clear(&self, user_id: &str) -> Result<(), StoreError>;
}

/// Volatile store, mainly for tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemoryVariableStore {
    inner: Mutex<HashMap<String, Vec<Variable>>>,
}

impl MemoryVariableStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VariableStore for MemoryVariableStore {
    fn load(&self, user_id: &str) -> Result<Vec<Variable>, StoreError> {
        let inner = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.get(user_id).cloned().unwrap_or_default())
    }

    fn save(&self, variables: &[Variable], user_id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        inner.insert(user_id.to_string(), variables.to_vec());
        Ok(())
    }

    fn clear(&self, user_id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        inner.remove(user_id);
        Ok(())
    }
}

/// Store backed by a single JSON document of the form `{ "<userId>": [Variable, ...] }`.
///
/// A missing file is an empty store. A file that cannot be parsed is treated
/// as empty as well (with a warning) and is overwritten on the next save.
#[derive(Debug, Clone)]
pub struct JsonFileVariableStore {
    path: PathBuf,
}

impl JsonFileVariableStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => {
                log::warn!(
                    "Variable file {} is not a JSON object, ignoring its content",
                    self.path.display()
                );
                Ok(Map::new())
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse variable file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(Map::new())
            }
        }
    }

    fn write_all(&self, all: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(all)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Accepts only objects whose `id`, `name` and `value` are all strings.
fn parse_stored_variable(item: &Value) -> Option<Variable> {
    let obj = item.as_object()?;
    Some(Variable {
        id: obj.get("id")?.as_str()?.to_string(),
        name: obj.get("name")?.as_str()?.to_string(),
        value: obj.get("value")?.as_str()?.to_string(),
    })
}

impl VariableStore for JsonFileVariableStore {
    fn load(&self, user_id: &str) -> Result<Vec<Variable>, StoreError> {
        let all = self.read_all()?;

        let items = match all.get(user_id) {
            Some(Value::Array(items)) => items,
            _ => return Ok(Vec::new()),
        };

        let variables: Vec<Variable> = items.iter().filter_map(parse_stored_variable).collect();
        if variables.len() != items.len() {
            log::debug!(
                "Dropped {} malformed variable entries for user {}",
                items.len() - variables.len(),
                user_id
            );
        }

        Ok(variables)
    }

    fn save(&self, variables: &[Variable], user_id: &str) -> Result<(), StoreError> {
        let mut all = self.read_all()?;
        all.insert(user_id.to_string(), serde_json::to_value(variables)?);
        self.write_all(&all)
    }

    fn clear(&self, user_id: &str) -> Result<(), StoreError> {
        let mut all = self.read_all()?;
        if all.remove(user_id).is_some() {
            self.write_all(&all)?;
        }
        Ok(())
    }
}
