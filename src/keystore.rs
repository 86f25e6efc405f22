//! Typed key/value store for raw solver parameters.
//!
//! The store has no domain knowledge: it maps flat string keys to typed
//! raw values and reports presence per lookup. Missing keys are never
//! errors at this layer; only the resolver decides which keys are
//! required.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// A raw parameter value as supplied by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free-form string value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// Flat associative store from parameter key to typed raw value.
#[derive(Debug, Clone, Default)]
pub struct KeyStore {
    entries: HashMap<String, Value>,
}

impl KeyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value under `key`.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Look up a string value. Absent keys and non-string values yield `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(Value::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Look up an integer value. No float-to-int coercion is performed.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(Value::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Look up a float value. Integer values are coerced to float, since
    /// parameter files routinely write `1` for `1.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.entries.get(key) {
            Some(Value::Float(v)) => Some(*v),
            Some(Value::Int(v)) => Some(*v as f64),
            _ => None,
        }
    }

    /// Whether any value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a store from a flat TOML parameter file.
    ///
    /// Only top-level string, integer and float entries are accepted;
    /// nested tables or other value kinds are rejected.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ParamFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let table: toml::Table = toml::from_str(&contents).map_err(|e| Error::ParamFileParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut store = Self::new();
        for (key, value) in table {
            let value = match value {
                toml::Value::String(s) => Value::Str(s),
                toml::Value::Integer(v) => Value::Int(v),
                toml::Value::Float(v) => Value::Float(v),
                _ => return Err(Error::UnsupportedValue { key }),
            };
            store.entries.insert(key, value);
        }
        Ok(store)
    }
}
