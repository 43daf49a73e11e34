//! Merged extension config value

use serde::Serialize;
use serde_json::{Map, Value};

/// The config object a specification handler produces.
///
/// Built by merging mappings in order; a key from a later mapping replaces
/// the same key from an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExtensionConfig(Map<String, Value>);

impl ExtensionConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a mapping into this config, overriding existing keys
    pub fn merge(&mut self, other: Map<String, Value>) {
        self.0.extend(other);
    }

    /// Builder-style [`merge`](Self::merge)
    pub fn merged(mut self, other: Map<String, Value>) -> Self {
        self.merge(other);
        self
    }

    /// Insert a single top-level key
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Get a top-level value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into a JSON object value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for ExtensionConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
