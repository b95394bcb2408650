//! Operation input values.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Member values of one operation call, keyed by member name.
///
/// A member is unset when it is absent or holds `null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Input {
    values: BTreeMap<String, Value>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an input from a JSON object.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                values: map.into_iter().collect(),
            }),
            Value::Null => Ok(Self::default()),
            _ => Err(Error::invalid_config("operation input must be a JSON object")),
        }
    }

    /// Serializes any value into an input.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| Error::invalid_config(format!("failed to serialize input: {e}")))?;
        Self::from_json(value)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    pub fn has_been_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name).filter(|v| !v.is_null())
    }

    /// Member names present in the map, `null` values included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Set members in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl From<serde_json::Map<String, Value>> for Input {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self {
            values: map.into_iter().collect(),
        }
    }
}
