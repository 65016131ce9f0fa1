// ── Per-interface configuration ──

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Configuration record for one interface.
///
/// The schema belongs to whoever edits it (VLAN, CBS, TAS sections and so
/// on); the core only stores and compares whole values. `null` is never
/// held: it is normalized to the empty configuration `{}` on the way in,
/// so consumers always receive a well-formed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct NicConfig(Value);

impl NicConfig {
    /// Wrap a JSON value. `null` becomes `{}`.
    pub fn new(value: Value) -> Self {
        match value {
            Value::Null => Self::empty(),
            other => Self(other),
        }
    }

    /// The default configuration shown for interfaces with nothing stored.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// `true` for `{}` (and only for `{}`).
    pub fn is_empty(&self) -> bool {
        matches!(&self.0, Value::Object(map) if map.is_empty())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Top-level field lookup for object-shaped configurations.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(field))
    }
}

impl Default for NicConfig {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for NicConfig {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<NicConfig> for Value {
    fn from(config: NicConfig) -> Self {
        config.0
    }
}
