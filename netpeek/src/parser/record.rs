//! Flat output record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::session::Device;

/// Key of the device display name.
pub const DEVICE_KEY: &str = "device";

/// Key of the device address.
pub const IP_KEY: &str = "ip";

/// Key of the filter id the record was produced for.
pub const FIELD_KEY: &str = "field";

/// Key of the failure description in error records.
pub const ERROR_KEY: &str = "error";

/// One flat output record.
///
/// Parser records carry `device`, `ip` and `field`; a device that failed is
/// represented by a single record holding only `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Create an error record.
    pub fn error(description: impl Into<String>) -> Self {
        let mut record = Self::new();
        record.insert(ERROR_KEY, description.into());
        record
    }

    /// Insert a field, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Stamp the identity of the device and filter that produced this record.
    pub fn with_identity(self, device: &Device, filter_id: &str) -> Self {
        self.with(FIELD_KEY, filter_id)
            .with(DEVICE_KEY, device.hostname())
            .with(IP_KEY, device.host())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check if this is an error record.
    pub fn is_error(&self) -> bool {
        self.0.contains_key(ERROR_KEY)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl std::ops::Index<&str> for Record {
    type Output = Value;

    /// Returns `Value::Null` for absent keys, like `serde_json::Value` indexing.
    fn index(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&Value::Null)
    }
}
