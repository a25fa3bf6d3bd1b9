//! # Configuration Record
//!
//! The string-keyed mapping every asset is built from.
//!
//! A record is plain data: keys map to arbitrary JSON values, and the
//! factory only interprets the handful of keys it knows about (`type`,
//! `url`, `handle`, `location`). Everything else rides along untouched so
//! variant constructors can read their own optional fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An arbitrary configuration value.
pub type ConfigValue = Value;

/// A configuration record: string keys to arbitrary values.
///
/// Presence checks are structural - a key that maps to `null` or `""` is
/// still present. The record serializes transparently as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigRecord(Map<String, ConfigValue>);

impl ConfigRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a record from an existing JSON object map.
    pub fn from_map(map: Map<String, ConfigValue>) -> Self {
        Self(map)
    }

    /// Insert a key, returning the record for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Structural presence check - true even for `null` values.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Get a value as a string slice, if it is a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Get a value as a bool, if it is a JSON bool.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Get a value as a list of strings, skipping non-string elements.
    pub fn get_str_list(&self, key: &str) -> Option<Vec<String>> {
        self.0.get(key).and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
    }

    /// Coerce a value to its string form.
    ///
    /// Strings come back as-is; any other value is rendered as compact
    /// JSON. Mirrors loosely-typed config sources where `type` or `url`
    /// may arrive as non-string scalars.
    pub fn coerce_str(&self, key: &str) -> Option<String> {
        self.0.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Number of keys in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the record has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.0.iter()
    }

    /// Borrow the underlying JSON object map.
    pub fn as_map(&self) -> &Map<String, ConfigValue> {
        &self.0
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigRecord {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_presence_is_structural() {
        let record = ConfigRecord::new()
            .with("handle", json!(null))
            .with("url", "");

        assert!(record.contains_key("handle"));
        assert!(record.contains_key("url"));
        assert!(!record.contains_key("type"));
    }

    #[test]
    fn test_record_get_str() {
        let record = ConfigRecord::new().with("url", "app.js").with("count", 3);

        assert_eq!(record.get_str("url"), Some("app.js"));
        assert_eq!(record.get_str("count"), None);
    }

    #[test]
    fn test_record_coerce_str() {
        let record = ConfigRecord::new()
            .with("type", "ScriptAsset")
            .with("version", 2);

        assert_eq!(record.coerce_str("type").as_deref(), Some("ScriptAsset"));
        assert_eq!(record.coerce_str("version").as_deref(), Some("2"));
        assert_eq!(record.coerce_str("missing"), None);
    }

    #[test]
    fn test_record_str_list_skips_non_strings() {
        let record = ConfigRecord::new().with("dependencies", json!(["jquery", 1, "lodash"]));

        assert_eq!(
            record.get_str_list("dependencies"),
            Some(vec!["jquery".to_string(), "lodash".to_string()])
        );
    }

    #[test]
    fn test_record_roundtrips_as_json_object() {
        let record = ConfigRecord::new()
            .with("handle", "app")
            .with("url", "app.js");

        let text = serde_json::to_string(&record).unwrap();
        let back: ConfigRecord = serde_json::from_str(&text).unwrap();

        assert_eq!(back, record);
    }
}
