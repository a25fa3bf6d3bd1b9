//! # Loader Adapters
//!
//! Implementations of the Load port for different configuration sources.
//!
//! Available adapters:
//! - `ArrayLoader` - in-memory JSON value
//! - `FileLoader` - JSON file on disk
//!
//! Both accept the same two source shapes and normalize them to a flat,
//! ordered list of records:
//!
//! ```text
//! [ {record}, {record}, ... ]                      plain list
//!
//! { "frontend": [ {record}, ... ],                 location-keyed map;
//!   "backend":  [ {record}, ... ] }                the key is injected as
//!                                                  "location" where absent
//! ```

mod array;
mod file;

pub use array::ArrayLoader;
pub use file::FileLoader;

use crate::core::{ConfigRecord, ConfigValue};
use crate::ports::{LoadError, LoadResult};
use serde_json::Value;

/// Normalize a parsed source value into an ordered list of records.
///
/// A top-level object whose values are all arrays is treated as the
/// location-keyed form; any other object is a single record.
pub(crate) fn normalize(value: &Value) -> LoadResult<Vec<ConfigRecord>> {
    match value {
        Value::Array(entries) => collect_records(entries, None),
        Value::Object(map) if map.values().all(Value::is_array) && !map.is_empty() => {
            let mut records = Vec::new();
            for (location_tag, entries) in map {
                if let Some(list) = entries.as_array() {
                    records.extend(collect_records(list, Some(location_tag))?);
                }
            }
            Ok(records)
        }
        Value::Object(map) => Ok(vec![ConfigRecord::from_map(map.clone())]),
        other => Err(LoadError::UnexpectedShape(format!(
            "expected an array or object, found {}",
            kind_of(other)
        ))),
    }
}

fn collect_records(entries: &[Value], location_tag: Option<&str>) -> LoadResult<Vec<ConfigRecord>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(map) => {
                let mut record = ConfigRecord::from_map(map.clone());
                if let Some(tag) = location_tag {
                    if !record.contains_key("location") {
                        record.insert("location", ConfigValue::from(tag));
                    }
                }
                Ok(record)
            }
            other => Err(LoadError::MalformedRecord {
                index,
                reason: format!("found {}", kind_of(other)),
            }),
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
