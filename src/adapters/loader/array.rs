//! # Array Loader
//!
//! Loads configuration records from an in-memory JSON value.
//!
//! Good for:
//! - Configuration assembled in code
//! - Testing
//! - Values already parsed by another subsystem

use super::normalize;
use crate::core::ConfigRecord;
use crate::ports::{Load, LoadResult};
use serde_json::Value;

/// Loader over an in-memory JSON value.
pub struct ArrayLoader {
    source: Value,
}

impl ArrayLoader {
    /// Wrap a parsed JSON value as a loader source.
    pub fn new(source: Value) -> Self {
        Self { source }
    }
}

impl Load for ArrayLoader {
    fn load(&self) -> LoadResult<Vec<ConfigRecord>> {
        let records = normalize(&self.source)?;
        log::debug!("loaded {} record(s) from in-memory value", records.len());
        Ok(records)
    }
}
