//! # Load Port
//!
//! The contract configuration loaders implement.
//!
//! Loaders turn an external source (a file, an in-memory value) into the
//! config records the factory consumes. They perform no validation beyond
//! shape - missing required keys surface later, at `create` time.

use crate::core::ConfigRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Produces configuration records from some source.
///
/// The source is held by the implementing adapter; `load` is repeatable
/// and side-effect-free apart from reading the source.
pub trait Load {
    /// Load and normalize the source into an ordered list of records.
    fn load(&self) -> LoadResult<Vec<ConfigRecord>>;
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The configuration file does not exist or cannot be read.
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    /// The source content is not valid JSON.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry in the source is not a record object.
    #[error("config entry {index} is not an object ({reason})")]
    MalformedRecord {
        /// Zero-based position of the offending entry.
        index: usize,
        /// Short description of what was found instead.
        reason: String,
    },

    /// The top-level source shape is neither an array of records nor a
    /// location-keyed map of record lists.
    #[error("unexpected config shape: {0}")]
    UnexpectedShape(String),
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;
