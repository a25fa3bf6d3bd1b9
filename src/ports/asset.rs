//! # Asset Port
//!
//! The capability contract a constructed variant must satisfy, the
//! constructor shape the registry stores, and the factory's error taxonomy.

use crate::core::{ConfigRecord, Location};
use thiserror::Error;

/// Name of the contract, used in error messages.
pub const ASSET_CONTRACT: &str = "Asset";

/// The capability contract of every constructed asset.
///
/// A conforming instance reflects the configuration it was built from: its
/// handle, url, and location echo the validated inputs, and the full
/// original config record stays reachable so callers (and the variant
/// itself) can read optional fields beyond the required three.
pub trait Asset: std::fmt::Debug {
    /// The unique logical name of this asset.
    fn handle(&self) -> &str;

    /// The resource location (path or URL).
    fn url(&self) -> &str;

    /// The deployment context this asset belongs to.
    fn location(&self) -> Location;

    /// The full configuration record this asset was built from.
    fn config(&self) -> &ConfigRecord;
}

/// A registry entry: builds an asset from the four validated inputs.
///
/// The argument order is fixed: handle, url, location, full config record.
/// Constructors may read any extra keys from the record but must not need
/// anything beyond it.
pub type Constructor = Box<dyn Fn(String, String, Location, ConfigRecord) -> Box<dyn Asset> + Send + Sync>;

/// Errors raised by asset construction.
///
/// Both are non-retryable caller errors, raised synchronously before any
/// asset is returned. There is no partial-failure state: either a fully
/// conforming asset comes back, or nothing does.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FactoryError {
    /// A required configuration key is structurally absent.
    #[error("the given config key \"{key}\" is missing")]
    MissingArgument {
        /// The missing key.
        key: String,
    },

    /// The resolved type tag did not yield a conforming asset - either it
    /// is unknown to the registry, or the constructed instance failed to
    /// echo the validated inputs.
    #[error("the given type \"{type_tag}\" does not satisfy the {expected} contract")]
    InvalidArgument {
        /// The offending type tag.
        type_tag: String,
        /// The contract name the tag was expected to satisfy.
        expected: &'static str,
    },
}

impl FactoryError {
    pub(crate) fn missing(key: &str) -> Self {
        FactoryError::MissingArgument { key: key.to_string() }
    }

    pub(crate) fn invalid(type_tag: &str) -> Self {
        FactoryError::InvalidArgument {
            type_tag: type_tag.to_string(),
            expected: ASSET_CONTRACT,
        }
    }
}

/// Result type for factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_names_the_key() {
        let err = FactoryError::missing("handle");
        assert_eq!(err.to_string(), "the given config key \"handle\" is missing");
    }

    #[test]
    fn test_invalid_argument_names_tag_and_contract() {
        let err = FactoryError::invalid("NotAnAsset");
        assert_eq!(
            err.to_string(),
            "the given type \"NotAnAsset\" does not satisfy the Asset contract"
        );
    }
}
