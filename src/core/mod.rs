//! # Core
//!
//! Pure domain types - no I/O, no dispatch.
//!
//! Contains:
//! - `ConfigRecord` - the string-keyed configuration mapping
//! - `Location` - the deployment context of an asset

pub mod location;
pub mod record;

pub use location::Location;
pub use record::{ConfigRecord, ConfigValue};
