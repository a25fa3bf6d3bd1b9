//! # Adapters
//!
//! Swappable implementations of port traits.
//!
//! This is where the hexagonal architecture meets reality:
//! - Variant adapters: the built-in `ScriptAsset` and `StyleAsset`
//! - Loader adapters: `ArrayLoader` (in-memory), `FileLoader` (JSON file)
//!
//! Variants satisfy the `Asset` port and can be replaced or extended
//! through the registry. Loaders satisfy the `Load` port and can be
//! swapped without touching the factory.

pub mod loader;
pub mod variants;
