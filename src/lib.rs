//! # Asset Forge
//!
//! > Validated construction for front-end assets
//!
//! Asset Forge turns configuration records into typed front-end assets
//! (scripts and styles). It validates required fields, resolves the
//! requested variant through an explicit registry, constructs the asset,
//! and verifies the result honors the asset contract.
//!
//! ## Philosophy
//!
//! - **Registry over reflection** - variants are registered, never guessed
//! - **All-or-nothing** - a record yields a conforming asset or an error
//! - **Extra keys ride along** - variants read their own optional fields
//! - **Pure core, swappable adapters** - hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ASSET FORGE                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  CORE (plain data, no I/O)                                  │
//! │    ConfigRecord, Location                                   │
//! │                                                             │
//! │  PORTS (trait contracts)                                    │
//! │    Asset, Constructor, Load                                 │
//! │                                                             │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Variants: ScriptAsset, StyleAsset                        │
//! │    Loaders: ArrayLoader, FileLoader                         │
//! │                                                             │
//! │  ENGINE (orchestration)                                     │
//! │    Registry, AssetFactory - the main entry point            │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use asset_forge::{Asset, AssetFactory, ConfigRecord, Location};
//!
//! let factory = AssetFactory::default();
//!
//! let record = ConfigRecord::new()
//!     .with("type", "ScriptAsset")
//!     .with("url", "app.js")
//!     .with("handle", "app");
//!
//! let asset = factory.create(&record).unwrap();
//!
//! assert_eq!(asset.handle(), "app");
//! assert_eq!(asset.location(), Location::Frontend);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - plain data, no I/O
/// Contains: ConfigRecord, Location
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Asset, Constructor, Load, error taxonomies
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: variants, loader submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: Registry, AssetFactory
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{ConfigRecord, ConfigValue, Location};

// Port traits & errors
pub use crate::ports::{Asset, Constructor, FactoryError, FactoryResult, Load, LoadError, LoadResult};

// Adapters
pub use crate::adapters::loader::{ArrayLoader, FileLoader};
pub use crate::adapters::variants::{ScriptAsset, StyleAsset};

// Engine
pub use crate::engine::{AssetFactory, Registry};
