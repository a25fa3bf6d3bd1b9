//! # Ports
//!
//! Trait contracts the engine and adapters meet in the middle on.
//!
//! Contains:
//! - `Asset` - the capability contract every constructed variant satisfies
//! - `Constructor` - the registry entry type producing assets
//! - `Load` - the contract configuration loaders implement
//!
//! Errors live next to the port they belong to: `FactoryError` with the
//! asset contract, `LoadError` with the loader contract.

mod asset;
mod load;

pub use asset::{Asset, Constructor, FactoryError, FactoryResult, ASSET_CONTRACT};
pub use load::{Load, LoadError, LoadResult};
