//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - The variant registry maps type tags to constructors
//! - The factory validates records and constructs assets

mod factory;
mod registry;

pub use factory::AssetFactory;
pub use registry::Registry;
