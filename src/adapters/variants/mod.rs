//! # Variant Adapters
//!
//! Built-in asset kinds constructible through the registry.
//!
//! Available variants:
//! - `ScriptAsset` - a JavaScript resource
//! - `StyleAsset` - a stylesheet resource
//!
//! Both capture the full config record they were built from, so optional
//! keys beyond their known extras remain reachable.

mod script;
mod style;

pub use script::ScriptAsset;
pub use style::StyleAsset;
