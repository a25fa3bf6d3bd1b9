//! # Variant Registry
//!
//! The explicit mapping from a type tag to an asset constructor.
//!
//! New variants are added by registering a constructor under a tag - the
//! factory itself never changes. Registration is plugin-style and open,
//! which is why the factory keeps a conformance check on every constructed
//! instance: nothing here guarantees a registered constructor behaves.

use crate::ports::Constructor;
use std::collections::HashMap;

use crate::adapters::variants::{ScriptAsset, StyleAsset};

/// Maps type tags to asset constructors.
#[derive(Default)]
pub struct Registry {
    constructors: HashMap<String, Constructor>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in variants registered under
    /// their type names: `"ScriptAsset"` and `"StyleAsset"`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("ScriptAsset", ScriptAsset::constructor());
        registry.register("StyleAsset", StyleAsset::constructor());
        registry
    }

    /// Register a constructor under a type tag.
    ///
    /// An existing entry under the same tag is replaced.
    pub fn register(&mut self, tag: impl Into<String>, constructor: Constructor) {
        self.constructors.insert(tag.into(), constructor);
    }

    /// Look up the constructor for a tag.
    pub fn get(&self, tag: &str) -> Option<&Constructor> {
        self.constructors.get(tag)
    }

    /// True if a constructor is registered under the tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// True if no variants are registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
