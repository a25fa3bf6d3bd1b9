//! # Asset Factory
//!
//! The main construction entry point.
//!
//! `create` is a single validate-then-construct step:
//! - required keys are checked structurally
//! - the location is resolved (defaulting to frontend)
//! - the type tag is dispatched through the registry
//! - the constructed instance is verified against the Asset contract
//!
//! No caching, no I/O, no shared state. The factory borrows itself
//! immutably during `create`, so independent call sites need no
//! coordination.

use crate::core::{ConfigRecord, Location};
use crate::engine::Registry;
use crate::ports::{Asset, FactoryError, FactoryResult};

/// Configuration keys every record must carry.
const REQUIRED_KEYS: [&str; 3] = ["type", "url", "handle"];

/// Builds assets from configuration records.
pub struct AssetFactory {
    registry: Registry,
}

impl Default for AssetFactory {
    /// A factory over the built-in variants.
    fn default() -> Self {
        Self::new(Registry::with_defaults())
    }
}

impl AssetFactory {
    /// Create a factory over a custom registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// The registry this factory dispatches through.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register an additional variant on this factory's registry.
    pub fn register(&mut self, tag: impl Into<String>, constructor: crate::ports::Constructor) {
        self.registry.register(tag, constructor);
    }

    // ========================================================================
    // CREATE
    // ========================================================================

    /// Validate a configuration record and construct the asset it names.
    ///
    /// Fails with [`FactoryError::MissingArgument`] when any of `type`,
    /// `url`, `handle` is structurally absent, and with
    /// [`FactoryError::InvalidArgument`] when the type tag does not yield
    /// a conforming asset. Either a fully valid asset comes back or
    /// nothing does.
    pub fn create(&self, config: &ConfigRecord) -> FactoryResult<Box<dyn Asset>> {
        Self::validate(config)?;

        let location = Self::resolve_location(config);

        // Presence was just validated; coercion mirrors loosely-typed
        // config sources.
        let handle = config.coerce_str("handle").unwrap_or_default();
        let url = config.coerce_str("url").unwrap_or_default();
        let type_tag = config.coerce_str("type").unwrap_or_default();

        let constructor = self
            .registry
            .get(&type_tag)
            .ok_or_else(|| FactoryError::invalid(&type_tag))?;

        let asset = constructor(handle.clone(), url.clone(), location, config.clone());

        // The registry is openly extensible, so nothing upstream
        // guarantees the constructor honored its inputs.
        if asset.handle() != handle || asset.url() != url || asset.location() != location {
            return Err(FactoryError::invalid(&type_tag));
        }

        Ok(asset)
    }

    fn validate(config: &ConfigRecord) -> FactoryResult<()> {
        for key in REQUIRED_KEYS {
            if !config.contains_key(key) {
                return Err(FactoryError::missing(key));
            }
        }
        Ok(())
    }

    fn resolve_location(config: &ConfigRecord) -> Location {
        match config.get_str("location") {
            Some(tag) => Location::from_tag(tag).unwrap_or_else(|| {
                log::warn!("unrecognized location \"{tag}\", falling back to default");
                Location::default()
            }),
            None => Location::default(),
        }
    }

    // ========================================================================
    // DEPRECATED PASS-THROUGHS
    // ========================================================================

    /// Forward a file path to a [`FileLoader`](crate::adapters::loader::FileLoader)
    /// and return its records unchanged.
    #[deprecated(since = "0.1.0", note = "use adapters::loader::FileLoader::load")]
    pub fn create_from_file(
        path: impl AsRef<std::path::Path>,
    ) -> crate::ports::LoadResult<Vec<ConfigRecord>> {
        use crate::ports::Load;

        crate::adapters::loader::FileLoader::new(path).load()
    }

    /// Forward a raw value to an [`ArrayLoader`](crate::adapters::loader::ArrayLoader)
    /// and return its records unchanged.
    #[deprecated(since = "0.1.0", note = "use adapters::loader::ArrayLoader::load")]
    pub fn create_from_array(
        value: serde_json::Value,
    ) -> crate::ports::LoadResult<Vec<ConfigRecord>> {
        use crate::ports::Load;

        crate::adapters::loader::ArrayLoader::new(value).load()
    }
}
