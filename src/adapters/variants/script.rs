//! # Script Asset
//!
//! A JavaScript resource.
//!
//! Beyond the required keys, the constructor reads:
//! - `dependencies`: handles of scripts that must load first
//! - `version`: cache-busting version string
//! - `in_footer`: whether the script renders before `</body>`

use crate::core::{ConfigRecord, Location};
use crate::ports::{Asset, Constructor};

/// A JavaScript asset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptAsset {
    handle: String,
    url: String,
    location: Location,
    dependencies: Vec<String>,
    version: Option<String>,
    in_footer: bool,
    config: ConfigRecord,
}

impl ScriptAsset {
    /// Build a script from the four validated factory inputs.
    ///
    /// Optional extras are read from the config record; unknown keys are
    /// kept in the record untouched.
    pub fn from_config(
        handle: String,
        url: String,
        location: Location,
        config: ConfigRecord,
    ) -> Self {
        let dependencies = config.get_str_list("dependencies").unwrap_or_default();
        let version = config.get_str("version").map(str::to_owned);
        let in_footer = config.get_bool("in_footer").unwrap_or(false);

        Self {
            handle,
            url,
            location,
            dependencies,
            version,
            in_footer,
            config,
        }
    }

    /// Registry constructor for this variant.
    pub fn constructor() -> Constructor {
        Box::new(|handle, url, location, config| {
            Box::new(Self::from_config(handle, url, location, config))
        })
    }

    /// Handles of scripts that must load before this one.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Cache-busting version, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// True if the script renders in the footer.
    pub fn in_footer(&self) -> bool {
        self.in_footer
    }
}

impl Asset for ScriptAsset {
    fn handle(&self) -> &str {
        &self.handle
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn location(&self) -> Location {
        self.location
    }

    fn config(&self) -> &ConfigRecord {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_script_reads_extras_from_config() {
        let config = ConfigRecord::new()
            .with("dependencies", json!(["jquery"]))
            .with("version", "1.2.0")
            .with("in_footer", true);

        let script = ScriptAsset::from_config(
            "app".to_string(),
            "app.js".to_string(),
            Location::Frontend,
            config,
        );

        assert_eq!(script.dependencies(), ["jquery".to_string()]);
        assert_eq!(script.version(), Some("1.2.0"));
        assert!(script.in_footer());
    }

    #[test]
    fn test_script_extras_default_when_absent() {
        let script = ScriptAsset::from_config(
            "app".to_string(),
            "app.js".to_string(),
            Location::Frontend,
            ConfigRecord::new(),
        );

        assert!(script.dependencies().is_empty());
        assert_eq!(script.version(), None);
        assert!(!script.in_footer());
    }

    #[test]
    fn test_script_keeps_full_config() {
        let config = ConfigRecord::new().with("custom", "anything");

        let script = ScriptAsset::from_config(
            "app".to_string(),
            "app.js".to_string(),
            Location::Backend,
            config,
        );

        assert_eq!(script.config().get_str("custom"), Some("anything"));
        assert_eq!(script.location(), Location::Backend);
    }
}
