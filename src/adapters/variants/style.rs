//! # Style Asset
//!
//! A stylesheet resource.
//!
//! Beyond the required keys, the constructor reads:
//! - `dependencies`: handles of styles that must load first
//! - `version`: cache-busting version string
//! - `media`: the media query the stylesheet applies to (default `"all"`)
//! - `inline`: extra CSS rendered after the linked stylesheet

use crate::core::{ConfigRecord, Location};
use crate::ports::{Asset, Constructor};

/// A stylesheet asset.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleAsset {
    handle: String,
    url: String,
    location: Location,
    dependencies: Vec<String>,
    version: Option<String>,
    media: String,
    inline: Option<String>,
    config: ConfigRecord,
}

impl StyleAsset {
    /// Build a style from the four validated factory inputs.
    pub fn from_config(
        handle: String,
        url: String,
        location: Location,
        config: ConfigRecord,
    ) -> Self {
        let dependencies = config.get_str_list("dependencies").unwrap_or_default();
        let version = config.get_str("version").map(str::to_owned);
        let media = config
            .get_str("media")
            .map(str::to_owned)
            .unwrap_or_else(|| "all".to_string());
        let inline = config.get_str("inline").map(str::to_owned);

        Self {
            handle,
            url,
            location,
            dependencies,
            version,
            media,
            inline,
            config,
        }
    }

    /// Registry constructor for this variant.
    pub fn constructor() -> Constructor {
        Box::new(|handle, url, location, config| {
            Box::new(Self::from_config(handle, url, location, config))
        })
    }

    /// Handles of styles that must load before this one.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Cache-busting version, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The media query this stylesheet applies to.
    pub fn media(&self) -> &str {
        &self.media
    }

    /// Inline CSS appended after the linked stylesheet, if any.
    pub fn inline(&self) -> Option<&str> {
        self.inline.as_deref()
    }
}

impl Asset for StyleAsset {
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
    fn test_style_reads_extras_from_config() {
        let config = ConfigRecord::new()
            .with("dependencies", json!(["normalize"]))
            .with("media", "print")
            .with("inline", "body { margin: 0; }");

        let style = StyleAsset::from_config(
            "theme".to_string(),
            "theme.css".to_string(),
            Location::Frontend,
            config,
        );

        assert_eq!(style.dependencies(), ["normalize".to_string()]);
        assert_eq!(style.media(), "print");
        assert_eq!(style.inline(), Some("body { margin: 0; }"));
    }

    #[test]
    fn test_style_media_defaults_to_all() {
        let style = StyleAsset::from_config(
            "theme".to_string(),
            "theme.css".to_string(),
            Location::Frontend,
            ConfigRecord::new(),
        );

        assert_eq!(style.media(), "all");
        assert_eq!(style.inline(), None);
    }
}
