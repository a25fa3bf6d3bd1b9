//! # Location
//!
//! The deployment context an asset is rendered into.
//!
//! Front-end assets are not all served to the same surface: a script may
//! belong to the public site, the admin backend, the login screen, or the
//! theme customizer. The location rides on the config record under the
//! optional `location` key and defaults to [`Location::Frontend`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment context of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Public-facing pages. The default context.
    #[default]
    Frontend,
    /// Administrative backend.
    Backend,
    /// Login screen.
    Login,
    /// Theme customizer.
    Customizer,
}

impl Location {
    /// The string tag used in configuration records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Frontend => "frontend",
            Location::Backend => "backend",
            Location::Login => "login",
            Location::Customizer => "customizer",
        }
    }

    /// Parse a config tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "frontend" => Some(Location::Frontend),
            "backend" => Some(Location::Backend),
            "login" => Some(Location::Login),
            "customizer" => Some(Location::Customizer),
            _ => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_default_is_frontend() {
        assert_eq!(Location::default(), Location::Frontend);
    }

    #[test]
    fn test_location_tag_roundtrip() {
        for location in [
            Location::Frontend,
            Location::Backend,
            Location::Login,
            Location::Customizer,
        ] {
            assert_eq!(Location::from_tag(location.as_str()), Some(location));
        }
    }

    #[test]
    fn test_location_parse_is_case_insensitive() {
        assert_eq!(Location::from_tag("Backend"), Some(Location::Backend));
        assert_eq!(Location::from_tag("FRONTEND"), Some(Location::Frontend));
    }

    #[test]
    fn test_location_unknown_tag() {
        assert_eq!(Location::from_tag("sidebar"), None);
    }
}
