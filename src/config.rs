//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a sectionjump.toml, and if present we load settings from there.
//! This provides the sectioning property and the contact file extensions.

use crate::sectioning::SectionProperty;
use facet::Facet;
use std::fs;
use tracing::warn;

/// File the configuration is read from, relative to the working directory.
pub const CONFIG_FILE: &str = "sectionjump.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from sectionjump.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "display-label".to_string())]
    /// Name of the property contacts are sectioned by.
    pub section_property: String,
    #[facet(default = vec!["json".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            section_property: "display-label".to_string(),
            file_extensions: vec!["json".to_string()],
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from sectionjump.toml if present.
    pub fn load() -> Self {
        fs::read_to_string(CONFIG_FILE)
            .ok()
            .map_or_else(Self::default, |contents| Self::parse(&contents))
    }

    #[must_use]
    /// Parse configuration text, keeping defaults for anything missing or invalid.
    pub fn parse(contents: &str) -> Self {
        match facet_toml::from_str::<Self>(contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "ignoring invalid {CONFIG_FILE}");
                Self::default()
            }
        }
    }

    #[must_use]
    /// The configured sectioning, or the default if the name is unknown.
    pub fn section_property(&self) -> SectionProperty {
        SectionProperty::from_name(&self.section_property).unwrap_or_else(|| {
            warn!(name = %self.section_property, "unknown section property");
            SectionProperty::default()
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
