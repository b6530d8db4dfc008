//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a ucfedit.toml, and if present we load settings from there.
//! This provides the disabling marker, the default save mode and where preferences are kept.

use crate::destination::SaveModeKind;
use crate::formats::CommentMarker;
use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from ucfedit.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "#".to_string())]
    /// Comment marker written in front of disabled lines (`#` or `//`).
    pub disable_marker: String,
    #[facet(default = "named".to_string())]
    /// Save mode used when none is given on the command line.
    pub default_mode: String,
    #[facet(default = "ucfedit_prefs.json".to_string())]
    /// JSON file holding persisted preferences such as the last directory.
    pub prefs_file: String,
    #[facet(default = "project".to_string())]
    /// Project name used when a directory has no usable name.
    pub fallback_project_name: String,
}

impl Config {
    #[must_use]
    /// Load configuration from ucfedit.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("ucfedit.toml") {
            match Self::parse(&contents) {
                Some(config) => return config,
                None => log::warn!("ignoring unparsable ucfedit.toml"),
            }
        }
        Self::parse("").unwrap()
    }

    #[must_use]
    /// Parse configuration from TOML text, filling in defaults for missing keys.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }

    #[must_use]
    /// The configured marker, or `#` when the value is not a recognised marker.
    pub fn marker(&self) -> CommentMarker {
        CommentMarker::parse(&self.disable_marker).unwrap_or_else(|| {
            log::warn!(
                "unknown disable_marker {:?}, using \"#\"",
                self.disable_marker
            );
            CommentMarker::Hash
        })
    }

    #[must_use]
    /// The configured default save mode, or named mode when unrecognised.
    pub fn mode(&self) -> SaveModeKind {
        SaveModeKind::parse(&self.default_mode).unwrap_or_else(|| {
            log::warn!("unknown default_mode {:?}, using named", self.default_mode);
            SaveModeKind::Named
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
