//! Settings infrastructure for blobgen.
//!
//! This module provides support for loading and parsing blobgen.toml files
//! that supply defaults the CLI flags can override: the plugin name prefix
//! and the return-type checking policy.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::FilterPolicy;

/// Root settings structure loaded from blobgen.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Module-level configuration.
    pub module: Option<ModuleSettings>,
}

/// Module settings controlling the parse-and-filter pass.
#[derive(Debug, Default, Deserialize)]
pub struct ModuleSettings {
    /// Prefix for generated plugin names.
    pub prefix: Option<String>,

    /// Require native return types as well as native argument types
    /// (default: false, argument-only checking).
    pub check_returns: Option<bool>,
}

impl Settings {
    /// The filter policy these settings select.
    pub fn filter_policy(&self) -> FilterPolicy {
        FilterPolicy {
            check_returns: self
                .module
                .as_ref()
                .and_then(|m| m.check_returns)
                .unwrap_or(false),
        }
    }

    /// The configured prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.module.as_ref()?.prefix.as_deref()
    }
}

/// Load settings from a blobgen.toml file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Warning: failed to parse blobgen.toml: {}", e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Discover blobgen.toml by searching up the directory tree from `start_dir`.
///
/// Returns `(settings, settings_dir)` where `settings_dir` is the directory
/// containing the found blobgen.toml. If not found, returns
/// `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join("blobgen.toml");
        if candidate.is_file() {
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    (Settings::default(), start_dir.to_path_buf())
}
