//! Navigation conventions configuration.
//!
//! Handles loading, validating, and merging `docnav.toml`. Stock defaults
//! describe the conventional layout; a config file only needs the keys it
//! wants to change.
//!
//! ## Config File Location
//!
//! By default `docnav.toml` is read from the documentation root. An explicit
//! path can be given instead (`--config`), in which case the file must exist.
//!
//! ```text
//! docs/
//! ├── docnav.toml          # optional, overrides stock defaults
//! ├── index.md
//! ├── header/
//! │   └── guide/index.md
//! └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! lang = "en"                           # Picks the overview label
//! # overview_label = "Start here"       # Explicit label, wins over `lang`
//! header_dir = "header"                 # Folder whose children form the top nav
//! index_file = "index.md"               # Per-folder landing page / title source
//! markdown_ext = ".md"                  # Loose files with this suffix become links
//! excluded = [".vitepress", ".obsidian"] # Never shown in the sidebar
//! title_key = "sidebarTitle"            # Frontmatter key overriding folder titles
//! collapsed = true                      # Initial state of sidebar groups
//!
//! [search]
//! provider = "local"                    # Passed through to the generator
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::frontmatter::DEFAULT_TITLE_KEY;
use crate::types::SearchSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config file name, looked up in the documentation root.
pub const CONFIG_FILENAME: &str = "docnav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Folder conventions and output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Language used to pick the default overview label.
    pub lang: String,
    /// Explicit overview label; overrides the language default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview_label: Option<String>,
    /// Directory (relative to the docs root) whose subfolders form the top nav.
    pub header_dir: String,
    /// Landing page file name inside each folder.
    pub index_file: String,
    /// Suffix identifying markdown pages, including the dot.
    pub markdown_ext: String,
    /// Folder names never shown in the sidebar.
    pub excluded: Vec<String>,
    /// Frontmatter key of an index file that overrides its folder's title.
    pub title_key: String,
    /// Whether sidebar groups start collapsed.
    pub collapsed: bool,
    /// Search provider setting for the generator.
    pub search: SearchConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            overview_label: None,
            header_dir: "header".to_string(),
            index_file: "index.md".to_string(),
            markdown_ext: ".md".to_string(),
            excluded: vec![".vitepress".to_string(), ".obsidian".to_string()],
            title_key: DEFAULT_TITLE_KEY.to_string(),
            collapsed: true,
            search: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub provider: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: "local".to_string(),
        }
    }
}

impl From<&SearchConfig> for SearchSettings {
    fn from(config: &SearchConfig) -> Self {
        SearchSettings {
            provider: config.provider.clone(),
        }
    }
}

impl NavConfig {
    /// Validate that the conventions describe a usable layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("header_dir", &self.header_dir),
            ("index_file", &self.index_file),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
            if value.contains('/') || value.contains('\\') {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a single path component, got {value:?}"
                )));
            }
        }
        if !self.markdown_ext.starts_with('.') || self.markdown_ext.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "markdown_ext must look like \".md\", got {:?}",
                self.markdown_ext
            )));
        }
        if !self.index_file.ends_with(&self.markdown_ext) {
            return Err(ConfigError::Validation(format!(
                "index_file {:?} must end with markdown_ext {:?}",
                self.index_file, self.markdown_ext
            )));
        }
        if self.title_key.is_empty()
            || self.title_key.contains(':')
            || self.title_key.contains(char::is_whitespace)
        {
            return Err(ConfigError::Validation(format!(
                "title_key must be a bare frontmatter key, got {:?}",
                self.title_key
            )));
        }
        if self.search.provider.trim().is_empty() {
            return Err(ConfigError::Validation(
                "search.provider must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Label of the leaf pointing at a folder's own index page.
    pub fn overview_label(&self) -> &str {
        match &self.overview_label {
            Some(label) => label.as_str(),
            None => default_overview_label(&self.lang),
        }
    }

    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.excluded.iter().any(|name| name == dir_name)
    }
}

/// Overview label for a language tag. Region subtags are ignored.
pub fn default_overview_label(lang: &str) -> &'static str {
    let primary = lang
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match primary.as_str() {
        "zh" => "概览",
        "ja" => "概要",
        "de" => "Übersicht",
        "fr" => "Aperçu",
        "es" => "Resumen",
        _ => "Overview",
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(NavConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<NavConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: NavConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the configuration for a documentation root.
///
/// With `explicit` set, that file is required. Otherwise `docnav.toml` in
/// `docs_root` is used when present and stock defaults apply when it is not.
pub fn load_config(docs_root: &Path, explicit: Option<&Path>) -> Result<NavConfig, ConfigError> {
    let overlay = match explicit {
        Some(path) => Some(load_raw_config(path)?),
        None => {
            let default_path = docs_root.join(CONFIG_FILENAME);
            if default_path.is_file() {
                Some(load_raw_config(&default_path)?)
            } else {
                None
            }
        }
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock `docnav.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docs-nav Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at <docs root>/docnav.toml or pass --config <file>.
# Unknown keys will cause an error.

# Language used for the default label of a folder's overview link.
# Known: en (Overview), zh, ja, de, fr, es. Others fall back to English.
lang = "en"

# Explicit overview label. Wins over `lang` when set.
# overview_label = "Overview"

# ---------------------------------------------------------------------------
# Folder conventions
# ---------------------------------------------------------------------------

# Folder (inside the docs root) whose immediate subfolders become the top nav.
header_dir = "header"

# Landing page of every folder. Folders without one are left out of the
# sidebar, together with everything below them.
index_file = "index.md"

# Loose files ending with this suffix become sidebar links.
markdown_ext = ".md"

# Folder names that never appear in the sidebar.
excluded = [".vitepress", ".obsidian"]

# Frontmatter key in a folder's index file that replaces the folder's title
# in the sidebar.
title_key = "sidebarTitle"

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------

# Whether sidebar groups start collapsed.
collapsed = true

[search]
# Search provider handed to the site generator as-is.
provider = "local"
"##
}
