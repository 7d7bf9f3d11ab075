//! Theme configuration assembly.
//!
//! Runs the header-nav and sidebar builders against one documentation root
//! and packages their output together with the search setting:
//!
//! ```json
//! {
//!   "nav": [{"text": "Api", "link": "/header/api/"}],
//!   "sidebar": {"/": [{"text": "Overview", "link": "/"}]},
//!   "search": {"provider": "local"}
//! }
//! ```
//!
//! Every call reads the source afresh. Nothing is cached between calls.

use crate::config::{self, NavConfig};
use crate::header::build_header_nav;
use crate::sidebar::{ROOT_LINK, build_sidebar};
use crate::source::{DocSource, SourceError};
use crate::types::{NavItem, Sidebar, ThemeConfig};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error(transparent)]
    Io(#[from] SourceError),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Sidebar map with the whole tree under the root key.
pub fn build_sidebar_map(
    source: &impl DocSource,
    docs_root: &Path,
    config: &NavConfig,
) -> Result<Sidebar, SourceError> {
    let tree = build_sidebar(source, docs_root, ROOT_LINK, config)?;
    Ok(Sidebar::from([(ROOT_LINK.to_string(), tree)]))
}

/// Build the full theme configuration for `docs_root`.
pub fn build_theme(
    source: &impl DocSource,
    docs_root: &Path,
    config: &NavConfig,
) -> Result<ThemeConfig, NavError> {
    let nav: Vec<NavItem> = build_header_nav(source, docs_root, config)?;
    let sidebar = build_sidebar_map(source, docs_root, config)?;

    tracing::info!(
        root = %docs_root.display(),
        nav = nav.len(),
        sidebar_entries = count_entries(&sidebar),
        "navigation built"
    );

    Ok(ThemeConfig {
        nav,
        sidebar,
        search: (&config.search).into(),
    })
}

/// Load the config for `docs_root` and build its theme configuration.
pub fn load_and_build(
    source: &impl DocSource,
    docs_root: &Path,
    config_path: Option<&Path>,
) -> Result<ThemeConfig, NavError> {
    let config = config::load_config(docs_root, config_path)?;
    build_theme(source, docs_root, &config)
}

fn count_entries(sidebar: &Sidebar) -> usize {
    fn count(items: &[crate::types::SidebarItem]) -> usize {
        items.iter().map(|i| 1 + count(i.items())).sum()
    }
    sidebar.values().map(|items| count(items)).sum()
}
