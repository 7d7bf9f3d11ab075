//! Top navigation from the header directory.
//!
//! Each immediate subfolder of `<docs root>/<header_dir>` that has an index
//! file becomes one nav entry. Nothing below that level is inspected.
//!
//! ```text
//! docs/header/
//! ├── getting-started/index.md   →  {"text": "Getting Started", "link": "/header/getting-started/"}
//! ├── api/index.md               →  {"text": "Api", "link": "/header/api/"}
//! └── drafts/notes.md            →  (no index, skipped)
//! ```

use crate::config::NavConfig;
use crate::naming::nav_title;
use crate::source::{DocSource, SourceError};
use crate::types::NavItem;
use std::path::Path;

/// Build the top navigation for `docs_root`.
///
/// A missing header directory yields an empty list; read failures inside an
/// existing one are returned.
pub fn build_header_nav(
    source: &impl DocSource,
    docs_root: &Path,
    config: &NavConfig,
) -> Result<Vec<NavItem>, SourceError> {
    let header_root = docs_root.join(&config.header_dir);
    if !source.is_dir(&header_root) {
        tracing::debug!(path = %header_root.display(), "no header directory, nav is empty");
        return Ok(Vec::new());
    }

    let mut nav = Vec::new();
    for entry in source.list_dir(&header_root)? {
        if !entry.is_dir() {
            continue;
        }
        if !source.is_file(&header_root.join(&entry.name).join(&config.index_file)) {
            tracing::debug!(dir = %entry.name, "header category has no index file, skipped");
            continue;
        }
        nav.push(NavItem {
            text: nav_title(&entry.name),
            link: format!("/{}/{}/", config.header_dir, entry.name),
        });
    }
    Ok(nav)
}
