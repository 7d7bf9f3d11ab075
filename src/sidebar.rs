//! Sidebar tree mirroring the documentation folders.
//!
//! ## Layout
//!
//! ```text
//! docs/
//! ├── index.md             →  Overview                      link "/"
//! ├── guide/               →  Guide (group)
//! │   ├── index.md         →      Overview                  link "/guide/"
//! │   ├── advanced/        →      Advanced (group)
//! │   │   └── index.md     →          Overview              link "/guide/advanced/"
//! │   └── install.md       →      Install                   link "/guide/install"
//! ├── drafts/              →  (no index.md: skipped with everything below)
//! │   └── wip/index.md
//! ├── .vitepress/          →  (excluded by name)
//! └── tree1.md             →  Tree1                         link "/tree1"
//! ```
//!
//! ## Ordering
//!
//! Within one folder: the overview link (when the folder has an index file),
//! then subfolder groups, then loose markdown files. Subfolders and files each
//! keep the source's listing order, which is sorted by name.
//!
//! ## Titles
//!
//! A group or overview link uses the `title_key` frontmatter (`sidebarTitle` by
//! default) of the folder's index file when present. Otherwise groups fall back to the folder name
//! ([`display_title`]) and overview links to the configured overview label.
//! Page links always use the file name.

use crate::config::NavConfig;
use crate::frontmatter;
use crate::naming::{display_title, page_stem};
use crate::source::{DocSource, SourceError};
use crate::types::SidebarItem;
use std::path::Path;

/// URL prefix of the documentation root.
pub const ROOT_LINK: &str = "/";

/// Build the sidebar items for `dir`, whose pages live under the URL prefix `base`.
///
/// `base` must end with `/`. Subfolders recurse with `<base><dirname>/`.
pub fn build_sidebar(
    source: &impl DocSource,
    dir: &Path,
    base: &str,
    config: &NavConfig,
) -> Result<Vec<SidebarItem>, SourceError> {
    let entries = source.list_dir(dir)?;
    let mut items = Vec::with_capacity(entries.len());

    let index_path = dir.join(&config.index_file);
    if source.is_file(&index_path) {
        let text = title_override(source, &index_path, config)?
            .unwrap_or_else(|| config.overview_label().to_string());
        items.push(SidebarItem::link(text, base));
    }

    for entry in entries.iter().filter(|e| e.is_dir()) {
        if config.is_excluded(&entry.name) {
            tracing::debug!(dir = %dir.join(&entry.name).display(), "excluded folder");
            continue;
        }
        let sub_dir = dir.join(&entry.name);
        let sub_index = sub_dir.join(&config.index_file);
        if !source.is_file(&sub_index) {
            tracing::debug!(dir = %sub_dir.display(), "folder has no index file, skipped");
            continue;
        }

        let text = title_override(source, &sub_index, config)?
            .unwrap_or_else(|| display_title(&entry.name));
        let sub_base = format!("{base}{}/", entry.name);
        let children = build_sidebar(source, &sub_dir, &sub_base, config)?;
        items.push(SidebarItem::group(text, config.collapsed, children));
    }

    for entry in entries.iter().filter(|e| e.is_file()) {
        if entry.name == config.index_file {
            continue;
        }
        let Some(stem) = page_stem(&entry.name, &config.markdown_ext) else {
            continue;
        };
        items.push(SidebarItem::link(display_title(stem), format!("{base}{stem}")));
    }

    Ok(items)
}

/// Read an index file and return its frontmatter title, if any.
fn title_override(
    source: &impl DocSource,
    index_path: &Path,
    config: &NavConfig,
) -> Result<Option<String>, SourceError> {
    let content = source.read_to_string(index_path)?;
    let title = frontmatter::title_value(&content, &config.title_key);
    if let Some(ref t) = title {
        tracing::debug!(
            path = %index_path.display(),
            key = %config.title_key,
            title = %t,
            "title override"
        );
    }
    Ok(title)
}
