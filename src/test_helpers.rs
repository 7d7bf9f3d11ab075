//! Shared test utilities for the docs-nav test suite.
//!
//! Provides a representative in-memory documentation tree, lookup helpers,
//! and shape assertions for sidebar trees.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let source = fixture_source();
//! let items = build_sidebar(&source, Path::new("docs"), "/", &NavConfig::default()).unwrap();
//!
//! let guide = find_group(&items, "User Guide");
//! assert_sidebar_texts(guide.items(), &["User Guide", "Advanced", "Install"]);
//! ```

use crate::source::MemorySource;
use crate::types::SidebarItem;

// =========================================================================
// Fixture
// =========================================================================

/// A small documentation tree covering every rule the builders apply.
///
/// ```text
/// docs/
/// ├── index.md                     sidebarTitle: Home
/// ├── tree1.md
/// ├── header/
/// │   ├── index.md
/// │   ├── getting-started/index.md
/// │   ├── api/index.md
/// │   └── drafts/todo.md           (no index)
/// ├── guide/
/// │   ├── index.md                 sidebarTitle: "User Guide"
/// │   ├── install.md
/// │   └── advanced/
/// │       ├── index.md
/// │       └── tuning.md
/// ├── orphan/                      (no index)
/// │   └── deep/index.md
/// └── .vitepress/index.md          (reserved)
/// ```
pub fn fixture_source() -> MemorySource {
    MemorySource::new()
        .with_file("docs/index.md", "---\nsidebarTitle: Home\n---\n# Welcome\n")
        .with_file("docs/tree1.md", "# Tree 1\n")
        .with_file("docs/header/index.md", "")
        .with_file("docs/header/getting-started/index.md", "# Getting started\n")
        .with_file("docs/header/api/index.md", "# API\n")
        .with_file("docs/header/drafts/todo.md", "")
        .with_file("docs/guide/index.md", "---\nsidebarTitle: \"User Guide\"\n---\n")
        .with_file("docs/guide/install.md", "")
        .with_file("docs/guide/advanced/index.md", "")
        .with_file("docs/guide/advanced/tuning.md", "")
        .with_file("docs/orphan/deep/index.md", "")
        .with_file("docs/.vitepress/index.md", "")
}

// =========================================================================
// Sidebar lookups: panic with a clear message on miss
// =========================================================================

/// Find a group by text among `items`. Panics if not found.
pub fn find_group<'a>(items: &'a [SidebarItem], text: &str) -> &'a SidebarItem {
    items
        .iter()
        .find(|i| matches!(i, SidebarItem::Group { .. }) && i.text() == text)
        .unwrap_or_else(|| {
            let texts: Vec<&str> = items.iter().map(|i| i.text()).collect();
            panic!("group '{text}' not found. Available: {texts:?}")
        })
}

/// All links in the tree, depth-first.
pub fn collect_links(items: &[SidebarItem]) -> Vec<String> {
    let mut links = Vec::new();
    for item in items {
        match item {
            SidebarItem::Link { link, .. } => links.push(link.clone()),
            SidebarItem::Group { items, .. } => links.extend(collect_links(items)),
        }
    }
    links
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert the texts of `items` (one level, in order).
pub fn assert_sidebar_texts(items: &[SidebarItem], expected: &[&str]) {
    let actual: Vec<&str> = items.iter().map(|i| i.text()).collect();
    assert_eq!(actual, expected, "sidebar texts differ");
}
