//! Shared output types handed to the site generator.
//!
//! Everything here is plain data: the builders produce it, `serde_json`
//! serializes it, and the external generator consumes it. The JSON shapes are
//! part of the contract:
//!
//! ```text
//! NavItem            {"text": "Guide", "link": "/header/guide/"}
//! SidebarItem::Link  {"text": "Install", "link": "/guide/install"}
//! SidebarItem::Group {"text": "Guide", "collapsed": true, "items": [...]}
//! Sidebar            {"/": [...]}
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level navigation entry (one per header category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

/// A node of the sidebar tree.
///
/// Serialized untagged so leaves and groups keep the exact field sets the
/// generator expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// A collapsible folder. Listed first because untagged deserialization
    /// tries variants in order and a group is the stricter shape.
    Group {
        text: String,
        collapsed: bool,
        items: Vec<SidebarItem>,
    },
    /// A page link: a folder overview or a loose markdown file.
    Link { text: String, link: String },
}

impl SidebarItem {
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        SidebarItem::Link {
            text: text.into(),
            link: link.into(),
        }
    }

    pub fn group(text: impl Into<String>, collapsed: bool, items: Vec<SidebarItem>) -> Self {
        SidebarItem::Group {
            text: text.into(),
            collapsed,
            items,
        }
    }

    /// Display text of either variant.
    pub fn text(&self) -> &str {
        match self {
            SidebarItem::Group { text, .. } | SidebarItem::Link { text, .. } => text,
        }
    }

    /// Children of a group; empty for links.
    pub fn items(&self) -> &[SidebarItem] {
        match self {
            SidebarItem::Group { items, .. } => items,
            SidebarItem::Link { .. } => &[],
        }
    }
}

/// Sidebar trees keyed by the URL prefix they apply to.
///
/// Only the `/` key is produced today.
pub type Sidebar = BTreeMap<String, Vec<SidebarItem>>;

/// Search provider setting passed through verbatim to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub provider: String,
}

/// Everything the generator's theme configuration receives from us.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub nav: Vec<NavItem>,
    pub sidebar: Sidebar,
    pub search: SearchSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_serializes_without_group_fields() {
        let json = serde_json::to_string(&SidebarItem::link("Tree1", "/tree1")).unwrap();
        assert_eq!(json, r#"{"text":"Tree1","link":"/tree1"}"#);
    }

    #[test]
    fn group_serializes_with_collapsed_and_items() {
        let group = SidebarItem::group("Guide", true, vec![SidebarItem::link("Overview", "/guide/")]);
        let json = serde_json::to_string(&group).unwrap();
        assert_eq!(
            json,
            r#"{"text":"Guide","collapsed":true,"items":[{"text":"Overview","link":"/guide/"}]}"#
        );
    }

    #[test]
    fn untagged_deserialize_picks_the_right_variant() {
        let items: Vec<SidebarItem> = serde_json::from_str(
            r#"[{"text":"A","link":"/a"},{"text":"B","collapsed":false,"items":[]}]"#,
        )
        .unwrap();
        assert_eq!(items[0], SidebarItem::link("A", "/a"));
        assert_eq!(items[1], SidebarItem::group("B", false, vec![]));
    }

    #[test]
    fn accessors_cover_both_variants() {
        let leaf = SidebarItem::link("Leaf", "/leaf");
        assert_eq!(leaf.text(), "Leaf");
        assert!(leaf.items().is_empty());

        let group = SidebarItem::group("Group", true, vec![leaf.clone()]);
        assert_eq!(group.text(), "Group");
        assert_eq!(group.items(), &[leaf]);
    }
}
