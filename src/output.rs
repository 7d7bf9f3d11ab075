//! CLI output formatting.
//!
//! # Output Format
//!
//! Entries lead with their positional index and title; the link follows an
//! arrow. Groups nest their children four spaces deeper and show how many
//! direct entries they hold.
//!
//! ```text
//! Nav
//! 001 Api → /header/api/
//! 002 Getting Started → /header/getting-started/
//!
//! Sidebar /
//! 001 Home → /
//! 002 User Guide (3 entries)
//!     001 User Guide → /guide/
//!     002 Advanced (2 entries)
//!         001 Overview → /guide/advanced/
//!         002 Tuning → /guide/advanced/tuning
//!     003 Install → /guide/install
//! 003 Tree1 → /tree1
//!
//! Search: local
//! ```
//!
//! # Architecture
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure.

use crate::types::{NavItem, Sidebar, SidebarItem, ThemeConfig};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn entry_count(n: usize) -> String {
    if n == 1 {
        "1 entry".to_string()
    } else {
        format!("{n} entries")
    }
}

pub fn format_nav(nav: &[NavItem]) -> Vec<String> {
    let mut lines = vec!["Nav".to_string()];
    if nav.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, item) in nav.iter().enumerate() {
        lines.push(format!("{} {} → {}", format_index(i + 1), item.text, item.link));
    }
    lines
}

pub fn format_sidebar(sidebar: &Sidebar) -> Vec<String> {
    let mut lines = Vec::new();
    for (key, items) in sidebar {
        lines.push(format!("Sidebar {key}"));
        if items.is_empty() {
            lines.push("    (empty)".to_string());
        }
        format_items(items, 0, &mut lines);
    }
    lines
}

fn format_items(items: &[SidebarItem], depth: usize, lines: &mut Vec<String>) {
    for (i, item) in items.iter().enumerate() {
        let prefix = format!("{}{}", indent(depth), format_index(i + 1));
        match item {
            SidebarItem::Link { text, link } => {
                lines.push(format!("{prefix} {text} → {link}"));
            }
            SidebarItem::Group { text, items, .. } => {
                lines.push(format!("{prefix} {text} ({})", entry_count(items.len())));
                format_items(items, depth + 1, lines);
            }
        }
    }
}

pub fn format_theme(theme: &ThemeConfig) -> Vec<String> {
    let mut lines = format_nav(&theme.nav);
    lines.push(String::new());
    lines.extend(format_sidebar(&theme.sidebar));
    lines.push(String::new());
    lines.push(format!("Search: {}", theme.search.provider));
    lines
}

pub fn print_theme(theme: &ThemeConfig) {
    for line in format_theme(theme) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchSettings;
    use pretty_assertions::assert_eq;

    fn sample() -> ThemeConfig {
        ThemeConfig {
            nav: vec![NavItem {
                text: "Api".to_string(),
                link: "/header/api/".to_string(),
            }],
            sidebar: Sidebar::from([(
                "/".to_string(),
                vec![
                    SidebarItem::link("Overview", "/"),
                    SidebarItem::group(
                        "Guide",
                        true,
                        vec![
                            SidebarItem::link("Overview", "/guide/"),
                            SidebarItem::group(
                                "Deep",
                                true,
                                vec![SidebarItem::link("Overview", "/guide/deep/")],
                            ),
                        ],
                    ),
                    SidebarItem::link("Tree1", "/tree1"),
                ],
            )]),
            search: SearchSettings {
                provider: "local".to_string(),
            },
        }
    }

    #[test]
    fn theme_output() {
        assert_eq!(
            format_theme(&sample()),
            vec![
                "Nav",
                "001 Api → /header/api/",
                "",
                "Sidebar /",
                "001 Overview → /",
                "002 Guide (2 entries)",
                "    001 Overview → /guide/",
                "    002 Deep (1 entry)",
                "        001 Overview → /guide/deep/",
                "003 Tree1 → /tree1",
                "",
                "Search: local",
            ]
        );
    }

    #[test]
    fn empty_nav_is_marked() {
        assert_eq!(format_nav(&[]), vec!["Nav", "    (none)"]);
    }

    #[test]
    fn empty_sidebar_is_marked() {
        let sidebar = Sidebar::from([("/".to_string(), vec![])]);
        assert_eq!(format_sidebar(&sidebar), vec!["Sidebar /", "    (empty)"]);
    }
}
