//! # docs-nav
//!
//! Derives a documentation site's top navigation and sidebar from its folder
//! structure. The filesystem is the data source: folders with an `index.md`
//! become sidebar groups, loose markdown files become links, and the children
//! of a `header/` folder become the top navigation.
//!
//! ```text
//! docs/
//! ├── index.md                    → sidebar: Overview (/)
//! ├── header/
//! │   ├── index.md
//! │   └── getting-started/
//! │       └── index.md            → nav: Getting Started (/header/getting-started/)
//! ├── guide/
//! │   ├── index.md                → sidebar: Guide group, its Overview (/guide/)
//! │   └── install.md              → sidebar: Install (/guide/install)
//! └── tree1.md                    → sidebar: Tree1 (/tree1)
//! ```
//!
//! The output is a [`types::ThemeConfig`] (nav, sidebar, search setting) that
//! the site generator consumes as JSON. Rendering, search indexing and theming
//! are the generator's job.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`header`] | Top navigation from the immediate subfolders of the header directory |
//! | [`sidebar`] | Recursive sidebar tree mirroring the folder hierarchy |
//! | [`site`] | Runs both builders and assembles the theme configuration |
//! | [`frontmatter`] | Title override lookup (`sidebarTitle` by default) in index files |
//! | [`naming`] | Display titles from file and folder names |
//! | [`source`] | `DocSource` trait with disk and in-memory implementations |
//! | [`config`] | `docnav.toml` loading, merging over stock defaults, validation |
//! | [`types`] | Serialized output types (`NavItem`, `SidebarItem`, `ThemeConfig`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Injected Filesystem
//!
//! The builders take any [`source::DocSource`]. Production uses
//! [`source::DiskSource`]; tests describe trees with [`source::MemorySource`]
//! and never touch the disk unless they test the disk itself. Listings are
//! sorted by name, which makes output deterministic.
//!
//! ## Index Files Gate Visibility
//!
//! A folder without an index file is left out of the sidebar together with all
//! of its descendants, even ones that have their own index file. Content is
//! published by giving its folder a landing page.
//!
//! ## Errors Are Fatal
//!
//! A missing header folder means "no top navigation". Any other read failure
//! (vanished directory, permission denied) aborts the build with the offending
//! path. No partial tree is ever returned.

pub mod config;
pub mod frontmatter;
pub mod header;
pub mod naming;
pub mod output;
pub mod sidebar;
pub mod site;
pub mod source;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
