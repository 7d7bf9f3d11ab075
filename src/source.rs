//! Read-only access to the documentation tree.
//!
//! The builders never touch `std::fs` directly. They go through [`DocSource`],
//! which offers exactly what they need: a one-level directory listing, a file
//! read, and two existence checks. Two implementations exist:
//!
//! - [`DiskSource`] reads the real filesystem with `walkdir`, one level at a
//!   time, sorted by file name, without following symbolic links. Entries
//!   whose names are not valid UTF-8 cannot become titles or links and are
//!   left out of listings.
//! - [`MemorySource`] holds a tree in memory. Tests build fixtures with it, and
//!   it can inject read failures to exercise error propagation.
//!
//! Listings are always sorted by name, so repeated builds over an unchanged
//! tree produce identical output regardless of the order the OS returns.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// A filesystem read failed. Always fatal for the build.
#[derive(Error, Debug)]
#[error("cannot read {}: {source}", .path.display())]
pub struct SourceError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl SourceError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Symbolic links and special files. The builders skip them.
    Other,
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Directory-listing and file-read capability the builders depend on.
pub trait DocSource {
    /// Immediate children of `dir`, sorted by name.
    fn list_dir(&self, dir: &Path) -> Result<Vec<Entry>, SourceError>;

    /// Full UTF-8 contents of the file at `path`.
    fn read_to_string(&self, path: &Path) -> Result<String, SourceError>;

    /// Whether `path` is a regular file. Symbolic links never are.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` is a directory. Symbolic links never are.
    fn is_dir(&self, path: &Path) -> bool;
}

// ============================================================================
// Disk
// ============================================================================

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskSource;

impl DocSource for DiskSource {
    fn list_dir(&self, dir: &Path) -> Result<Vec<Entry>, SourceError> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for item in walker {
            let item = item.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                SourceError::new(path, io::Error::from(e))
            })?;
            let Some(name) = item.file_name().to_str() else {
                tracing::debug!(path = %item.path().display(), "non-UTF-8 name skipped");
                continue;
            };
            let file_type = item.file_type();
            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            entries.push(Entry {
                name: name.to_string(),
                kind,
            });
        }
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, SourceError> {
        std::fs::read_to_string(path).map_err(|e| SourceError::new(path, e))
    }

    fn is_file(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok_and(|m| m.is_file())
    }

    fn is_dir(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok_and(|m| m.is_dir())
    }
}

// ============================================================================
// Memory
// ============================================================================

/// In-memory documentation tree.
///
/// ```ignore
/// let source = MemorySource::new()
///     .with_file("docs/index.md", "---\nsidebarTitle: Home\n---\n")
///     .with_file("docs/guide/index.md", "")
///     .with_dir("docs/empty");
/// ```
///
/// Adding a file or directory implicitly adds all its ancestors.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    failing: BTreeSet<PathBuf>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.dirs.insert(path);
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.files.insert(path, content.into());
        self
    }

    /// Make every listing or read of `path` fail with `PermissionDenied`.
    #[must_use]
    pub fn with_failure(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn check_failure(&self, path: &Path) -> Result<(), SourceError> {
        if self.failing.contains(path) {
            return Err(SourceError::new(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        Ok(())
    }
}

fn not_found(path: &Path) -> SourceError {
    SourceError::new(
        path,
        io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
    )
}

impl DocSource for MemorySource {
    fn list_dir(&self, dir: &Path) -> Result<Vec<Entry>, SourceError> {
        self.check_failure(dir)?;
        if !self.dirs.contains(dir) {
            return Err(not_found(dir));
        }

        let children = |path: &PathBuf| -> Option<String> {
            (path.parent() == Some(dir))
                .then(|| path.file_name())
                .flatten()
                .map(|n| n.to_string_lossy().to_string())
        };

        let mut entries: Vec<Entry> = self
            .dirs
            .iter()
            .filter_map(|p| children(p).map(|name| Entry { name, kind: EntryKind::Dir }))
            .chain(
                self.files
                    .keys()
                    .filter_map(|p| children(p).map(|name| Entry { name, kind: EntryKind::File })),
            )
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, SourceError> {
        self.check_failure(path)?;
        self.files.get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}
