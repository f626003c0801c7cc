//! Content tree scanning.
//!
//! Walks the documentation root once and classifies every entry as a content
//! file (`*.md`), a content directory, or something to skip. The result is a
//! [`ContentTree`] with titles already resolved, so the sidebar and nav passes
//! are pure functions over it and each failing subtree is reported once.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/                            # Content root
//! ├── index.md                     # Home page (not part of any section)
//! ├── nav.toml                     # Navigation config (optional)
//! ├── .vitepress/                  # Renderer internals (excluded)
//! ├── components/                  # Reusable components (excluded)
//! ├── golang/                      # Top-level section, no direct content
//! │   ├── title.txt                # "Go 语言" (directory title marker)
//! │   ├── core/                    # Sidebar unit
//! │   │   ├── index.md             # Section landing page
//! │   │   ├── 1.intro.md
//! │   │   └── 2.types.md
//! │   └── web/                     # Content only below: appears in nav
//! │       └── gin/
//! │           └── 1.start.md
//! └── tools/                       # Sidebar unit at the top level
//!     └── git.md
//! ```
//!
//! ## Rules
//!
//! - Hidden entries and the configured exclusions are skipped at every depth
//! - Directories with no content anywhere below are dropped from the tree
//! - Top-level sections keep filesystem order; nothing else is ordered here
//! - Symbolic links are followed; re-entering a directory already on the
//!   current path is a [`ScanError::Cycle`]
//!
//! Unreadable subtrees are reported to the [`Diagnostics`] sink and treated as
//! empty. Only an unreadable content root fails the scan.

use crate::config::NavConfig;
use crate::diagnostics::{Diagnostics, Warning};
use crate::naming::extract_order;
use crate::title::{resolve_directory_title, resolve_file_title};
use crate::types::route_prefix;
use std::fs::{self, FileType};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension identifying content files.
const CONTENT_EXTENSION: &str = "md";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read directory {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("symlink cycle: {} is already being scanned", .0.display())]
    Cycle(PathBuf),
}

impl ScanError {
    pub fn path(&self) -> &Path {
        match self {
            ScanError::Io { path, .. } | ScanError::Cycle(path) => path,
        }
    }

    fn io(path: &Path, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A `.md` file directly inside a content directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentFile {
    pub file_name: String,
    /// Resolved display title. Empty for the index file, whose title is the
    /// directory's.
    pub title: String,
    /// File name without the `.md` extension, used in links.
    pub slug: String,
    pub order: Option<u64>,
    pub is_index: bool,
}

/// A directory that holds content directly or somewhere below.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDirectory {
    pub name: String,
    /// Slash-separated path from the content root, no leading/trailing slash.
    pub rel_path: String,
    pub title: String,
    pub has_index: bool,
    /// Content files directly inside, in filesystem order.
    pub files: Vec<ContentFile>,
    /// Subdirectories with content, in filesystem order.
    pub children: Vec<ContentDirectory>,
}

impl ContentDirectory {
    pub fn has_direct_content(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn has_content_transitively(&self) -> bool {
        self.has_direct_content()
            || self
                .children
                .iter()
                .any(ContentDirectory::has_content_transitively)
    }

    pub fn route(&self) -> String {
        route_prefix(&self.rel_path)
    }
}

/// Scanned content root.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTree {
    pub root: PathBuf,
    /// Top-level content directories, in filesystem order.
    pub sections: Vec<ContentDirectory>,
}

enum EntryKind {
    File,
    Dir,
}

/// One directory entry, classified after following symlinks.
struct Entry {
    name: String,
    path: PathBuf,
    kind: EntryKind,
}

/// Lists a directory for the scanner. Swappable so listing failures can be
/// simulated independently of permission bits.
type ReadEntries = fn(&Path, &dyn Diagnostics) -> Result<Vec<Entry>, ScanError>;

/// Read and classify a directory's entries, in filesystem order.
///
/// Fails only when the directory itself cannot be listed.
fn read_entries(dir: &Path, diagnostics: &dyn Diagnostics) -> Result<Vec<Entry>, ScanError> {
    let listing = fs::read_dir(dir)
        .map_err(|e| ScanError::io(dir, e))?
        .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?))));
    Ok(classify_entries(dir, listing, diagnostics))
}

/// Classify listed entries, following symlinks.
///
/// An entry that cannot be inspected is reported and skipped. Entries that
/// are neither files nor directories (sockets, dangling links) are dropped
/// silently.
fn classify_entries(
    dir: &Path,
    listing: impl Iterator<Item = io::Result<(PathBuf, FileType)>>,
    diagnostics: &dyn Diagnostics,
) -> Vec<Entry> {
    let mut entries = Vec::new();
    for item in listing {
        let (path, file_type) = match item {
            Ok(item) => item,
            Err(e) => {
                diagnostics.warn(Warning::Scan(ScanError::io(dir, e)));
                continue;
            }
        };
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let (is_dir, is_file) = if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(meta) => (meta.is_dir(), meta.is_file()),
                Err(_) => continue,
            }
        } else {
            (file_type.is_dir(), file_type.is_file())
        };
        let kind = match (is_dir, is_file) {
            (true, _) => EntryKind::Dir,
            (_, true) => EntryKind::File,
            _ => continue,
        };
        entries.push(Entry { name, path, kind });
    }
    entries
}

fn is_content_file(entry: &Entry) -> bool {
    matches!(entry.kind, EntryKind::File)
        && Path::new(&entry.name)
            .extension()
            .is_some_and(|ext| ext == CONTENT_EXTENSION)
}

fn is_scanned_dir(entry: &Entry, config: &NavConfig) -> bool {
    matches!(entry.kind, EntryKind::Dir) && !config.is_excluded(&entry.name)
}

/// Tracks canonical paths of the directories on the current recursion path.
#[derive(Default)]
struct RecursionStack {
    paths: Vec<PathBuf>,
}

impl RecursionStack {
    /// Push `dir`, failing if it is already on the stack.
    fn enter(&mut self, dir: &Path) -> Result<(), ScanError> {
        let canonical = fs::canonicalize(dir).map_err(|e| ScanError::io(dir, e))?;
        if self.paths.contains(&canonical) {
            return Err(ScanError::Cycle(dir.to_path_buf()));
        }
        self.paths.push(canonical);
        Ok(())
    }

    fn leave(&mut self) {
        self.paths.pop();
    }
}

/// Names of the content root's direct subdirectories, minus exclusions, in
/// filesystem order.
pub fn list_top_level_content_dirs(
    root: &Path,
    config: &NavConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<Vec<String>, ScanError> {
    Ok(top_level_entries(root, config, diagnostics, read_entries)?
        .into_iter()
        .map(|e| e.name)
        .collect())
}

fn top_level_entries(
    root: &Path,
    config: &NavConfig,
    diagnostics: &dyn Diagnostics,
    read: ReadEntries,
) -> Result<Vec<Entry>, ScanError> {
    Ok(read(root, diagnostics)?
        .into_iter()
        .filter(|e| is_scanned_dir(e, config))
        .collect())
}

/// Whether `dir` or any non-excluded directory below it holds a content file.
///
/// Standalone check straight against the filesystem, for callers without a
/// scanned tree. [`scan_tree`] derives the same flag per node during its walk
/// ([`ContentDirectory::has_content_transitively`]) instead of probing again.
/// Stops at the first content file found. Unreadable subtrees are reported and
/// count as empty.
pub fn has_content_transitively(
    dir: &Path,
    config: &NavConfig,
    diagnostics: &dyn Diagnostics,
) -> bool {
    let mut stack = RecursionStack::default();
    find_content(dir, config, diagnostics, &mut stack)
}

fn find_content(
    dir: &Path,
    config: &NavConfig,
    diagnostics: &dyn Diagnostics,
    stack: &mut RecursionStack,
) -> bool {
    if let Err(e) = stack.enter(dir) {
        diagnostics.warn(Warning::Scan(e));
        return false;
    }
    let found = match read_entries(dir, diagnostics) {
        Ok(entries) => {
            entries.iter().any(is_content_file)
                || entries
                    .iter()
                    .filter(|e| is_scanned_dir(e, config))
                    .any(|e| find_content(&e.path, config, diagnostics, stack))
        }
        Err(e) => {
            diagnostics.warn(Warning::Scan(e));
            false
        }
    };
    stack.leave();
    found
}

/// Walks the tree once, building [`ContentDirectory`] nodes.
struct Scanner<'a> {
    config: &'a NavConfig,
    diagnostics: &'a dyn Diagnostics,
    read: ReadEntries,
    stack: RecursionStack,
}

impl Scanner<'_> {
    /// Scan a directory, reporting failures and returning `None` for
    /// subtrees that failed or hold no content.
    fn scan_child(&mut self, path: &Path, name: &str, rel_path: String) -> Option<ContentDirectory> {
        match self.scan_directory(path, name, rel_path) {
            Ok(dir) => dir.has_content_transitively().then_some(dir),
            Err(e) => {
                self.diagnostics.warn(Warning::Scan(e));
                None
            }
        }
    }

    fn scan_directory(
        &mut self,
        path: &Path,
        name: &str,
        rel_path: String,
    ) -> Result<ContentDirectory, ScanError> {
        self.stack.enter(path)?;
        let result = self.scan_entries(path, name, rel_path);
        self.stack.leave();
        result
    }

    fn scan_entries(
        &mut self,
        path: &Path,
        name: &str,
        rel_path: String,
    ) -> Result<ContentDirectory, ScanError> {
        let entries = (self.read)(path, self.diagnostics)?;

        let files: Vec<ContentFile> = entries
            .iter()
            .filter(|e| is_content_file(e))
            .map(|e| self.content_file(e))
            .collect();

        let config = self.config;
        let mut children = Vec::new();
        for entry in entries.iter().filter(|e| is_scanned_dir(e, config)) {
            let child_rel = format!("{rel_path}/{}", entry.name);
            if let Some(child) = self.scan_child(&entry.path, &entry.name, child_rel) {
                children.push(child);
            }
        }

        let has_index = files.iter().any(|f| f.is_index);
        let title = if files.is_empty() && children.is_empty() {
            name.to_string()
        } else {
            resolve_directory_title(path, self.config, self.diagnostics)
        };

        Ok(ContentDirectory {
            name: name.to_string(),
            rel_path,
            title,
            has_index,
            files,
            children,
        })
    }

    fn content_file(&self, entry: &Entry) -> ContentFile {
        let is_index = entry.name == self.config.index_file;
        let title = if is_index {
            String::new()
        } else {
            resolve_file_title(&entry.path, self.config, self.diagnostics)
        };
        let slug = entry
            .name
            .strip_suffix(".md")
            .unwrap_or(&entry.name)
            .to_string();
        ContentFile {
            order: extract_order(&entry.name),
            file_name: entry.name.clone(),
            title,
            slug,
            is_index,
        }
    }
}

/// Scan the content root into a [`ContentTree`].
///
/// Fails only when the root itself cannot be read.
pub fn scan_tree(
    root: &Path,
    config: &NavConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<ContentTree, ScanError> {
    scan_tree_with(root, config, diagnostics, read_entries)
}

fn scan_tree_with(
    root: &Path,
    config: &NavConfig,
    diagnostics: &dyn Diagnostics,
    read: ReadEntries,
) -> Result<ContentTree, ScanError> {
    let mut scanner = Scanner {
        config,
        diagnostics,
        read,
        stack: RecursionStack::default(),
    };
    scanner.stack.enter(root)?;

    let mut sections = Vec::new();
    for entry in top_level_entries(root, config, diagnostics, read)? {
        let rel_path = entry.name.clone();
        if let Some(dir) = scanner.scan_child(&entry.path, &entry.name, rel_path) {
            sections.push(dir);
        }
    }

    tracing::debug!(root = %root.display(), sections = sections.len(), "Content scan completed");
    Ok(ContentTree {
        root: root.to_path_buf(),
        sections,
    })
}
