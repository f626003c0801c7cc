//! # docs-nav
//!
//! Derives a site renderer's top navigation and per-section sidebars from a
//! documentation content tree, so authors never maintain either by hand.
//! The filesystem is the data source: directories become sections, markdown
//! files become pages, and numeric prefixes order them.
//!
//! # Architecture: One Pass, Three Stages
//!
//! ```text
//! 1. Scan      docs/        →  ContentTree      (filesystem → titled tree)
//! 2. Sidebar   ContentTree  →  SidebarPlan      (units + claimed paths)
//! 3. Nav       SidebarPlan  →  SiteNavigation   (nav + sidebar for the renderer)
//! ```
//!
//! Only stage 1 touches the filesystem. Stages 2 and 3 are pure functions over
//! the scanned tree, and the sidebar's claims flow into the nav pass by value
//! rather than through shared state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content root, classifies entries, guards against symlink cycles |
//! | [`title`] | Title precedence for files (front matter → file name) and directories (marker → index → name) |
//! | [`frontmatter`] | YAML front-matter `title` extraction |
//! | [`naming`] | Order-prefix grammar and the numeric-then-collated name order |
//! | [`sidebar`] | Sidebar units for every directory with direct content |
//! | [`nav`] | Top navigation over the directories the sidebar did not claim |
//! | [`compile`] | Runs one full pass |
//! | [`config`] | `nav.toml` loading, merging over defaults, validation |
//! | [`diagnostics`] | Injected warning sink (tracing-backed or recording) |
//! | [`types`] | Output types serialized for the renderer (`NavItem`, `SidebarItem`) |
//! | [`output`] | CLI display of a compiled navigation |
//!
//! # Design Decisions
//!
//! ## Ownership Before Navigation
//!
//! A directory with markdown files directly inside is owned by the sidebar.
//! The nav never nests an owned directory, so a page is reachable through
//! exactly one structure. Directories that only hold content further down
//! show up in the nav as groups, or as a single link when everything below
//! them is owned.
//!
//! ## The File Name Owns the Order
//!
//! `3-intro.md` is always shown as "3. …", even if its front-matter title
//! says "5. Intro". Reordering pages means renaming files; titles cannot drift
//! out of sync with the order readers see.
//!
//! ## Failures Shrink the Tree
//!
//! An unreadable directory or broken front matter is a warning, not an error.
//! The affected subtree or title tier drops out and the pass completes; a
//! build never fails because one page is malformed.

pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod frontmatter;
pub mod nav;
pub mod naming;
pub mod output;
pub mod scan;
pub mod sidebar;
pub mod title;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
