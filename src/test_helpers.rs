//! Shared test utilities for the docs-nav test suite.
//!
//! Provides fixture writers, in-memory tree builders, lookups that panic with
//! the available names on a miss, and navigation assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let core = dir_node("golang/core", "Core", vec![index(), file("1.intro.md", "1. intro")], vec![]);
//! let tree = tree(vec![dir_node("golang", "golang", vec![], vec![core])]);
//! let plan = compile_sidebar(&tree, &zh_order());
//! assert_eq!(sidebar_keys(&plan), vec!["/golang/core/"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::naming::{NameOrder, extract_order};
use crate::scan::{ContentDirectory, ContentFile, ContentTree};
use crate::sidebar::SidebarPlan;
use crate::types::{NavItem, SiteNavigation};

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `(relative path, content)` pairs under `root`, creating parents.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
}

pub fn zh_order() -> NameOrder {
    NameOrder::new("zh-CN").unwrap()
}

// =========================================================================
// In-memory tree builders
// =========================================================================

/// A non-index content file with an already resolved title.
pub fn file(file_name: &str, title: &str) -> ContentFile {
    ContentFile {
        file_name: file_name.to_string(),
        title: title.to_string(),
        slug: file_name.strip_suffix(".md").unwrap_or(file_name).to_string(),
        order: extract_order(file_name),
        is_index: false,
    }
}

pub fn index() -> ContentFile {
    ContentFile {
        file_name: "index.md".to_string(),
        title: String::new(),
        slug: "index".to_string(),
        order: None,
        is_index: true,
    }
}

pub fn dir_node(
    rel_path: &str,
    title: &str,
    files: Vec<ContentFile>,
    children: Vec<ContentDirectory>,
) -> ContentDirectory {
    ContentDirectory {
        name: rel_path.rsplit('/').next().unwrap_or(rel_path).to_string(),
        rel_path: rel_path.to_string(),
        title: title.to_string(),
        has_index: files.iter().any(|f| f.is_index),
        files,
        children,
    }
}

pub fn tree(sections: Vec<ContentDirectory>) -> ContentTree {
    ContentTree {
        root: PathBuf::from("docs"),
        sections,
    }
}

// =========================================================================
// Tree lookups (panic with the available names on a miss)
// =========================================================================

pub fn section_names(tree: &ContentTree) -> Vec<&str> {
    tree.sections.iter().map(|s| s.name.as_str()).collect()
}

/// Find a top-level section by directory name. Panics if not found.
pub fn find_section<'a>(tree: &'a ContentTree, name: &str) -> &'a ContentDirectory {
    tree.sections
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| {
            let names = section_names(tree);
            panic!("section '{name}' not found. Available: {names:?}")
        })
}

/// Find a child directory by name. Panics if not found.
pub fn find_child<'a>(dir: &'a ContentDirectory, name: &str) -> &'a ContentDirectory {
    dir.children
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| {
            let names: Vec<&str> = dir.children.iter().map(|c| c.name.as_str()).collect();
            panic!(
                "directory '{name}' not found in '{}'. Available: {names:?}",
                dir.rel_path
            )
        })
}

/// Find a content file by file name. Panics if not found.
pub fn find_file<'a>(dir: &'a ContentDirectory, file_name: &str) -> &'a ContentFile {
    dir.files
        .iter()
        .find(|f| f.file_name == file_name)
        .unwrap_or_else(|| {
            let names: Vec<&str> = dir.files.iter().map(|f| f.file_name.as_str()).collect();
            panic!(
                "file '{file_name}' not found in '{}'. Available: {names:?}",
                dir.rel_path
            )
        })
}

// =========================================================================
// Navigation helpers
// =========================================================================

pub fn sidebar_keys(plan: &SidebarPlan) -> Vec<&str> {
    plan.sidebar.keys().map(String::as_str).collect()
}

pub fn sidebar_keys_of(site: &SiteNavigation) -> Vec<&str> {
    site.sidebar.keys().map(String::as_str).collect()
}

/// Assert that no nav node below the top level links to a sidebar route.
pub fn assert_no_nested_link(item: &NavItem, site: &SiteNavigation, top_level: bool) {
    if !top_level && let Some(link) = &item.link {
        assert!(
            !site.sidebar.contains_key(link),
            "claimed route {link} appears nested in nav under '{}'",
            item.text
        );
    }
    for child in &item.items {
        assert_no_nested_link(child, site, false);
    }
}
