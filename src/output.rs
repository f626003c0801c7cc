//! CLI output formatting for a compiled navigation.
//!
//! # Output Format
//!
//! ```text
//! Nav
//! 001 首页 → /
//! 002 Go 语言
//!     001 Web 框架 → /golang/web/
//! 003 tools → /tools/
//!
//! Sidebar
//! /golang/core/ (3 entries)
//!     001 核心 → /golang/core/
//!     002 1. 简介 → /golang/core/1.intro
//!     003 2. 类型 → /golang/core/2.types
//!
//! Compiled 3 nav entries, 1 sidebar section
//! ```
//!
//! `format_*` functions return lines and do no I/O; `print_*` wrappers write
//! them to stdout.

use crate::types::{NavItem, SidebarItem, SiteNavigation};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `001 title → link`, or `001 title` for groups.
fn entry_line(index: usize, text: &str, link: Option<&str>) -> String {
    match link {
        Some(link) => format!("{} {} → {}", format_index(index), text, link),
        None => format!("{} {}", format_index(index), text),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// A titled, optionally linked entry with nested children.
trait OutlineEntry: Sized {
    fn label(&self) -> &str;
    fn target(&self) -> Option<&str>;
    fn children(&self) -> &[Self];
}

impl OutlineEntry for NavItem {
    fn label(&self) -> &str {
        &self.text
    }
    fn target(&self) -> Option<&str> {
        self.link.as_deref()
    }
    fn children(&self) -> &[Self] {
        &self.items
    }
}

impl OutlineEntry for SidebarItem {
    fn label(&self) -> &str {
        &self.text
    }
    fn target(&self) -> Option<&str> {
        self.link.as_deref()
    }
    fn children(&self) -> &[Self] {
        &self.items
    }
}

fn push_entries<T: OutlineEntry>(items: &[T], depth: usize, lines: &mut Vec<String>) {
    for (i, item) in items.iter().enumerate() {
        lines.push(format!(
            "{}{}",
            indent(depth),
            entry_line(i + 1, item.label(), item.target())
        ));
        push_entries(item.children(), depth + 1, lines);
    }
}

/// Format the nav tree, the sidebar sections, and a summary line.
pub fn format_navigation(site: &SiteNavigation) -> Vec<String> {
    let mut lines = vec!["Nav".to_string()];
    push_entries(&site.nav, 0, &mut lines);

    if !site.sidebar.is_empty() {
        lines.push(String::new());
        lines.push("Sidebar".to_string());
        for (route, items) in &site.sidebar {
            lines.push(format!("{} ({})", route, plural(items.len(), "entry", "entries")));
            push_entries(items, 1, &mut lines);
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Compiled {}, {}",
        plural(site.nav.len(), "nav entry", "nav entries"),
        plural(site.sidebar.len(), "sidebar section", "sidebar sections"),
    ));
    lines
}

/// Print the formatted navigation to stdout.
pub fn print_navigation(site: &SiteNavigation) {
    for line in format_navigation(site) {
        println!("{}", line);
    }
}
