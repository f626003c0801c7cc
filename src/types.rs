//! Navigation data handed to the site renderer.
//!
//! Field names and shapes follow the renderer's theme configuration:
//! `{ text, link?, items? }` entries, and a sidebar keyed by route prefix.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Entry of the top navigation. Either a link or a group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

impl NavItem {
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            items: Vec::new(),
        }
    }

    pub fn group(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            link: None,
            items,
        }
    }

    pub fn is_group(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Entry of one section's sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
}

impl SidebarItem {
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            items: Vec::new(),
        }
    }
}

/// Route prefix (`/golang/core/`) → ordered sidebar entries.
pub type SidebarConfig = BTreeMap<String, Vec<SidebarItem>>;

/// Relative paths (`golang/core`) of directories owned by the sidebar.
pub type ClaimedPathSet = BTreeSet<String>;

/// Route prefix for a relative directory path: `golang/core` → `/golang/core/`.
pub fn route_prefix(rel_path: &str) -> String {
    if rel_path.is_empty() {
        "/".to_string()
    } else {
        format!("/{rel_path}/")
    }
}

/// The compiled pair, serialized as the renderer's `nav`/`sidebar` config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteNavigation {
    pub nav: Vec<NavItem>,
    pub sidebar: SidebarConfig,
}
