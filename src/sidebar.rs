//! Sidebar compilation.
//!
//! Every directory that directly contains content files becomes a *sidebar
//! unit* keyed by its route prefix. Units nest freely: `golang/core` and
//! `golang/core/advanced` can both be units, each with its own sidebar.
//! Directories with content only further down get no entry of their own.
//!
//! ```text
//! golang/core/index.md       →  "/golang/core/": [
//! golang/core/2.types.md           { text: "Core",     link: "/golang/core/" },
//! golang/core/1.intro.md           { text: "1. intro", link: "/golang/core/1.intro" },
//!                                  { text: "2. types", link: "/golang/core/2.types" },
//!                                ]
//! ```
//!
//! The pass also records which directories it claimed; [`crate::nav`] takes
//! the resulting [`SidebarPlan`] by value so nothing is represented twice.

use crate::naming::NameOrder;
use crate::scan::{ContentDirectory, ContentFile, ContentTree};
use crate::types::{ClaimedPathSet, SidebarConfig, SidebarItem};

/// Sidebar configuration together with the directories it owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarPlan {
    pub sidebar: SidebarConfig,
    pub claimed: ClaimedPathSet,
}

impl SidebarPlan {
    pub fn is_claimed(&self, rel_path: &str) -> bool {
        self.claimed.contains(rel_path)
    }
}

/// Entries for one sidebar unit: the index header (if any), then the other
/// content files in name order.
pub fn unit_items(dir: &ContentDirectory, order: &NameOrder) -> Vec<SidebarItem> {
    let route = dir.route();
    let mut items = Vec::with_capacity(dir.files.len());

    if dir.has_index {
        items.push(SidebarItem::link(dir.title.clone(), route.clone()));
    }

    let mut pages: Vec<&ContentFile> = dir.files.iter().filter(|f| !f.is_index).collect();
    order.sort_by_name(&mut pages, |f| f.file_name.as_str());
    items.extend(
        pages
            .into_iter()
            .map(|f| SidebarItem::link(f.title.clone(), format!("{route}{}", f.slug))),
    );

    items
}

fn collect_units(dir: &ContentDirectory, order: &NameOrder, plan: &mut SidebarPlan) {
    if dir.has_direct_content() {
        let items = unit_items(dir, order);
        if !items.is_empty() {
            plan.sidebar.insert(dir.route(), items);
            plan.claimed.insert(dir.rel_path.clone());
        }
    }

    for child in dir.children.iter().filter(|c| c.has_content_transitively()) {
        collect_units(child, order, plan);
    }
}

/// Compile the sidebar for the whole tree.
pub fn compile_sidebar(tree: &ContentTree, order: &NameOrder) -> SidebarPlan {
    let mut plan = SidebarPlan::default();
    for section in &tree.sections {
        collect_units(section, order, &mut plan);
    }
    tracing::debug!(units = plan.sidebar.len(), "Sidebar compiled");
    plan
}
