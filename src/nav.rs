//! Top navigation compilation.
//!
//! The home entry comes first, then one entry per top-level section in scan
//! order. Below a section, only directories the sidebar did *not* claim are
//! shown, and claimed directories are not descended into:
//!
//! ```text
//! golang/              (no direct content)
//! ├── core/            claimed   → not in nav
//! └── web/             unclaimed → nav group "web"
//!     ├── gin/         claimed   → not in nav
//!     └── echo/        claimed   → not in nav
//! ```
//!
//! A node whose unclaimed children yield nothing degrades to a link to its
//! own route prefix; `web` above becomes `{ text: "web", link: "/golang/web/" }`
//! and `golang` becomes a group holding it.

use crate::config::HomeConfig;
use crate::naming::NameOrder;
use crate::scan::{ContentDirectory, ContentTree};
use crate::sidebar::SidebarPlan;
use crate::types::{ClaimedPathSet, NavItem, SiteNavigation};

/// Unclaimed child branches of `dir`, in name order.
fn branches(dir: &ContentDirectory, claimed: &ClaimedPathSet, order: &NameOrder) -> Vec<NavItem> {
    let mut children: Vec<&ContentDirectory> = dir
        .children
        .iter()
        .filter(|c| !claimed.contains(&c.rel_path) && c.has_content_transitively())
        .collect();
    order.sort_by_name(&mut children, |c| c.name.as_str());
    children
        .into_iter()
        .map(|c| nav_node(c, claimed, order))
        .collect()
}

fn nav_node(dir: &ContentDirectory, claimed: &ClaimedPathSet, order: &NameOrder) -> NavItem {
    let items = branches(dir, claimed, order);
    if items.is_empty() {
        NavItem::link(dir.title.clone(), dir.route())
    } else {
        NavItem::group(dir.title.clone(), items)
    }
}

/// Compile the top navigation from the tree and the sidebar's claims.
///
/// Consumes the plan and returns it alongside the nav as the final
/// [`SiteNavigation`].
pub fn compile_nav(
    tree: &ContentTree,
    plan: SidebarPlan,
    home: &HomeConfig,
    order: &NameOrder,
) -> SiteNavigation {
    let mut nav = vec![NavItem::link(home.text.clone(), home.link.clone())];
    nav.extend(
        tree.sections
            .iter()
            .filter(|s| s.has_content_transitively())
            .map(|s| nav_node(s, &plan.claimed, order)),
    );
    tracing::debug!(entries = nav.len(), "Nav compiled");

    SiteNavigation {
        nav,
        sidebar: plan.sidebar,
    }
}
