//! One compilation pass: scan → sidebar → nav.

use crate::config::{ConfigError, NavConfig};
use crate::diagnostics::Diagnostics;
use crate::nav::compile_nav;
use crate::naming::NameOrder;
use crate::scan::{ContentTree, ScanError, scan_tree};
use crate::sidebar::compile_sidebar;
use crate::types::SiteNavigation;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Project an already scanned tree into nav and sidebar.
pub fn build_navigation(tree: &ContentTree, config: &NavConfig, order: &NameOrder) -> SiteNavigation {
    let plan = compile_sidebar(tree, order);
    compile_nav(tree, plan, &config.home, order)
}

/// Scan `root` and compile its navigation.
///
/// Unreadable subtrees and bad front matter are reported to `diagnostics` and
/// left out; only an invalid locale or an unreadable root fail.
pub fn compile(
    root: &Path,
    config: &NavConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<SiteNavigation, CompileError> {
    let order = config.name_order()?;
    let tree = scan_tree(root, config, diagnostics)?;
    let site = build_navigation(&tree, config, &order);
    tracing::info!(
        root = %root.display(),
        nav_entries = site.nav.len(),
        sidebar_sections = site.sidebar.len(),
        "Navigation compiled"
    );
    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;
    use crate::test_helpers::*;
    use crate::types::NavItem;
    use tempfile::TempDir;

    fn run(root: &Path) -> (SiteNavigation, RecordingDiagnostics) {
        let diag = RecordingDiagnostics::new();
        let site = compile(root, &NavConfig::default(), &diag).unwrap();
        (site, diag)
    }

    #[test]
    fn empty_root_yields_home_only() {
        let tmp = TempDir::new().unwrap();
        let (site, diag) = run(tmp.path());
        assert_eq!(site.nav, vec![NavItem::link("首页", "/")]);
        assert!(site.sidebar.is_empty());
        assert!(diag.is_empty());
    }

    #[test]
    fn golang_scenario() {
        let tmp = TempDir::new().unwrap();
        write_files(
            tmp.path(),
            &[
                ("golang/core/index.md", "---\ntitle: 核心\n---\n"),
                ("golang/core/1.intro.md", "---\ntitle: 简介\n---\n"),
                ("golang/gin/index.md", ""),
                ("golang/gin/1.start.md", ""),
            ],
        );
        let (site, diag) = run(tmp.path());
        assert!(diag.is_empty());

        assert_eq!(sidebar_keys_of(&site), vec!["/golang/core/", "/golang/gin/"]);
        let core = &site.sidebar["/golang/core/"];
        assert_eq!(core.len(), 2);
        assert_eq!(core[0].text, "核心");
        assert_eq!(core[0].link.as_deref(), Some("/golang/core/"));
        assert_eq!(core[1].text, "1. 简介");
        assert_eq!(core[1].link.as_deref(), Some("/golang/core/1.intro"));

        let gin = &site.sidebar["/golang/gin/"];
        assert_eq!(gin[0].text, "gin");
        assert_eq!(gin[1].text, "1. start");

        assert_eq!(
            site.nav,
            vec![NavItem::link("首页", "/"), NavItem::link("golang", "/golang/")]
        );
    }

    #[test]
    fn custom_home_and_delimiter() {
        let tmp = TempDir::new().unwrap();
        write_files(tmp.path(), &[("guide/3-intro.md", "")]);
        let mut config = NavConfig::default();
        config.home.text = "Home".to_string();
        config.title_delimiter = " - ".to_string();

        let site = compile(tmp.path(), &config, &RecordingDiagnostics::new()).unwrap();
        assert_eq!(site.nav[0].text, "Home");
        assert_eq!(site.sidebar["/guide/"][0].text, "3 - intro");
    }

    #[test]
    fn invalid_locale_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let config = NavConfig {
            locale: "!!".to_string(),
            ..NavConfig::default()
        };
        let result = compile(tmp.path(), &config, &RecordingDiagnostics::new());
        assert!(matches!(result, Err(CompileError::Config(_))));
    }

    #[test]
    fn missing_root_is_scan_error() {
        let tmp = TempDir::new().unwrap();
        let result = compile(
            &tmp.path().join("missing"),
            &NavConfig::default(),
            &RecordingDiagnostics::new(),
        );
        assert!(matches!(result, Err(CompileError::Scan(_))));
    }
}
