//! Navigation configuration.
//!
//! Handles loading, validating, and merging an optional `nav.toml` at the
//! content root. Stock defaults match a VitePress `docs/` tree with Chinese
//! content; a user file overrides only the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! locale = "zh-CN"            # Collation for names without an order prefix
//! index_file = "index.md"     # Section landing page
//! marker_file = "title.txt"   # Single-line directory title override
//! title_delimiter = ". "      # Between the order number and the title
//! exclude = [".vitepress", "components"]
//!
//! [home]
//! text = "首页"
//! link = "/"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming::NameOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of the optional config at the content root.
pub const CONFIG_FILE: &str = "nav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Locale error: {0}")]
    Locale(String),
}

/// Navigation compiler configuration loaded from `nav.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// BCP-47 locale used to collate names without an order prefix.
    pub locale: String,
    /// Name of the landing page inside a directory.
    pub index_file: String,
    /// Name of the file whose trimmed contents override a directory title.
    pub marker_file: String,
    /// Text placed between an order number and the title it prefixes.
    pub title_delimiter: String,
    /// Directory names never scanned, at any depth.
    pub exclude: Vec<String>,
    /// The fixed first entry of the top navigation.
    pub home: HomeConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            locale: "zh-CN".to_string(),
            index_file: "index.md".to_string(),
            marker_file: "title.txt".to_string(),
            title_delimiter: ". ".to_string(),
            exclude: vec![".vitepress".to_string(), "components".to_string()],
            home: HomeConfig::default(),
        }
    }
}

/// Home entry of the top navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HomeConfig {
    pub text: String,
    pub link: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            text: "首页".to_string(),
            link: "/".to_string(),
        }
    }
}

impl NavConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.index_file.ends_with(".md") || self.index_file.len() <= ".md".len() {
            return Err(ConfigError::Validation(
                "index_file must be a non-empty .md file name".into(),
            ));
        }
        if self.index_file.contains('/') || self.marker_file.contains('/') {
            return Err(ConfigError::Validation(
                "index_file and marker_file must be plain file names".into(),
            ));
        }
        if self.marker_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "marker_file must not be empty".into(),
            ));
        }
        if self.home.text.trim().is_empty() || self.home.link.trim().is_empty() {
            return Err(ConfigError::Validation(
                "home.text and home.link must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Whether a directory name is excluded from scanning.
    pub fn is_excluded(&self, name: &str) -> bool {
        name.starts_with('.') || self.exclude.iter().any(|e| e == name)
    }

    /// Build the name ordering for the configured locale.
    pub fn name_order(&self) -> Result<NameOrder, ConfigError> {
        NameOrder::new(&self.locale).map_err(ConfigError::Locale)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(NavConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   `exclude` list replaces the default list rather than extending it.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `nav.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<NavConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: NavConfig = merged.try_into()?;
    config.validate()?;
    config.name_order()?;
    Ok(config)
}

/// Load config from `nav.toml` in the content root.
pub fn load_config(root: &Path) -> Result<NavConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `nav.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docs-nav Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Place this file at the content root
# as nav.toml. Unknown keys will cause an error.

# Locale used to order names that carry no numeric prefix.
# Numbered names ("1.intro.md", "02-setup", "3、概览") always come first.
locale = "zh-CN"

# Landing page of a directory. When present, the directory's sidebar starts
# with an entry linking to the directory itself.
index_file = "index.md"

# Single-line file whose contents override a directory's display title.
marker_file = "title.txt"

# Placed between the order number and the title: "3-intro.md" -> "3. intro".
title_delimiter = ". "

# Directory names never scanned, at any depth. Hidden entries are always
# skipped.
exclude = [".vitepress", "components"]

# ---------------------------------------------------------------------------
# First entry of the top navigation
# ---------------------------------------------------------------------------
[home]
text = "首页"
link = "/"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = NavConfig::default();
        assert_eq!(config.locale, "zh-CN");
        assert_eq!(config.index_file, "index.md");
        assert_eq!(config.marker_file, "title.txt");
        assert_eq!(config.title_delimiter, ". ");
        assert_eq!(config.home.text, "首页");
        assert_eq!(config.home.link, "/");
    }

    #[test]
    fn default_config_is_valid() {
        assert!(NavConfig::default().validate().is_ok());
    }

    #[test]
    fn excluded_names() {
        let config = NavConfig::default();
        assert!(config.is_excluded(".vitepress"));
        assert!(config.is_excluded("components"));
        assert!(config.is_excluded(".git"));
        assert!(!config.is_excluded("golang"));
    }

    #[test]
    fn parse_partial_config() {
        let config: NavConfig = toml::from_str("locale = \"en\"\n").unwrap();
        assert_eq!(config.locale, "en");
        assert_eq!(config.index_file, "index.md");
        assert_eq!(config.home.text, "首页");
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: NavConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, NavConfig::default());
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_nested_table_keeps_siblings() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[home]\ntext = \"Home\"\n").unwrap();
        let config: NavConfig = merge_toml(base, overlay).try_into().unwrap();
        assert_eq!(config.home.text, "Home");
        assert_eq!(config.home.link, "/");
    }

    #[test]
    fn merge_list_replaces() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("exclude = [\"drafts\"]\n").unwrap();
        let config: NavConfig = merge_toml(base, overlay).try_into().unwrap();
        assert_eq!(config.exclude, vec!["drafts".to_string()]);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load_config(tmp.path()).unwrap(), NavConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "title_delimiter = \" - \"\n[home]\ntext = \"Start\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title_delimiter, " - ");
        assert_eq!(config.home.text, "Start");
        assert_eq!(config.locale, "zh-CN");
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "sidebar_depth = 2\n").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_toml_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "locale = \n").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn index_file_must_be_markdown() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "index_file = \"README\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn empty_home_text_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[home]\ntext = \"\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn bad_locale_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "locale = \"??\"\n").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Locale(_))));
    }
}
