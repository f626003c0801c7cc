//! Display titles for content files and directories.
//!
//! ## Files
//!
//! First available wins:
//!
//! 1. `title` from the YAML front matter
//! 2. the file stem with its order prefix stripped
//!
//! If the *file name* carries an order prefix, the result is re-prefixed with
//! that number: `3-intro.md` → "3. intro". An order typed inside the
//! front-matter title is discarded in favour of the file name's, so
//! `title: "5. Intro"` in `3-intro.md` still reads "3. Intro". Files without
//! an order prefix show their front-matter title as written, so
//! `title: "1.5 版本说明"` in `release.md` stays intact.
//!
//! ## Directories
//!
//! 1. trimmed contents of the marker file (`title.txt`)
//! 2. front-matter title of the index file (`index.md`)
//! 3. the raw directory name
//!
//! Read and parse failures go to the diagnostics sink and fall through to the
//! next tier. The last tier never fails.

use crate::config::NavConfig;
use crate::diagnostics::{Diagnostics, Warning};
use crate::frontmatter;
use crate::naming::{extract_order, strip_order_prefix};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Front-matter title of a file, reporting failures as warnings.
fn front_matter_title(path: &Path, diagnostics: &dyn Diagnostics) -> Option<String> {
    match frontmatter::read_title(path) {
        Ok(title) => title,
        Err(e) => {
            diagnostics.warn(Warning::FrontMatter(e));
            None
        }
    }
}

/// Compose a file title from an optional front-matter title and the file name.
///
/// Pure part of [`resolve_file_title`].
pub fn compose_file_title(file_name: &str, meta_title: Option<&str>, delimiter: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());

    let order = extract_order(file_name);
    // Only a file-name order replaces one typed into the title.
    let base = meta_title
        .map(str::trim)
        .map(|t| if order.is_some() { strip_order_prefix(t).trim() } else { t })
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| strip_order_prefix(&stem));

    match order {
        Some(order) if base.is_empty() => order.to_string(),
        Some(order) => format!("{order}{delimiter}{base}"),
        None if base.is_empty() => stem.clone(),
        None => base.to_string(),
    }
}

/// Resolve the display title of a content file.
pub fn resolve_file_title(path: &Path, config: &NavConfig, diagnostics: &dyn Diagnostics) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let meta = front_matter_title(path, diagnostics);
    compose_file_title(&file_name, meta.as_deref(), &config.title_delimiter)
}

/// Read the directory title marker, if present and non-empty.
fn read_marker(dir: &Path, config: &NavConfig, diagnostics: &dyn Diagnostics) -> Option<String> {
    let path = dir.join(&config.marker_file);
    match fs::read_to_string(&path) {
        Ok(content) => {
            let title = content.trim();
            (!title.is_empty()).then(|| title.to_string())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(source) => {
            diagnostics.warn(Warning::Marker { path, source });
            None
        }
    }
}

/// Resolve the display title of a directory.
pub fn resolve_directory_title(
    dir: &Path,
    config: &NavConfig,
    diagnostics: &dyn Diagnostics,
) -> String {
    if let Some(title) = read_marker(dir, config, diagnostics) {
        return title;
    }

    let index = dir.join(&config.index_file);
    if index.is_file()
        && let Some(title) = front_matter_title(&index, diagnostics)
    {
        return title;
    }

    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
