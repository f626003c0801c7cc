//! YAML front-matter extraction for content files.
//!
//! A content file may open with a metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: "Goroutines 与调度"
//! outline: deep
//! ---
//! # Body starts here
//! ```
//!
//! Only `title` is consumed. The block is parsed with serde_yaml so quoted,
//! block and plain scalars all resolve the same way; other keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("front matter in {} has no closing `---`", .0.display())]
    Unterminated(PathBuf),
    #[error("invalid YAML front matter in {}: {}", .path.display(), .source)]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl FrontMatterError {
    pub fn path(&self) -> &Path {
        match self {
            FrontMatterError::Io { path, .. }
            | FrontMatterError::Unterminated(path)
            | FrontMatterError::Yaml { path, .. } => path,
        }
    }
}

/// Return the raw YAML between the opening and closing fences.
///
/// `Ok(None)` when the file does not start with a fence; `Err(())` when the
/// opening fence is never closed.
fn fenced_block(content: &str) -> Result<Option<&str>, ()> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok(None);
    };
    if first.trim_end() != "---" {
        return Ok(None);
    }
    let start = first.len();
    let mut offset = start;
    for line in lines {
        let fence = line.trim_end();
        if fence == "---" || fence == "..." {
            return Ok(Some(&content[start..offset]));
        }
        offset += line.len();
    }
    Err(())
}

/// Render a YAML scalar as title text. Sequences and maps are not titles.
fn scalar_text(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse the `title` field from file content.
///
/// `path` is only used for error context. Surrounding quote characters that
/// survive YAML unquoting are removed, and blank titles count as absent.
pub fn parse_title(content: &str, path: &Path) -> Result<Option<String>, FrontMatterError> {
    let block = match fenced_block(content) {
        Ok(Some(block)) => block,
        Ok(None) => return Ok(None),
        Err(()) => return Err(FrontMatterError::Unterminated(path.to_path_buf())),
    };
    if block.trim().is_empty() {
        return Ok(None);
    }
    let value: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|source| FrontMatterError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
    let title = value
        .get("title")
        .and_then(scalar_text)
        .map(|t| t.trim().trim_matches(['"', '\'']).trim().to_string())
        .filter(|t| !t.is_empty());
    Ok(title)
}

/// Read a content file and return its front-matter title, if any.
pub fn read_title(path: &Path) -> Result<Option<String>, FrontMatterError> {
    let content = fs::read_to_string(path).map_err(|source| FrontMatterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_title(&content, path)
}
