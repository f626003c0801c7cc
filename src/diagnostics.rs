//! Warning sink for recoverable scan and parse failures.
//!
//! Unreadable directories, malformed front matter and unreadable marker files
//! never abort a compilation pass. They are reported here and the affected
//! subtree or title tier is treated as empty. The sink is passed explicitly
//! into [`crate::scan::scan_tree`] and [`crate::compile`], so library code has
//! no ambient output.

use crate::frontmatter::FrontMatterError;
use crate::scan::ScanError;
use std::cell::RefCell;
use std::path::PathBuf;
use thiserror::Error;

/// A recoverable problem found while building navigation.
#[derive(Error, Debug)]
pub enum Warning {
    /// A directory subtree could not be scanned and was skipped.
    #[error("skipped subtree: {0}")]
    Scan(ScanError),
    /// A content file's front matter could not be read or parsed; the
    /// filename-derived title was used instead.
    #[error("ignored front matter: {0}")]
    FrontMatter(FrontMatterError),
    /// A directory title marker file exists but could not be read.
    #[error("ignored title marker {}: {}", .path.display(), .source)]
    Marker {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Receives warnings during a compilation pass.
pub trait Diagnostics {
    fn warn(&self, warning: Warning);
}

/// Forwards every warning to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, warning: Warning) {
        match &warning {
            Warning::Scan(e) => {
                tracing::warn!(path = %e.path().display(), error = %e, "Failed to scan directory");
            }
            Warning::FrontMatter(e) => {
                tracing::warn!(path = %e.path().display(), error = %e, "Failed to parse front matter");
            }
            Warning::Marker { path, source } => {
                tracing::warn!(path = %path.display(), error = %source, "Failed to read title marker");
            }
        }
    }
}

/// Collects warnings in memory, for tests and for callers that want to
/// report them after the pass.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    warnings: RefCell<Vec<Warning>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.warnings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }

    /// Drain the recorded warnings.
    pub fn take(&self) -> Vec<Warning> {
        self.warnings.take()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, warning: Warning) {
        self.warnings.borrow_mut().push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_collects_in_order() {
        let diag = RecordingDiagnostics::new();
        diag.warn(Warning::Scan(ScanError::Cycle(PathBuf::from("a"))));
        diag.warn(Warning::Marker {
            path: PathBuf::from("b/title.txt"),
            source: std::io::Error::other("boom"),
        });

        assert_eq!(diag.len(), 2);
        let warnings = diag.take();
        assert!(matches!(warnings[0], Warning::Scan(ScanError::Cycle(_))));
        assert!(matches!(warnings[1], Warning::Marker { .. }));
        assert!(diag.is_empty());
    }

    #[test]
    fn display_names_the_path() {
        let w = Warning::Marker {
            path: PathBuf::from("net/title.txt"),
            source: std::io::Error::other("denied"),
        };
        let text = w.to_string();
        assert!(text.contains("net/title.txt"));
        assert!(text.contains("denied"));
    }

    #[test]
    fn display_wraps_scan_error() {
        let w = Warning::Scan(ScanError::Cycle(PathBuf::from("golang/loop")));
        assert_eq!(
            w.to_string(),
            "skipped subtree: symlink cycle: golang/loop is already being scanned"
        );
    }

    #[test]
    fn marker_warning_exposes_io_source() {
        use std::error::Error as _;
        let w = Warning::Marker {
            path: PathBuf::from("net/title.txt"),
            source: std::io::Error::other("denied"),
        };
        assert_eq!(w.source().map(|s| s.to_string()).as_deref(), Some("denied"));
    }
}
