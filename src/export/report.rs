use std::path::PathBuf;

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// File that was written.
    pub path: PathBuf,
    /// Number of bodies drawn.
    pub exported: usize,
    /// Visible bodies that produced no outline.
    pub skipped: usize,
    /// Visible bodies considered.
    pub total: usize,
}

impl ExportReport {
    /// Returns `true` if every visible body was drawn.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }

    /// Human-readable summary; mentions skipped bodies only when there are
    /// any.
    #[must_use]
    pub fn message(&self) -> String {
        let saved = format!("SVG saved to {}", self.path.display());
        if self.skipped == 0 {
            saved
        } else {
            format!("{saved}\nskipped {}", self.skipped)
        }
    }
}
