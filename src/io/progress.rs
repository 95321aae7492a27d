//! Per-cell progress display for copy and paste passes

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many grid cells a pass has handled
///
/// A hidden tracker still counts cells so callers can query the position,
/// it just never draws to the terminal
pub struct CellProgress {
    bar: ProgressBar,
}

impl CellProgress {
    /// Create a visible progress bar over `total` cells labelled with `label`
    pub fn new(label: &str, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(CELL_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Create a tracker that never renders
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Create a visible or hidden tracker depending on `quiet`
    pub fn for_run(label: &str, total: usize, quiet: bool) -> Self {
        if quiet {
            Self::hidden(total)
        } else {
            Self::new(label, total)
        }
    }

    /// Record that the cell at `path` has been handled
    pub fn advance(&self, path: &Path) {
        self.bar.set_message(path.display().to_string());
        self.bar.inc(1);
    }

    /// Number of cells handled so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of cells expected
    pub fn total(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Close the bar and leave a final message in place
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
