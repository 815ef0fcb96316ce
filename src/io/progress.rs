//! Progress display while cell files are written

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Tracks the number of cell files written so far
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    written: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static WRITE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Cells: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self {
            bar: None,
            written: 0,
        }
    }

    /// Start a bar for `cell_count` files
    pub fn initialize(&mut self, cell_count: usize) {
        if let Some(old) = self.bar.take() {
            old.finish_and_clear();
        }
        let bar = ProgressBar::new(cell_count as u64);
        bar.set_style(WRITE_STYLE.clone());
        self.bar = Some(bar);
        self.written = 0;
    }

    /// Record one written file
    pub fn advance(&mut self, path: &Path) {
        self.written += 1;
        if let Some(ref bar) = self.bar {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(name.to_string());
            bar.inc(1);
        }
    }

    /// Number of files recorded since the last [`Self::initialize`]
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Clear the bar from the terminal
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
