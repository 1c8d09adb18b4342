//! Progress display for the rendering pass

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Rendering [{bar:40.cyan/blue}] {pos}/{len} rows")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks rendered pixel rows; safe to advance from worker threads
pub struct RenderProgress {
    bar: ProgressBar,
}

impl Default for RenderProgress {
    fn default() -> Self {
        Self::hidden()
    }
}

impl RenderProgress {
    /// Visible progress bar on stderr
    pub fn visible() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(ROW_STYLE.clone());
        Self { bar }
    }

    /// Progress tracking without any terminal output
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Progress shown unless `quiet`
    pub fn for_quiet(quiet: bool) -> Self {
        if quiet { Self::hidden() } else { Self::visible() }
    }

    /// Reset for a pass over `rows` rows
    pub fn start(&self, rows: u64) {
        self.bar.set_length(rows);
        self.bar.set_position(0);
    }

    /// Record one finished row
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Rows recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
