//! Progress reporting using indicatif.
//!
//! The pipeline reports through the [`ProgressCallback`] trait so it has
//! no direct dependency on any terminal library; [`Progress`] is the
//! indicatif-backed implementation used by the CLI.

use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress callback for the duplicate detection passes.
pub trait ProgressCallback: Send + Sync {
    /// Called when a pass starts.
    ///
    /// # Arguments
    ///
    /// * `pass` - Name of the pass (e.g., "screen", "confirm")
    /// * `total` - Number of files entering the pass
    fn on_pass_start(&self, pass: &str, total: usize);

    /// Called for each file processed.
    ///
    /// # Arguments
    ///
    /// * `current` - Current file number (1-based)
    /// * `path` - Path being hashed
    fn on_progress(&self, current: usize, path: &str);

    /// Called when a pass completes.
    fn on_pass_end(&self, pass: &str);
}

/// Terminal progress bars, one per pass.
pub struct Progress {
    bar: Mutex<Option<ProgressBar>>,
    quiet: bool,
}

impl Progress {
    /// Create a new progress reporter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - If true, no progress bars are displayed.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            bar: Mutex::new(None),
            quiet,
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template("{prefix:>8} [{bar:30}] {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
    }
}

impl ProgressCallback for Progress {
    fn on_pass_start(&self, pass: &str, total: usize) {
        if self.quiet {
            return;
        }
        let bar = ProgressBar::new(total as u64)
            .with_style(Self::style())
            .with_prefix(pass.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    fn on_progress(&self, current: usize, path: &str) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(bar) = slot.as_ref() {
                bar.set_position(current as u64);
                bar.set_message(path.to_string());
            }
        }
    }

    fn on_pass_end(&self, _pass: &str) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
    }
}
