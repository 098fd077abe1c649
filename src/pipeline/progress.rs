// file: src/pipeline/progress.rs
// description: progress bar over the delete and index requests of a run
// reference: uses indicatif for progress bars

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    pub fn new(total_requests: usize, colored: bool) -> Self {
        let bar = ProgressBar::new(total_requests as u64);
        bar.set_style(progress_style(colored));
        Self { bar }
    }

    /// Tracker that never draws, for `--quiet` runs and tests.
    pub fn hidden() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden());
        Self { bar }
    }

    pub fn start_phase(&self, phase: &'static str) {
        self.bar.set_prefix(phase);
    }

    pub fn advance(&self, document_id: &str) {
        self.bar.set_message(document_id.to_string());
        self.bar.inc(1);
    }

    /// Runs `f` with the bar cleared so log lines are not torn.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.finish();
        }
    }
}

fn progress_style(colored: bool) -> ProgressStyle {
    let (template, chars) = if colored {
        (
            "{spinner:.green} {prefix:>8.bold} [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            "█▓▒░",
        )
    } else {
        ("{spinner} {prefix:>8} [{bar:40}] {pos}/{len} {msg}", "=>-")
    };

    ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(chars)
}
