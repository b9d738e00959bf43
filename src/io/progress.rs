//! Progress display for trial batches

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

static TRIAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>12}} [{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed trials and the running success count for one batch
///
/// Safe to update from several threads at once, which the parallel runner relies on.
pub struct TrialProgress {
    bar: ProgressBar,
    successes: AtomicU64,
}

impl TrialProgress {
    /// Create a visible progress bar labelled `label` for `trials` trials
    pub fn new(label: &str, trials: usize) -> Self {
        let bar = ProgressBar::new(trials as u64);
        bar.set_style(TRIAL_STYLE.clone());
        bar.set_prefix(label.to_string());
        bar.set_message("0 closed");
        Self {
            bar,
            successes: AtomicU64::new(0),
        }
    }

    /// Create a progress tracker that counts but never draws
    pub fn hidden(trials: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(trials as u64), ProgressDrawTarget::hidden());
        Self {
            bar,
            successes: AtomicU64::new(0),
        }
    }

    /// Record the result of one trial
    pub fn record(&self, success: bool) {
        if success {
            let closed = self.successes.fetch_add(1, Ordering::Relaxed) + 1;
            self.bar.set_message(format!("{closed} closed"));
        }
        self.bar.inc(1);
    }

    /// Number of trials recorded so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Number of successful trials recorded so far
    pub fn successes(&self) -> u64 {
        self.successes.load(Ordering::Relaxed)
    }

    /// Finish the bar and leave it on screen
    pub fn finish(&self) {
        self.bar.finish();
    }
}
