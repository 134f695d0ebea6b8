//! "Typing..." spinner shown while a reply is pending

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner drawn while the busy flag is set. Cleared on drop.
pub struct TypingIndicator {
    bar: Option<ProgressBar>,
}

impl TypingIndicator {
    fn style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start the spinner, or a no-op indicator when `enabled` is false.
    pub fn start(enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message("Typing...");
        bar.enable_steady_tick(TICK_INTERVAL);
        Self { bar: Some(bar) }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    pub fn finish(mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for TypingIndicator {
    fn drop(&mut self) {
        self.clear();
    }
}
