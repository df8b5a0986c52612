//! Spinner shown while an install writes files

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner on stderr; hidden when stderr is not a terminal
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .map(|style| style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]))
        {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb }
    }

    pub fn finish(self) {
        self.pb.finish_and_clear();
    }

    pub fn abandon(self) {
        self.pb.abandon();
    }
}
