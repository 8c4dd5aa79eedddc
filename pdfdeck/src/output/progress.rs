//! Terminal progress for the merge.
//!
//! # Examples
//!
//! ```
//! use pdfdeck::output::{ProgressBar, ProgressStyle};
//!
//! let mut progress = ProgressBar::new(3, ProgressStyle::Bar);
//! progress.set_message("Merging");
//! for _ in 0..3 {
//!     progress.increment();
//! }
//! progress.finish();
//! ```

use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};

use crate::merge::MergeProgress;

/// Style of progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStyle {
    /// Classic progress bar: [=====>    ]
    Bar,
    /// Simple counter: 2/5
    Counter,
}

const BAR_WIDTH: usize = 30;

/// Single-line progress indicator, redrawn in place.
///
/// Draws nothing when stdout is not a terminal.
#[derive(Debug)]
pub struct ProgressBar {
    total: usize,
    current: usize,
    style: ProgressStyle,
    message: Option<String>,
    start_time: Instant,
    enabled: bool,
}

impl ProgressBar {
    /// Create a new progress bar.
    pub fn new(total: usize, style: ProgressStyle) -> Self {
        Self {
            total,
            current: 0,
            style,
            message: None,
            start_time: Instant::now(),
            enabled: io::stdout().is_terminal(),
        }
    }

    /// Create a disabled progress bar (no output).
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(0, ProgressStyle::Counter)
        }
    }

    /// Set the message to display with the progress bar.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Update the progress bar to a specific value.
    pub fn update(&mut self, current: usize) {
        self.current = current;
        self.draw();
    }

    /// Increment the progress bar by one.
    pub fn increment(&mut self) {
        self.update(self.current + 1);
    }

    /// Advance from a merge progress report.
    pub fn observe(&mut self, progress: MergeProgress<'_>) {
        self.total = progress.total;
        self.set_message(progress.name);
        self.update(progress.index + 1);
    }

    /// Mark the progress bar as finished.
    pub fn finish(&mut self) {
        self.current = self.total;
        if self.enabled {
            self.draw();
            println!();
        }
    }

    /// Clear the progress bar from the terminal.
    pub fn clear(&self) {
        if self.enabled {
            print!("\r\x1b[K");
            io::stdout().flush().ok();
        }
    }

    /// Current progress percentage.
    pub fn percent(&self) -> f64 {
        if self.total > 0 {
            self.current as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    fn draw(&self) {
        if self.enabled {
            print!("\r\x1b[K{}", self.render());
            io::stdout().flush().ok();
        }
    }

    fn render(&self) -> String {
        let counter = format!("{}/{}", self.current, self.total);
        let mut parts = Vec::with_capacity(4);

        if let Some(message) = &self.message {
            parts.push(message.clone());
        }
        if self.style == ProgressStyle::Bar {
            let filled = BAR_WIDTH * self.current / self.total.max(1);
            let head = if filled > 0 && filled < BAR_WIDTH { ">" } else { "" };
            let body = "=".repeat(filled.saturating_sub(head.len()));
            parts.push(format!("[{body}{head}{}]", " ".repeat(BAR_WIDTH - filled)));
        }
        parts.push(counter);
        parts.push(format_duration(self.start_time.elapsed()));

        parts.join(" ")
    }
}

/// Format a duration as a human-readable string.
fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}
