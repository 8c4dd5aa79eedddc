//! User-facing messages and deck listings.
//!
//! # Examples
//!
//! ```
//! use pdfdeck::output::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Reading 3 file(s)");
//! formatter.success("Wrote merged-pdfs.pdf");
//! ```

use std::io::IsTerminal;

use crate::config::Config;
use crate::io::WriteStatistics;
use crate::merge::MergeStatistics;
use crate::view::{GridView, MergeButton, TilePreview};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Debug/verbose message.
    Debug,
}

impl MessageLevel {
    fn prefix(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "✓ ",
            Self::Warning => "⚠ ",
            Self::Error => "✗ ",
            Self::Debug => "→ ",
        }
    }

    fn color(self) -> Option<&'static str> {
        match self {
            Self::Info => None,
            Self::Success => Some("\x1b[32m"),
            Self::Warning => Some("\x1b[33m"),
            Self::Error => Some("\x1b[31m"),
            Self::Debug => Some("\x1b[36m"),
        }
    }
}

/// Output formatter with configurable verbosity.
///
/// Warnings and errors go to stderr and survive quiet mode; everything else
/// goes to stdout.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    quiet: bool,
    verbose: bool,
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: std::io::stdout().is_terminal() && std::env::var_os("TERM").is_some(),
        }
    }

    /// Create a formatter from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.quiet, config.verbose)
    }

    /// Create a quiet formatter (only warnings and errors).
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    /// Create a verbose formatter.
    pub fn verbose() -> Self {
        Self::new(false, true)
    }

    /// Print an informational message. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.format(MessageLevel::Info, message));
        }
    }

    /// Print a success message. Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.format(MessageLevel::Success, message));
        }
    }

    /// Print a warning message.
    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.format(MessageLevel::Warning, message));
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format(MessageLevel::Error, message));
    }

    /// Print a debug message. Only shown in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            println!("{}", self.format(MessageLevel::Debug, message));
        }
    }

    /// Print a labelled detail line. Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("  {label}: {value}");
        }
    }

    /// Print the deck listing. Suppressed in quiet mode.
    pub fn grid(&self, grid: &GridView, button: MergeButton) {
        if !self.quiet {
            print!("{}", render_grid(grid, button));
        }
    }

    /// Check if output should be shown.
    pub fn should_print(&self) -> bool {
        !self.quiet
    }

    /// Check if verbose output should be shown.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if quiet mode is enabled.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn format(&self, level: MessageLevel, message: &str) -> String {
        let prefix = level.prefix();
        match level.color() {
            Some(color) if self.colored => format!("{color}{prefix}{message}\x1b[0m"),
            _ => format!("{prefix}{message}"),
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// Text listing of a grid, one tile per line.
pub fn render_grid(grid: &GridView, button: MergeButton) -> String {
    if grid.is_empty() {
        return "No PDFs yet. Drop files here or pass them on the command line.\n".to_string();
    }

    let mut out = String::new();
    for tile in &grid.tiles {
        let preview = match &tile.preview {
            TilePreview::Rendered(preview) => format!(
                "{}x{}, {} page(s)",
                preview.width, preview.height, preview.page_count
            ),
            TilePreview::Placeholder => "[PDF]".to_string(),
        };
        out.push_str(&format!(
            "  {:>2}. {:<15}  {}  ({})\n",
            tile.position, tile.label, tile.id, preview
        ));
    }

    let merge = match (grid.merge_enabled, button) {
        (false, _) => "add at least 2 PDFs to merge".to_string(),
        (true, MergeButton::Ready) => "ready to merge".to_string(),
        (true, MergeButton::Merging) => "merging...".to_string(),
        (true, MergeButton::Succeeded) => "merged".to_string(),
        (true, MergeButton::Failed) => "last merge failed".to_string(),
    };
    out.push_str(&format!("  {} document(s), {merge}\n", grid.len()));
    out
}

/// One-line summary of a finished merge.
pub fn merge_summary(stats: &MergeStatistics, write: Option<&WriteStatistics>) -> String {
    let mut summary = format!(
        "Merged {} file(s), {} page(s), {} -> {} in {:.2}s",
        stats.files_merged,
        stats.total_pages,
        stats.format_input_size(),
        stats.format_output_size(),
        stats.merge_time.as_secs_f64()
    );
    if let Some(write) = write {
        summary.push_str(&format!(" -> {}", write.output_path.display()));
    }
    summary
}
