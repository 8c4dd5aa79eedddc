//! Output formatting and display for pdfdeck.
//!
//! This module handles all user-facing output:
//! - Formatted status messages in quiet and verbose modes
//! - The text listing of the deck
//! - Merge progress and the final summary
//!
//! Diagnostics for developers go through `tracing` instead.
//!
//! # Examples
//!
//! ```no_run
//! use pdfdeck::output::OutputFormatter;
//! use pdfdeck::Config;
//!
//! # fn example(config: Config) {
//! let formatter = OutputFormatter::from_config(&config);
//! formatter.info("Merging 2 documents");
//! formatter.success("Merge completed successfully");
//! # }
//! ```

pub mod formatter;
pub mod progress;

pub use formatter::{MessageLevel, OutputFormatter, merge_summary, render_grid};
pub use progress::{ProgressBar, ProgressStyle};

use crate::collection::IngestOutcome;

/// Report skipped candidates of an ingestion.
pub fn display_ingest_outcome(formatter: &OutputFormatter, outcome: &IngestOutcome) {
    for name in &outcome.rejected {
        formatter.warning(&format!("Skipping {name}: not a PDF"));
    }

    formatter.debug(&format!(
        "Added {} document(s), skipped {}",
        outcome.accepted.len(),
        outcome.rejected.len()
    ));
}
