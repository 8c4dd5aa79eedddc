//! Configuration for a pdfdeck session.
//!
//! The CLI translates its arguments into a [`Config`]; library users build
//! one directly or start from [`Config::default`]. A validated configuration
//! drives previews, touch handling, grid geometry and the merged artifact.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::DeckError;
use crate::view::GridLayout;

/// File name of the merged artifact.
pub const DEFAULT_OUTPUT_NAME: &str = "merged-pdfs.pdf";

/// Scale applied to the first page when rendering a preview.
pub const DEFAULT_PREVIEW_SCALE: f32 = 0.3;

/// Hold time after which a touch press becomes a delete request.
pub const DEFAULT_LONG_PRESS_MS: u64 = 800;

/// Movement, in pixels, a touch press may drift before it becomes a drag.
pub const DEFAULT_TOUCH_TOLERANCE: f32 = 10.0;

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverwriteMode {
    /// Prompt the user before overwriting (default).
    #[default]
    Prompt,
    /// Always overwrite without prompting.
    Force,
    /// Never overwrite, error if file exists.
    NoClobber,
}

impl FromStr for OverwriteMode {
    type Err = DeckError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "prompt" => Ok(Self::Prompt),
            "force" => Ok(Self::Force),
            "no-clobber" => Ok(Self::NoClobber),
            _ => Err(DeckError::invalid_config(format!(
                "Invalid overwrite mode: {s}. Must be one of: prompt, force, no-clobber"
            ))),
        }
    }
}

/// Complete configuration for a deck session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory the merged artifact is written to.
    pub output_dir: PathBuf,

    /// File name of the merged artifact.
    pub output_name: String,

    /// Scale of the first-page preview.
    pub preview_scale: f32,

    /// Long-press threshold in milliseconds.
    pub long_press_ms: u64,

    /// Touch movement tolerance in pixels.
    pub touch_tolerance: f32,

    /// Grid geometry used for drag-over hit testing.
    pub layout: GridLayout,

    /// Compress object streams in the merged output.
    pub compress: bool,

    /// File overwrite behavior.
    pub overwrite_mode: OverwriteMode,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Dry run mode - merge in memory without writing the artifact.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            preview_scale: DEFAULT_PREVIEW_SCALE,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
            touch_tolerance: DEFAULT_TOUCH_TOLERANCE,
            layout: GridLayout::default(),
            compress: true,
            overwrite_mode: OverwriteMode::Prompt,
            verbose: false,
            quiet: false,
            dry_run: false,
        }
    }
}

impl Config {
    /// Full path of the merged artifact.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_name)
    }

    /// Long-press threshold as a duration.
    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output name is empty, contains a path separator or lacks a `.pdf` extension
    /// - The preview scale is not a positive finite number
    /// - The grid has zero columns or a non-positive tile height
    /// - Verbose and quiet modes are both enabled
    pub fn validate(&self) -> Result<()> {
        let name = self.output_name.trim();
        if name.is_empty() {
            bail!("Output file name cannot be empty");
        }

        if Path::new(name).file_name().map(|n| n != name).unwrap_or(true) {
            bail!("Output file name must not contain a directory: {name}");
        }

        if !name.to_lowercase().ends_with(".pdf") {
            bail!("Output file name must end with .pdf: {name}");
        }

        if !self.preview_scale.is_finite() || self.preview_scale <= 0.0 {
            bail!("Preview scale must be positive, got {}", self.preview_scale);
        }

        if self.touch_tolerance < 0.0 {
            bail!("Touch tolerance cannot be negative");
        }

        if self.layout.columns == 0 {
            bail!("Grid must have at least one column");
        }

        if self.layout.tile_height <= 0.0 {
            bail!("Tile height must be positive");
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        Ok(())
    }

    /// Check if output should be displayed.
    ///
    /// Returns false if in quiet mode and not doing a dry run.
    pub fn should_print(&self) -> bool {
        !self.quiet || self.dry_run
    }
}
