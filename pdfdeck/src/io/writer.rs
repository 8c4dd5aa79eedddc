//! Writing the merged artifact.
//!
//! The merged document arrives as serialized bytes. [`ArtifactWriter`]
//! writes them to a temporary sibling file and renames it into place, so a
//! failed write never leaves a truncated PDF behind.
//!
//! # Examples
//!
//! ```no_run
//! use pdfdeck::io::ArtifactWriter;
//! use std::path::Path;
//!
//! # async fn example(bytes: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = ArtifactWriter::new();
//! let stats = writer.save(bytes, Path::new("merged-pdfs.pdf")).await?;
//! println!("Wrote {}", stats.format_file_size());
//! # Ok(())
//! # }
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::config::OverwriteMode;
use crate::error::{DeckError, Result};
use crate::utils::format_file_size;

/// Options for writing the artifact.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// What to do when the target already exists.
    pub overwrite_mode: OverwriteMode,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            overwrite_mode: OverwriteMode::Force,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Writes serialized PDF bytes to disk.
#[derive(Debug, Clone, Default)]
pub struct ArtifactWriter {
    options: WriteOptions,
}

impl ArtifactWriter {
    /// Create a writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Write `bytes` to `path`.
    ///
    /// Creates missing parent directories. `OverwriteMode::Prompt` is
    /// treated as `NoClobber` here; prompting is the caller's business and
    /// happens before the write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target exists and overwriting is not allowed
    /// - Directories or the file cannot be created
    /// - Writing, flushing or the final rename fails
    pub async fn save(&self, bytes: Vec<u8>, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();

        if options.overwrite_mode != OverwriteMode::Force && self.exists(&path_buf).await {
            return Err(DeckError::output_exists(path_buf));
        }

        task::spawn_blocking(move || write_blocking(&bytes, path_buf, &options))
            .await
            .map_err(|e| DeckError::other(format!("Write task failed: {e}")))?
    }

    /// Check if output file exists.
    pub async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }
}

fn write_blocking(bytes: &[u8], path: PathBuf, options: &WriteOptions) -> Result<WriteStatistics> {
    let start = Instant::now();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| DeckError::FailedToWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let write_path = if options.atomic {
        path.with_extension("pdf.tmp")
    } else {
        path.clone()
    };

    let file = std::fs::File::create(&write_path).map_err(|e| DeckError::FailedToWrite {
        path: write_path.clone(),
        source: e,
    })?;

    let writer = std::io::BufWriter::with_capacity(options.buffer_size, file);
    write_or_discard(writer, bytes, &write_path, options.atomic)?;

    if options.atomic {
        std::fs::rename(&write_path, &path).map_err(|e| {
            let _ = std::fs::remove_file(&write_path);
            DeckError::FailedToWrite {
                path: path.clone(),
                source: e,
            }
        })?;
    }

    Ok(WriteStatistics {
        write_time: start.elapsed(),
        file_size: bytes.len() as u64,
        output_path: path,
    })
}

/// Write and flush `bytes`. On failure a temp file is removed so no
/// partial `*.pdf.tmp` stays behind.
fn write_or_discard<W: Write>(
    mut writer: W,
    bytes: &[u8],
    write_path: &Path,
    is_temp: bool,
) -> Result<()> {
    let result = writer.write_all(bytes).and_then(|()| writer.flush());
    drop(writer);

    result.map_err(|e| {
        if is_temp {
            let _ = std::fs::remove_file(write_path);
        }
        DeckError::FailedToWrite {
            path: write_path.to_path_buf(),
            source: e,
        }
    })
}
