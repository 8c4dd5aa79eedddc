//! Merging the collection into one document.

use serde::Serialize;
use std::time::{Duration, Instant};

use crate::collection::{DocumentEntry, MIN_MERGE_COUNT};
use crate::config::Config;
use crate::error::{DeckError, Result};
use crate::io::SourceReader;
use crate::merge::compose::{OutputDocument, SourceDocument};
use crate::utils::format_file_size;

/// Statistics about a merge operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStatistics {
    /// Number of documents merged.
    pub files_merged: usize,

    /// Total number of pages in the merged document.
    pub total_pages: usize,

    /// Sum of the input sizes.
    pub input_bytes: u64,

    /// Size of the merged document.
    pub output_bytes: u64,

    /// Total time taken for the merge.
    pub merge_time: Duration,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_bytes)
    }

    /// Format output size as human-readable string.
    pub fn format_output_size(&self) -> String {
        format_file_size(self.output_bytes)
    }
}

/// A serialized merged document.
#[derive(Debug, Clone)]
pub struct MergedDocument {
    /// PDF bytes.
    pub bytes: Vec<u8>,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,
}

/// Progress report for one processed entry.
#[derive(Debug, Clone, Copy)]
pub struct MergeProgress<'a> {
    /// Zero-based index of the entry just processed.
    pub index: usize,
    /// Number of entries being merged.
    pub total: usize,
    /// Display name of the entry.
    pub name: &'a str,
    /// Pages the entry contributed.
    pub pages: usize,
}

/// Concatenates the pages of every entry, in order, into one document.
///
/// The merge is all-or-nothing: the first entry that cannot be read or
/// parsed aborts it and no bytes are produced.
#[derive(Debug, Clone)]
pub struct Merger {
    reader: SourceReader,
    compress: bool,
}

impl Merger {
    /// Create a merger that compresses its output.
    pub fn new() -> Self {
        Self {
            reader: SourceReader::new(),
            compress: true,
        }
    }

    /// Create a merger following the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_compression(config.compress)
    }

    /// Set whether the output streams are compressed.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Merge `entries` in order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than two entries are given (checked before any I/O)
    /// - An entry cannot be read or is not a readable PDF
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfdeck::collection::Collection;
    /// # use pdfdeck::merge::Merger;
    /// # async fn example(collection: &Collection) -> pdfdeck::Result<()> {
    /// let merged = Merger::new().merge(collection.entries()).await?;
    /// println!(
    ///     "Merged {} files into {} pages",
    ///     merged.statistics.files_merged, merged.statistics.total_pages
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub async fn merge(&self, entries: &[DocumentEntry]) -> Result<MergedDocument> {
        self.merge_with_progress(entries, |_| {}).await
    }

    /// Like [`Merger::merge`], reporting each entry once its pages are in.
    pub async fn merge_with_progress<F>(
        &self,
        entries: &[DocumentEntry],
        mut on_progress: F,
    ) -> Result<MergedDocument>
    where
        F: FnMut(MergeProgress<'_>),
    {
        if entries.len() < MIN_MERGE_COUNT {
            return Err(DeckError::NotEnoughDocuments {
                count: entries.len(),
            });
        }

        let start = Instant::now();
        let mut output = OutputDocument::create();
        output.set_compression(self.compress);
        let mut input_bytes = 0u64;

        for (index, entry) in entries.iter().enumerate() {
            let name = entry.display_name();
            let loaded = self
                .reader
                .load_entry(entry)
                .await
                .map_err(|e| DeckError::decode_failed(&name, failure_reason(e)))?;
            input_bytes += loaded.bytes.len() as u64;

            let pages = self
                .append(&mut output, &loaded.bytes)
                .map_err(|e| DeckError::decode_failed(&name, failure_reason(e)))?;

            tracing::debug!(%name, pages, "appended document");
            on_progress(MergeProgress {
                index,
                total: entries.len(),
                name: &name,
                pages,
            });
        }

        let total_pages = output.page_count();
        let bytes = output.save()?;

        let statistics = MergeStatistics {
            files_merged: entries.len(),
            total_pages,
            input_bytes,
            output_bytes: bytes.len() as u64,
            merge_time: start.elapsed(),
        };
        tracing::info!(
            files = statistics.files_merged,
            pages = statistics.total_pages,
            "merge complete"
        );

        Ok(MergedDocument { bytes, statistics })
    }

    fn append(&self, output: &mut OutputDocument, bytes: &[u8]) -> Result<usize> {
        let source = SourceDocument::load(bytes)?;
        let pages = output.copy_pages(source)?;
        let count = pages.len();
        for page in pages {
            output.add_page(page)?;
        }
        Ok(count)
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

fn failure_reason(err: DeckError) -> String {
    match err {
        DeckError::ReadFailed { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
