//! Reading entry bytes and turning paths into ingestion candidates.
//!
//! # Examples
//!
//! ```no_run
//! use pdfdeck::io::{SourceReader, collect_candidates};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let candidates = collect_candidates(["chapters/*.pdf"])?;
//! let reader = SourceReader::new();
//! for candidate in &candidates {
//!     let bytes = reader.read(&candidate.source).await?;
//!     println!("{}: {} bytes", candidate.name, bytes.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::io;
use std::time::{Duration, Instant};

use crate::Result;
use crate::collection::{Candidate, DocumentEntry, Source};
use crate::error::DeckError;
use crate::utils::collect_paths_for_patterns;

/// Bytes read for one entry, with timing.
#[derive(Debug)]
pub struct LoadedBytes {
    /// Raw bytes.
    pub bytes: Vec<u8>,
    /// Time taken to read them.
    pub load_time: Duration,
}

/// Reads raw bytes from entry sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceReader;

impl SourceReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self
    }

    /// Read all bytes of a source.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file source cannot be read.
    pub async fn read(&self, source: &Source) -> io::Result<Vec<u8>> {
        match source {
            Source::Path(path) => tokio::fs::read(path).await,
            Source::Memory(bytes) => Ok(bytes.to_vec()),
        }
    }

    /// Read an entry's bytes, naming the entry on failure.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ReadFailed`] carrying the entry's display name.
    pub async fn load_entry(&self, entry: &DocumentEntry) -> Result<LoadedBytes> {
        let start = Instant::now();
        let bytes = self
            .read(entry.source())
            .await
            .map_err(|e| DeckError::read_failed(entry.display_name(), e))?;

        Ok(LoadedBytes {
            bytes,
            load_time: start.elapsed(),
        })
    }
}

/// Expand paths and glob patterns into ingestion candidates.
///
/// Every match becomes a candidate, PDF or not; filtering by declared type
/// happens at ingestion.
///
/// # Errors
///
/// Returns an error if a pattern is malformed.
pub fn collect_candidates<T>(patterns: T) -> Result<Vec<Candidate>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let paths = collect_paths_for_patterns(patterns)?;
    Ok(paths.into_iter().map(Candidate::from_path).collect())
}
