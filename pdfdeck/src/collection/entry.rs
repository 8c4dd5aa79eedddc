//! Document entries and ingestion candidates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Display names longer than this are truncated.
pub const DISPLAY_NAME_LIMIT: usize = 15;

/// Characters kept from a truncated display name, before the ellipsis.
const DISPLAY_NAME_KEEP: usize = 12;

/// Stable identity of an entry within one collection.
///
/// Assigned at ingestion and never reused for the lifetime of the
/// collection, so two entries with the same file name stay distinct and an
/// entry can be found again after any number of reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value, for display and serialization.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declared media type of a candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaType(String);

impl MediaType {
    /// The only media type accepted for ingestion.
    pub const PDF: &'static str = "application/pdf";

    /// Create a media type from its string form.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_ascii_lowercase())
    }

    /// The PDF media type.
    pub fn pdf() -> Self {
        Self(Self::PDF.to_string())
    }

    /// Derive the declared type from a file name's extension.
    ///
    /// Mirrors what a file picker reports: the type follows the extension
    /// and says nothing about the actual content.
    pub fn from_file_name(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let value = match extension.as_deref() {
            Some("pdf") => Self::PDF,
            Some("txt") => "text/plain",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("html") | Some("htm") => "text/html",
            Some("json") => "application/json",
            Some("zip") => "application/zip",
            _ => "application/octet-stream",
        };

        Self(value.to_string())
    }

    /// Whether this type indicates a PDF document.
    pub fn is_pdf(&self) -> bool {
        self.0 == Self::PDF
    }

    /// String form of the media type.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an entry's raw bytes live.
///
/// Bytes are not held by the entry; they are read each time a preview or a
/// merge needs them.
#[derive(Debug, Clone)]
pub enum Source {
    /// A file on disk.
    Path(PathBuf),
    /// Bytes already in memory, shared between clones.
    Memory(Arc<[u8]>),
}

/// A file offered for ingestion.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Original file name.
    pub name: String,
    /// Declared media type.
    pub media_type: MediaType,
    /// Where the bytes come from.
    pub source: Source,
}

impl Candidate {
    /// Candidate backed by a file on disk; the type follows the extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = MediaType::from_file_name(&name);

        Self {
            name,
            media_type,
            source: Source::Path(path),
        }
    }

    /// Candidate backed by in-memory bytes with an explicit declared type.
    pub fn from_bytes(
        name: impl Into<String>,
        media_type: MediaType,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type,
            source: Source::Memory(bytes.into()),
        }
    }

    /// In-memory PDF candidate.
    pub fn pdf(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::from_bytes(name, MediaType::pdf(), bytes)
    }

    /// Whether the declared type makes this candidate acceptable.
    pub fn is_pdf(&self) -> bool {
        self.media_type.is_pdf()
    }
}

/// One document queued for merging.
#[derive(Debug, Clone)]
pub struct DocumentEntry {
    id: EntryId,
    name: String,
    media_type: MediaType,
    source: Source,
}

impl DocumentEntry {
    pub(crate) fn from_candidate(id: EntryId, candidate: Candidate) -> Self {
        Self {
            id,
            name: candidate.name,
            media_type: candidate.media_type,
            source: candidate.source,
        }
    }

    /// Stable identity.
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Original file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name shortened for a tile label.
    pub fn display_name(&self) -> String {
        truncate_display_name(&self.name)
    }

    /// Declared media type at ingestion.
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// Where the bytes come from.
    pub fn source(&self) -> &Source {
        &self.source
    }
}

/// Shorten a name longer than 15 characters to 12 characters and `...`.
pub fn truncate_display_name(name: &str) -> String {
    if name.chars().count() > DISPLAY_NAME_LIMIT {
        let kept: String = name.chars().take(DISPLAY_NAME_KEEP).collect();
        format!("{kept}...")
    } else {
        name.to_string()
    }
}
