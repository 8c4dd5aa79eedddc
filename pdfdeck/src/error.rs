//! Error types for pdfdeck.
//!
//! Errors fall into four groups:
//!
//! - **Validation**: a merge requested with fewer than two documents, an
//!   out-of-range position, an invalid configuration.
//! - **Decode**: an entry whose bytes cannot be read or parsed as PDF.
//! - **Preview**: a first page that cannot be rendered. Never escapes the
//!   view renderer, which substitutes a placeholder.
//! - **Output**: the merged artifact cannot be written.
//!
//! Ingestion of a non-PDF file and removal of an absent identity are not
//! errors at all.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfdeck operations.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Main error type for pdfdeck operations.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// A merge was requested with fewer than two documents.
    #[error("Please add at least two PDF files to merge (currently {count})")]
    NotEnoughDocuments {
        /// Number of documents in the deck.
        count: usize,
    },

    /// An entry's bytes could not be decoded as a PDF.
    #[error("Failed to process {name}\n  Reason: {reason}")]
    DecodeFailed {
        /// Display name of the failing entry.
        name: String,
        /// Reason reported by the PDF library.
        reason: String,
    },

    /// An entry's bytes could not be read from its source.
    #[error("Failed to read {name}\n  Reason: {source}")]
    ReadFailed {
        /// Display name of the failing entry.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The first page of an entry could not be rendered.
    #[error("Failed to render preview for {name}: {reason}")]
    PreviewFailed {
        /// Display name of the entry.
        name: String,
        /// Reason for the failure.
        reason: String,
    },

    /// A position outside the collection was used for a reorder.
    #[error("Position {position} is out of range for a deck of {len} document(s)")]
    InvalidPosition {
        /// Requested position.
        position: usize,
        /// Collection length at the time of the request.
        len: usize,
    },

    /// Output file already exists and overwrite is not allowed.
    #[error(
        "Output file already exists: {}\n  Use --force to overwrite or choose a different output directory",
        path.display()
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to write the merged artifact.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// User cancelled the operation.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for DeckError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl DeckError {
    /// Create a DecodeFailed error.
    pub fn decode_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DecodeFailed {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a ReadFailed error.
    pub fn read_failed(name: impl Into<String>, source: io::Error) -> Self {
        Self::ReadFailed {
            name: name.into(),
            source,
        }
    }

    /// Create a PreviewFailed error.
    pub fn preview_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PreviewFailed {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether this error is meant to be shown to the user as an alert.
    ///
    /// Preview failures are logged only.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::PreviewFailed { .. })
    }

    /// Whether this error aborted a merge before any I/O took place.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NotEnoughDocuments { .. }
                | Self::InvalidPosition { .. }
                | Self::InvalidConfig { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotEnoughDocuments { .. } => 1,
            Self::InvalidPosition { .. } => 1,
            Self::InvalidConfig { .. } => 1,
            Self::ReadFailed { .. } => 2,
            Self::DecodeFailed { .. } => 3,
            Self::PreviewFailed { .. } => 3,
            Self::OutputExists { .. } => 4,
            Self::FailedToWrite { .. } => 5,
            Self::Io(_) => 5,
            Self::Cancelled => 130,
            Self::Other { .. } => 1,
        }
    }
}
