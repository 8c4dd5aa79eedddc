//! The ordered collection of documents queued for merging.
//!
//! Position in the collection is both display order and merge order. Every
//! entry carries an [`EntryId`] that stays valid across reorders, so
//! interactions address entries by identity rather than by index wherever
//! the index could have gone stale.
//!
//! # Examples
//!
//! ```
//! use pdfdeck::collection::{Candidate, Collection};
//!
//! let mut collection = Collection::new();
//! let outcome = collection.ingest(vec![
//!     Candidate::pdf("a.pdf", b"%PDF-1.4".to_vec()),
//!     Candidate::from_path("notes.txt"),
//! ]);
//!
//! assert_eq!(outcome.accepted.len(), 1);
//! assert_eq!(outcome.rejected, vec!["notes.txt".to_string()]);
//! assert_eq!(collection.count(), 1);
//! ```

mod entry;

pub use entry::{
    Candidate, DISPLAY_NAME_LIMIT, DocumentEntry, EntryId, MediaType, Source,
    truncate_display_name,
};

use crate::error::{DeckError, Result};

/// Minimum number of entries a merge needs.
pub const MIN_MERGE_COUNT: usize = 2;

/// Outcome of an ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Identities assigned to accepted candidates, in input order.
    pub accepted: Vec<EntryId>,
    /// Names of candidates whose declared type is not PDF.
    pub rejected: Vec<String>,
}

impl IngestOutcome {
    /// Whether at least one candidate was accepted.
    pub fn changed(&self) -> bool {
        !self.accepted.is_empty()
    }
}

/// Ordered collection of document entries.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    entries: Vec<DocumentEntry>,
    next_id: u64,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every PDF candidate to the end, in input order.
    ///
    /// Candidates whose declared type is not PDF are skipped without error;
    /// their names are returned in [`IngestOutcome::rejected`].
    pub fn ingest<I>(&mut self, candidates: I) -> IngestOutcome
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut outcome = IngestOutcome::default();

        for candidate in candidates {
            if !candidate.is_pdf() {
                tracing::debug!(
                    name = %candidate.name,
                    media_type = %candidate.media_type,
                    "skipping non-PDF candidate"
                );
                outcome.rejected.push(candidate.name);
                continue;
            }

            let id = self.allocate_id();
            tracing::debug!(%id, name = %candidate.name, "ingested document");
            self.entries.push(DocumentEntry::from_candidate(id, candidate));
            outcome.accepted.push(id);
        }

        outcome
    }

    /// Move the entry at `from` so that it ends up at position `to`.
    ///
    /// Returns `Ok(false)` when the positions are equal. Entries outside the
    /// range between the two positions keep their positions.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidPosition`] if either position is outside
    /// the collection; the collection is left unchanged.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<bool> {
        let len = self.entries.len();
        for position in [from, to] {
            if position >= len {
                return Err(DeckError::InvalidPosition { position, len });
            }
        }

        if from == to {
            return Ok(false);
        }

        let moved = self.entries.remove(from);
        tracing::debug!(id = %moved.id(), from, to, "reordered document");
        self.entries.insert(to, moved);

        Ok(true)
    }

    /// Remove the entry with the given identity.
    ///
    /// Removing an absent identity is a no-op and returns `None`.
    pub fn remove_by_identity(&mut self, id: EntryId) -> Option<DocumentEntry> {
        let position = self.position_of(id)?;
        let removed = self.entries.remove(position);
        tracing::debug!(%id, name = removed.name(), "removed document");
        Some(removed)
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a merge is permitted.
    pub fn can_merge(&self) -> bool {
        self.count() >= MIN_MERGE_COUNT
    }

    /// Entries in order.
    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    /// Identities in order.
    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(DocumentEntry::id).collect()
    }

    /// Look up an entry by identity.
    pub fn get(&self, id: EntryId) -> Option<&DocumentEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Entry at a position.
    pub fn at(&self, position: usize) -> Option<&DocumentEntry> {
        self.entries.get(position)
    }

    /// Current position of an entry.
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
