//! The deck: single owner of the collection and everything derived from it.
//!
//! Every mutation goes through `&mut self` and finishes with a full grid
//! rebuild before the call returns, so the grid never lags the collection
//! that a later call sees.
//!
//! # Examples
//!
//! ```no_run
//! use pdfdeck::collection::Candidate;
//! use pdfdeck::{Config, Deck};
//!
//! # async fn example() -> pdfdeck::Result<()> {
//! let mut deck = Deck::new(Config::default());
//! deck.ingest([
//!     Candidate::from_path("a.pdf"),
//!     Candidate::from_path("b.pdf"),
//! ])
//! .await;
//! deck.reorder(1, 0).await?;
//!
//! let (merge, write) = deck.merge_and_save().await?;
//! println!("{} pages written to {}", merge.total_pages, write.output_path.display());
//! # Ok(())
//! # }
//! ```

use crate::collection::{Candidate, Collection, EntryId, IngestOutcome};
use crate::config::{Config, OverwriteMode};
use crate::error::{DeckError, Result};
use crate::interaction::{DragController, DragState, Intent, InteractionEvent};
use crate::io::{ArtifactWriter, WriteOptions, WriteStatistics};
use crate::merge::{MergeProgress, MergeStatistics, MergedDocument, Merger};
use crate::view::{
    DeleteZone, DropOverlay, GridView, MergeButton, PageOutlineRenderer, PreviewRenderer,
    ViewRenderer,
};

/// An ordered deck of PDF documents and its view state.
#[derive(Debug)]
pub struct Deck<R = PageOutlineRenderer> {
    config: Config,
    collection: Collection,
    view: ViewRenderer<R>,
    grid: GridView,
    drag: DragController,
    overlay: DropOverlay,
    merge_button: MergeButton,
    merger: Merger,
}

impl Deck<PageOutlineRenderer> {
    /// Create an empty deck using outline previews.
    pub fn new(config: Config) -> Self {
        Self::with_renderer(config, PageOutlineRenderer::new())
    }
}

impl<R: PreviewRenderer> Deck<R> {
    /// Create an empty deck with a custom preview renderer.
    pub fn with_renderer(config: Config, previews: R) -> Self {
        Self {
            view: ViewRenderer::new(previews, config.layout, config.preview_scale),
            drag: DragController::new(config.long_press(), config.touch_tolerance),
            merger: Merger::from_config(&config),
            collection: Collection::new(),
            grid: GridView::empty(0),
            overlay: DropOverlay::default(),
            merge_button: MergeButton::Ready,
            config,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The ordered collection.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// The most recent grid.
    pub fn grid(&self) -> &GridView {
        &self.grid
    }

    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Delete zone visibility.
    pub fn delete_zone(&self) -> DeleteZone {
        self.drag.delete_zone()
    }

    /// File-drop overlay.
    pub fn overlay(&self) -> &DropOverlay {
        &self.overlay
    }

    /// Merge button state.
    pub fn merge_button(&self) -> MergeButton {
        self.merge_button
    }

    /// Entry awaiting a delete confirmation.
    pub fn pending_confirmation(&self) -> Option<EntryId> {
        self.drag.pending_confirmation()
    }

    /// Add candidates to the end of the deck.
    ///
    /// The grid is rebuilt only when something was accepted.
    pub async fn ingest<I>(&mut self, candidates: I) -> IngestOutcome
    where
        I: IntoIterator<Item = Candidate>,
    {
        self.begin_interaction();
        let outcome = self.collection.ingest(candidates);
        if outcome.changed() {
            self.rebuild().await;
        }
        outcome
    }

    /// Move the entry at `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidPosition`] for a position outside the deck.
    pub async fn reorder(&mut self, from: usize, to: usize) -> Result<bool> {
        self.begin_interaction();
        let moved = self.collection.reorder(from, to)?;
        if moved {
            self.rebuild().await;
        }
        Ok(moved)
    }

    /// Remove an entry by identity. Returns whether it was present.
    pub async fn remove(&mut self, id: EntryId) -> bool {
        self.begin_interaction();
        let removed = self.collection.remove_by_identity(id).is_some();
        if removed {
            self.rebuild().await;
        }
        removed
    }

    /// Feed an interaction event and apply the intent it produces.
    ///
    /// Returns the intent so the host can react, e.g. open a confirmation
    /// prompt on [`Intent::ConfirmDelete`].
    ///
    /// # Errors
    ///
    /// Returns an error if a reorder intent names a position outside the deck.
    pub async fn handle(&mut self, event: InteractionEvent) -> Result<Option<Intent>> {
        if matches!(
            event,
            InteractionEvent::DragStart { .. }
                | InteractionEvent::TouchStart { .. }
                | InteractionEvent::DeleteButton { .. }
        ) {
            self.begin_interaction();
        }

        let intent = self.drag.handle(event, &self.grid);
        match intent {
            Some(Intent::Reorder { from, to }) => {
                self.reorder(from, to).await?;
            }
            Some(Intent::Delete(id)) => {
                self.remove(id).await;
            }
            Some(Intent::ConfirmDelete(id)) => {
                tracing::debug!(%id, "waiting for delete confirmation");
            }
            None => {}
        }

        Ok(intent)
    }

    /// Answer a pending delete confirmation.
    ///
    /// # Errors
    ///
    /// Never fails in practice; shares the error type of [`Deck::handle`].
    pub async fn confirm_delete(&mut self, accepted: bool) -> Result<Option<Intent>> {
        self.handle(InteractionEvent::ConfirmDelete { accepted }).await
    }

    /// Files are being dragged into the deck area.
    pub fn files_drag_enter(&mut self) {
        self.overlay.enter(self.collection.count());
    }

    /// Files left an element of the deck area.
    pub fn files_drag_leave(&mut self) {
        self.overlay.leave();
    }

    /// Files were dropped on the deck.
    pub async fn files_drop<I>(&mut self, candidates: I) -> IngestOutcome
    where
        I: IntoIterator<Item = Candidate>,
    {
        self.overlay.drop_files();
        self.ingest(candidates).await
    }

    /// Merge the deck in its current order.
    ///
    /// The collection is left untouched whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughDocuments`] with fewer than two entries,
    /// or [`DeckError::DecodeFailed`] naming the first entry that failed.
    pub async fn merge(&mut self) -> Result<MergedDocument> {
        self.merge_with_progress(|_| {}).await
    }

    /// Like [`Deck::merge`], reporting each entry as it is processed.
    pub async fn merge_with_progress<F>(&mut self, on_progress: F) -> Result<MergedDocument>
    where
        F: FnMut(MergeProgress<'_>),
    {
        self.begin_interaction();
        if !self.collection.can_merge() {
            return Err(DeckError::NotEnoughDocuments {
                count: self.collection.count(),
            });
        }

        self.merge_button = MergeButton::Merging;
        let result = self
            .merger
            .merge_with_progress(self.collection.entries(), on_progress)
            .await;

        self.merge_button = match &result {
            Ok(_) => MergeButton::Succeeded,
            Err(err) => {
                tracing::warn!(error = %err, "merge failed");
                MergeButton::Failed
            }
        };
        result
    }

    /// Merge and write the artifact to [`Config::output_path`].
    ///
    /// An existing file is replaced only with [`OverwriteMode::Force`].
    ///
    /// # Errors
    ///
    /// Returns merge errors as [`Deck::merge`] does, and
    /// [`DeckError::OutputExists`] or [`DeckError::FailedToWrite`] from the
    /// write.
    pub async fn merge_and_save(&mut self) -> Result<(MergeStatistics, WriteStatistics)> {
        self.merge_and_save_with_progress(|_| {}).await
    }

    /// Like [`Deck::merge_and_save`], reporting each merged entry.
    pub async fn merge_and_save_with_progress<F>(
        &mut self,
        on_progress: F,
    ) -> Result<(MergeStatistics, WriteStatistics)>
    where
        F: FnMut(MergeProgress<'_>),
    {
        let merged = self.merge_with_progress(on_progress).await?;
        let writer = ArtifactWriter::with_options(WriteOptions {
            overwrite_mode: self.config.overwrite_mode,
            ..Default::default()
        });

        match writer.save(merged.bytes, &self.config.output_path()).await {
            Ok(write) => Ok((merged.statistics, write)),
            Err(err) => {
                self.merge_button = MergeButton::Failed;
                Err(err)
            }
        }
    }

    /// Allow overwriting the artifact from now on, e.g. after the user
    /// agreed to replace it.
    pub fn allow_overwrite(&mut self) {
        self.config.overwrite_mode = OverwriteMode::Force;
    }

    fn begin_interaction(&mut self) {
        if self.merge_button != MergeButton::Merging {
            self.merge_button = MergeButton::Ready;
        }
    }

    async fn rebuild(&mut self) {
        self.grid = self.view.render(&self.collection).await;
    }
}
