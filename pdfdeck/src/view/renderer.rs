//! Full-rebuild rendering of the grid.

use crate::collection::Collection;
use crate::error::DeckError;
use crate::io::SourceReader;
use crate::view::grid::{GridView, Tile, TilePreview};
use crate::view::layout::GridLayout;
use crate::view::preview::PreviewRenderer;

/// Builds a [`GridView`] from a collection.
///
/// Every call discards the previous grid and renders all tiles again, one
/// entry at a time in collection order. A preview failure only affects its
/// own tile, which falls back to the placeholder.
#[derive(Debug)]
pub struct ViewRenderer<R> {
    previews: R,
    reader: SourceReader,
    layout: GridLayout,
    scale: f32,
    generation: u64,
}

impl<R: PreviewRenderer> ViewRenderer<R> {
    /// Create a renderer.
    pub fn new(previews: R, layout: GridLayout, scale: f32) -> Self {
        Self {
            previews,
            reader: SourceReader::new(),
            layout,
            scale,
            generation: 0,
        }
    }

    /// Generation of the most recent rebuild.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Grid geometry.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Rebuild the grid from scratch.
    pub async fn render(&mut self, collection: &Collection) -> GridView {
        self.generation += 1;
        let generation = self.generation;

        tracing::debug!(generation, entries = collection.count(), "rebuilding grid");

        if collection.is_empty() {
            return GridView::empty(generation);
        }

        let mut tiles = Vec::with_capacity(collection.count());
        for (position, entry) in collection.entries().iter().enumerate() {
            let preview = match self.reader.load_entry(entry).await {
                Ok(loaded) => match self.previews.render_first_page(&loaded.bytes, self.scale) {
                    Ok(preview) => TilePreview::Rendered(preview),
                    Err(err) => {
                        let failure = DeckError::preview_failed(entry.display_name(), err.0);
                        tracing::warn!(error = %failure, "failed to render PDF preview");
                        TilePreview::Placeholder
                    }
                },
                Err(err) => {
                    tracing::warn!(name = entry.name(), error = %err, "failed to read PDF for preview");
                    TilePreview::Placeholder
                }
            };

            tiles.push(Tile {
                id: entry.id(),
                position,
                label: entry.display_name(),
                title: entry.name().to_string(),
                preview,
                rect: self.layout.rect_for(position),
            });
        }

        GridView {
            generation,
            tiles,
            empty_prompt_visible: false,
            add_more_visible: true,
            merge_enabled: collection.can_merge(),
        }
    }
}
