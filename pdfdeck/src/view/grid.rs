//! The grid view model.
//!
//! A [`GridView`] is a snapshot: the renderer builds a fresh one from the
//! collection after every change and the previous one is dropped whole.

use serde::{Deserialize, Serialize};

use crate::collection::EntryId;
use crate::view::layout::TileRect;
use crate::view::preview::Preview;

/// What a tile shows in its preview slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TilePreview {
    /// First page rendered successfully.
    Rendered(Preview),
    /// Rendering failed; a generic PDF indicator is shown.
    Placeholder,
}

impl TilePreview {
    /// Whether the placeholder is shown.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// One tile of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Identity of the entry behind the tile.
    pub id: EntryId,
    /// Position in the collection.
    pub position: usize,
    /// Truncated label.
    pub label: String,
    /// Full file name, shown as a tooltip.
    pub title: String,
    /// Preview or placeholder.
    pub preview: TilePreview,
    /// Vertical extent used for drag-over hit testing.
    pub rect: TileRect,
}

/// State of the merge button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MergeButton {
    /// Idle and clickable when enough documents are present.
    #[default]
    Ready,
    /// A merge is running.
    Merging,
    /// The last merge produced an artifact.
    Succeeded,
    /// The last merge failed.
    Failed,
}

/// Snapshot of the rendered grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    /// Rebuild counter; grows by one with every full rebuild.
    pub generation: u64,
    /// Tiles in collection order.
    pub tiles: Vec<Tile>,
    /// Empty-state drop prompt.
    pub empty_prompt_visible: bool,
    /// "Add more" control.
    pub add_more_visible: bool,
    /// Whether the merge button accepts clicks.
    pub merge_enabled: bool,
}

impl GridView {
    /// Grid for an empty deck.
    pub fn empty(generation: u64) -> Self {
        Self {
            generation,
            tiles: Vec::new(),
            empty_prompt_visible: true,
            add_more_visible: false,
            merge_enabled: false,
        }
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile for an entry.
    pub fn tile(&self, id: EntryId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    /// Rects of every tile except `dragged`, in order.
    pub fn sibling_rects(&self, dragged: EntryId) -> Vec<TileRect> {
        self.tiles
            .iter()
            .filter(|tile| tile.id != dragged)
            .map(|tile| tile.rect)
            .collect()
    }

    /// Number of tiles showing the placeholder.
    pub fn placeholder_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.preview.is_placeholder())
            .count()
    }
}
