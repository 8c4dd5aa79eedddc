//! Grid geometry and the drag-over placement rule.

use serde::{Deserialize, Serialize};

/// Geometry of the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    /// Tiles per row.
    pub columns: usize,
    /// Height of one tile.
    pub tile_height: f32,
    /// Vertical gap between rows.
    pub row_gap: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 4,
            tile_height: 220.0,
            row_gap: 24.0,
        }
    }
}

impl GridLayout {
    /// Vertical extent of the tile at a grid slot.
    pub fn rect_for(&self, slot: usize) -> TileRect {
        let row = slot / self.columns.max(1);
        TileRect {
            top: row as f32 * (self.tile_height + self.row_gap),
            height: self.tile_height,
        }
    }

    /// Total height of a grid holding `count` tiles.
    pub fn content_height(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let rows = count.div_ceil(self.columns.max(1));
        rows as f32 * self.tile_height + (rows - 1) as f32 * self.row_gap
    }
}

/// Vertical extent of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileRect {
    /// Distance from the top of the grid.
    pub top: f32,
    /// Height of the tile.
    pub height: f32,
}

impl TileRect {
    /// Vertical midpoint.
    pub fn midpoint(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// Where a dragged tile lands for a pointer at vertical position `y`.
///
/// `siblings` are the rects of every tile except the dragged one, in
/// collection order. The dragged tile goes before the first sibling whose
/// midpoint is at or below `y`, or after all of them. The returned index is
/// the destination position in the collection once the dragged entry has
/// been taken out.
///
/// Pointer and touch drags both place tiles through this function.
pub fn insertion_index(siblings: &[TileRect], y: f32) -> usize {
    siblings
        .iter()
        .position(|rect| y <= rect.midpoint())
        .unwrap_or(siblings.len())
}
