//! Transient overlays: the file-drop overlay and the delete zone.

use serde::{Deserialize, Serialize};

/// Overlay shown while files are dragged over a non-empty deck.
///
/// Enter and leave events arrive for every nested element the pointer
/// crosses, so visibility follows a depth counter rather than single events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropOverlay {
    depth: usize,
    visible: bool,
}

impl DropOverlay {
    /// Files entered the deck area. `count` is the current collection size.
    pub fn enter(&mut self, count: usize) {
        self.depth += 1;
        if count > 0 && self.depth == 1 {
            self.visible = true;
        }
    }

    /// Files left an element of the deck area.
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            self.visible = false;
        }
    }

    /// Files were dropped; the overlay resets.
    pub fn drop_files(&mut self) {
        self.depth = 0;
        self.visible = false;
    }

    /// Whether the overlay is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Drop target for deleting a tile by dragging it away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteZone {
    /// Shown while a tile is being dragged with a pointer.
    pub visible: bool,
    /// The dragged tile is over the zone.
    pub highlighted: bool,
}

impl DeleteZone {
    pub(crate) fn show(&mut self) {
        self.visible = true;
        self.highlighted = false;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
        self.highlighted = false;
    }
}
