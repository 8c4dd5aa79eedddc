//! The grid view model and its renderer.
//!
//! This module turns the ordered collection into something a front end can
//! draw:
//! - [`GridView`] snapshots with one [`Tile`] per entry
//! - first-page previews through a [`PreviewRenderer`]
//! - grid geometry and the drag-over placement rule
//! - the file-drop overlay and the delete zone

mod grid;
mod layout;
mod overlay;
mod preview;
mod renderer;

pub use grid::{GridView, MergeButton, Tile, TilePreview};
pub use layout::{GridLayout, TileRect, insertion_index};
pub use overlay::{DeleteZone, DropOverlay};
pub use preview::{PageOutlineRenderer, Preview, PreviewError, PreviewRenderer};
pub use renderer::ViewRenderer;
