//! Pointer and touch interaction.
//!
//! Raw input events go into a [`DragController`], which turns them into
//! [`Intent`]s for the deck to apply: reorder an entry, delete one, or ask
//! the user before deleting after a long press.

mod drag;

pub use drag::{DragController, DragInput, DragState, Intent, InteractionEvent, Point};
