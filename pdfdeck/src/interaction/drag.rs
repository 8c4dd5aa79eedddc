//! Drag state machine shared by pointer and touch input.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::collection::EntryId;
use crate::view::{DeleteZone, GridView, insertion_index};

/// A position on screen, in the grid's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Input events the deck reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    /// A pointer drag of a tile started.
    DragStart {
        /// Dragged entry.
        id: EntryId,
    },
    /// The pointer moved over the grid during a drag.
    DragOver {
        /// Vertical pointer position.
        y: f32,
    },
    /// The dragged tile entered the delete zone.
    DeleteZoneEnter,
    /// The dragged tile left the delete zone.
    DeleteZoneLeave,
    /// The dragged tile was dropped on the grid.
    Drop,
    /// The dragged tile was dropped on the delete zone.
    DropOnDeleteZone,
    /// The pointer drag ended without a drop.
    DragEnd,
    /// A finger touched a tile.
    TouchStart {
        /// Touched entry.
        id: EntryId,
        /// Touch position.
        point: Point,
        /// When the touch started.
        at: Instant,
    },
    /// The finger moved.
    TouchMove {
        /// New touch position.
        point: Point,
        /// When the move happened.
        at: Instant,
    },
    /// The finger lifted.
    TouchEnd {
        /// When the finger lifted.
        at: Instant,
    },
    /// The platform cancelled the touch.
    TouchCancel,
    /// Clock tick, lets a stationary press turn into a long press.
    Tick {
        /// Current time.
        at: Instant,
    },
    /// The explicit delete control of a tile was used.
    DeleteButton {
        /// Entry to delete.
        id: EntryId,
    },
    /// The user answered the long-press confirmation.
    ConfirmDelete {
        /// Whether deletion was confirmed.
        accepted: bool,
    },
}

/// What an interaction asks the deck to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the entry at `from` to `to`.
    Reorder {
        /// Source position.
        from: usize,
        /// Destination position.
        to: usize,
    },
    /// Remove an entry.
    Delete(EntryId),
    /// Ask the user to confirm removal of an entry.
    ConfirmDelete(EntryId),
}

/// Which input drives a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragInput {
    /// Mouse or pen.
    Pointer,
    /// Finger.
    Touch,
}

/// Current state of the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// Nothing in progress.
    Idle,
    /// A tile is being dragged.
    Dragging {
        /// Dragged entry.
        id: EntryId,
        /// Position the drag started from. Only informative; the drop
        /// resolves the source from `id`.
        from: usize,
        /// Position the tile would land on if dropped now.
        to: usize,
        /// Input driving the drag.
        input: DragInput,
    },
    /// A finger rests on a tile; not yet a drag or a long press.
    Pressing {
        /// Touched entry.
        id: EntryId,
        /// Where the touch started.
        origin: Point,
        /// When the touch started.
        started: Instant,
    },
    /// A long press fired and the confirmation prompt is open.
    AwaitingConfirmation {
        /// Entry the prompt is about.
        id: EntryId,
    },
}

/// Turns pointer and touch events into reorder and delete intents.
///
/// Both input paths compute the destination with the same
/// [`insertion_index`] over the same sibling rects, so a pointer drag and a
/// touch drag ending at the same height always produce the same reorder.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    delete_zone: DeleteZone,
    long_press: Duration,
    tolerance: f32,
}

impl DragController {
    /// Create a controller with the long-press threshold and touch tolerance.
    pub fn new(long_press: Duration, tolerance: f32) -> Self {
        Self {
            state: DragState::Idle,
            delete_zone: DeleteZone::default(),
            long_press,
            tolerance,
        }
    }

    /// Current state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Delete zone visibility.
    pub fn delete_zone(&self) -> DeleteZone {
        self.delete_zone
    }

    /// Whether a tile is being dragged.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Entry awaiting a delete confirmation, if any.
    pub fn pending_confirmation(&self) -> Option<EntryId> {
        match self.state {
            DragState::AwaitingConfirmation { id } => Some(id),
            _ => None,
        }
    }

    /// Drop any drag or press in progress.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
        self.delete_zone.hide();
    }

    /// Feed one event. `grid` must reflect the current collection.
    ///
    /// While a delete confirmation is open, new drags and presses are
    /// ignored; the prompt has to be answered first.
    pub fn handle(&mut self, event: InteractionEvent, grid: &GridView) -> Option<Intent> {
        use InteractionEvent as E;

        if let DragState::AwaitingConfirmation { id } = self.state
            && matches!(event, E::DragStart { .. } | E::TouchStart { .. })
        {
            tracing::debug!(%id, "ignoring new drag while a confirmation is open");
            return None;
        }

        match event {
            E::DragStart { id } => {
                let from = grid.tile(id)?.position;
                self.state = DragState::Dragging {
                    id,
                    from,
                    to: from,
                    input: DragInput::Pointer,
                };
                self.delete_zone.show();
                None
            }
            E::DragOver { y } => {
                self.track(DragInput::Pointer, y, grid);
                None
            }
            E::DeleteZoneEnter | E::DeleteZoneLeave => {
                if self.dragging_with(DragInput::Pointer).is_some() {
                    self.delete_zone.highlighted = matches!(event, E::DeleteZoneEnter);
                }
                None
            }
            E::Drop => self.finish_drag(DragInput::Pointer, grid),
            E::DropOnDeleteZone => {
                let (id, _, _) = self.dragging_with(DragInput::Pointer)?;
                self.reset();
                Some(Intent::Delete(id))
            }
            E::DragEnd => {
                if self.dragging_with(DragInput::Pointer).is_some() || self.delete_zone.visible {
                    self.reset();
                }
                None
            }
            E::TouchStart { id, point, at } => {
                grid.tile(id)?;
                self.state = DragState::Pressing {
                    id,
                    origin: point,
                    started: at,
                };
                None
            }
            E::TouchMove { point, at } => match self.state {
                DragState::Pressing { id, origin, started } => {
                    if let Some(intent) = self.fire_long_press(at) {
                        return Some(intent);
                    }
                    if point.distance_to(origin) > self.tolerance {
                        let from = grid.tile(id)?.position;
                        self.state = DragState::Dragging {
                            id,
                            from,
                            to: insertion_index(&grid.sibling_rects(id), point.y),
                            input: DragInput::Touch,
                        };
                        tracing::trace!(%id, from, ?started, "touch press became a drag");
                    }
                    None
                }
                _ => {
                    self.track(DragInput::Touch, point.y, grid);
                    None
                }
            },
            E::TouchEnd { at } => match self.state {
                DragState::Pressing { .. } => {
                    let intent = self.fire_long_press(at);
                    if intent.is_none() {
                        self.state = DragState::Idle;
                    }
                    intent
                }
                _ => self.finish_drag(DragInput::Touch, grid),
            },
            E::TouchCancel => {
                if matches!(self.state, DragState::Pressing { .. })
                    || self.dragging_with(DragInput::Touch).is_some()
                {
                    self.state = DragState::Idle;
                }
                None
            }
            E::Tick { at } => self.fire_long_press(at),
            E::DeleteButton { id } => {
                if self.involves(id) {
                    self.reset();
                }
                Some(Intent::Delete(id))
            }
            E::ConfirmDelete { accepted } => {
                let id = self.pending_confirmation()?;
                self.state = DragState::Idle;
                accepted.then_some(Intent::Delete(id))
            }
        }
    }

    fn dragging_with(&self, input: DragInput) -> Option<(EntryId, usize, usize)> {
        match self.state {
            DragState::Dragging {
                id,
                from,
                to,
                input: current,
            } if current == input => Some((id, from, to)),
            _ => None,
        }
    }

    fn involves(&self, target: EntryId) -> bool {
        match self.state {
            DragState::Dragging { id, .. }
            | DragState::Pressing { id, .. }
            | DragState::AwaitingConfirmation { id } => id == target,
            DragState::Idle => false,
        }
    }

    fn track(&mut self, input: DragInput, y: f32, grid: &GridView) {
        if let DragState::Dragging {
            id,
            to,
            input: current,
            ..
        } = &mut self.state
            && *current == input
        {
            *to = insertion_index(&grid.sibling_rects(*id), y);
        }
    }

    /// The source position is looked up again by identity: the deck may
    /// have changed between the start of the drag and the drop.
    fn finish_drag(&mut self, input: DragInput, grid: &GridView) -> Option<Intent> {
        let (id, _, to) = self.dragging_with(input)?;
        self.reset();

        let from = grid.tile(id)?.position;
        let to = to.min(grid.len() - 1);
        (from != to).then_some(Intent::Reorder { from, to })
    }

    fn fire_long_press(&mut self, now: Instant) -> Option<Intent> {
        let DragState::Pressing { id, started, .. } = self.state else {
            return None;
        };

        if now.saturating_duration_since(started) < self.long_press {
            return None;
        }

        tracing::debug!(%id, "long press, asking for delete confirmation");
        self.state = DragState::AwaitingConfirmation { id };
        Some(Intent::ConfirmDelete(id))
    }
}
