//! Input state machine - the single interaction mode of the editor.
//!
//! One enum instead of `is_dragging`/`is_connecting` flag pairs, so dragging
//! and connecting can never be active at the same time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Connecting       (primary down on a slot)
//! Idle -> DraggingRect     (primary down inside a rectangle, off any slot)
//! Any  -> Idle             (primary down on empty canvas)
//!
//! Connecting -> Idle       (primary up, connection added or gesture cancelled)
//! DraggingRect -> Idle     (primary up, position already committed)
//! Any -> Idle              (double-click deletes the referenced rectangle)
//! ```

use crate::types::{Point, RectId, SlotRef};

/// Unified input state for all pointer interactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No active input operation
    #[default]
    Idle,

    /// Moving a rectangle with the pointer
    DraggingRect {
        /// Rectangle being dragged
        rect_id: RectId,
        /// Offset from rectangle top-left to the pointer at press time
        drag_offset: Point,
    },

    /// Drawing a connection out of a slot
    Connecting {
        /// Slot the gesture started on
        origin: SlotRef,
    },
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a rectangle is being dragged
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingRect { .. })
    }

    /// Returns true if a connection gesture is in progress
    pub fn is_connecting(&self) -> bool {
        matches!(self, Self::Connecting { .. })
    }

    /// Get the rectangle ID being dragged, if any
    pub fn dragged_rect_id(&self) -> Option<RectId> {
        match self {
            Self::DraggingRect { rect_id, .. } => Some(*rect_id),
            _ => None,
        }
    }

    /// Get drag offset
    pub fn drag_offset(&self) -> Option<Point> {
        match self {
            Self::DraggingRect { drag_offset, .. } => Some(*drag_offset),
            _ => None,
        }
    }

    /// Get the slot a connection gesture started on
    pub fn connection_origin(&self) -> Option<SlotRef> {
        match self {
            Self::Connecting { origin } => Some(*origin),
            _ => None,
        }
    }

    /// Returns true if the active mode refers to the given rectangle
    pub fn references(&self, rect_id: RectId) -> bool {
        match self {
            Self::Idle => false,
            Self::DraggingRect { rect_id: id, .. } => *id == rect_id,
            Self::Connecting { origin } => origin.rect_id == rect_id,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start dragging a rectangle
    pub fn start_dragging(&mut self, rect_id: RectId, drag_offset: Point) {
        *self = Self::DraggingRect { rect_id, drag_offset };
    }

    /// Start a connection gesture
    pub fn start_connecting(&mut self, origin: SlotRef) {
        *self = Self::Connecting { origin };
    }
}
