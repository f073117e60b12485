//! Cursor shape and status line for the current interaction state.

use std::fmt;

use super::SceneView;
use crate::hit_testing::find_rect_at;

/// Cursor shapes the host is asked to show
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Default,
    /// Over a draggable rectangle
    Grab,
    /// While dragging
    Grabbing,
    /// Over a slot or while connecting
    Crosshair,
}

impl CursorStyle {
    /// CSS cursor keyword
    pub fn css_name(self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Grab => "grab",
            CursorStyle::Grabbing => "grabbing",
            CursorStyle::Crosshair => "crosshair",
        }
    }
}

impl fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub cursor: CursorStyle,
    pub status: String,
}

/// First match wins: dragging, connecting, hovered slot, hovered rectangle, ready.
pub fn derive_feedback(view: &SceneView<'_>) -> Feedback {
    if let Some(rect_id) = view.input_state.dragged_rect_id() {
        return Feedback {
            cursor: CursorStyle::Grabbing,
            status: format!("Status: Dragging Rect {rect_id}"),
        };
    }

    if let Some(origin) = view.input_state.connection_origin() {
        return Feedback {
            cursor: CursorStyle::Crosshair,
            status: format!(
                "Status: Connecting from Slot {} on Rect {}... Click another slot.",
                origin.slot_type.label(),
                origin.rect_id
            ),
        };
    }

    if let Some(slot) = view.hovered_slot() {
        return Feedback {
            cursor: CursorStyle::Crosshair,
            status: format!(
                "Status: Hovering Slot {} on Rect {}. Click to connect.",
                slot.slot_type.label(),
                slot.rect_id
            ),
        };
    }

    if find_rect_at(view.pointer, &view.board.rectangles).is_some() {
        return Feedback {
            cursor: CursorStyle::Grab,
            status: "Status: Hovering Rectangle. Click and drag to move, double-click to delete.".to_string(),
        };
    }

    Feedback {
        cursor: CursorStyle::Default,
        status: "Status: Ready.".to_string(),
    }
}
