//! Pointer move handling - pointer tracking and rectangle dragging.
//!
//! Move is called very frequently. It never changes the interaction mode;
//! it only records the pointer and, while dragging, commits the new position.

use super::InputState;
use crate::app::Editor;
use crate::profile_scope;
use crate::types::Point;

impl Editor {
    pub fn handle_mouse_move(&mut self, position: Point) {
        profile_scope!("handle_mouse_move");

        self.pointer = position;

        let InputState::DraggingRect { rect_id, drag_offset } = self.input_state else {
            return;
        };
        // Unconstrained: a rectangle may be dragged past the canvas edge
        if let Some(rect) = self.board.rectangle_mut(rect_id) {
            rect.move_to(position - drag_offset);
        }
    }
}
