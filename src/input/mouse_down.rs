//! Pointer press handling - connection/drag initiation, double-click delete.
//!
//! Press priority is slot, then rectangle body, then empty canvas. Only the
//! primary button does anything.

use tracing::debug;

use super::PointerButton;
use crate::app::Editor;
use crate::hit_testing::{Hit, find_rect_at, hit_test};
use crate::profile_scope;
use crate::types::Point;

impl Editor {
    pub fn handle_mouse_down(&mut self, button: PointerButton, position: Point) {
        profile_scope!("handle_mouse_down");

        if !button.is_primary() {
            return;
        }
        self.pointer = position;

        match hit_test(position, &self.board.rectangles, self.slot_hit_radius) {
            Hit::Slot(slot) => {
                debug!(slot = %slot, "Start connecting");
                self.input_state.start_connecting(slot);
            }
            Hit::Rectangle(rect_id) => {
                // Offset from top-left keeps the grab point under the pointer
                let Some(rect) = self.board.rectangle(rect_id) else {
                    self.input_state.reset();
                    return;
                };
                let drag_offset = position - rect.top_left();
                debug!(rect_id, offset_x = drag_offset.x, offset_y = drag_offset.y, "Start dragging");
                self.input_state.start_dragging(rect_id, drag_offset);
            }
            Hit::Empty => self.input_state.reset(),
        }
    }

    /// Delete the topmost rectangle under the pointer. Slots are not
    /// considered; a double-click on a slot deletes its rectangle.
    pub fn handle_double_click(&mut self, button: PointerButton, position: Point) {
        profile_scope!("handle_double_click");

        if !button.is_primary() {
            return;
        }
        let Some(rect_id) = find_rect_at(position, &self.board.rectangles).map(|r| r.id) else {
            return;
        };
        self.delete_rectangle(rect_id);
    }
}
