//! Pointer release handling - finish connection gestures, end drags.

use tracing::debug;

use super::{InputState, PointerButton};
use crate::app::Editor;
use crate::hit_testing::find_slot_at;
use crate::profile_scope;
use crate::types::Point;

impl Editor {
    pub fn handle_mouse_up(&mut self, button: PointerButton, position: Point) {
        profile_scope!("handle_mouse_up");

        if !button.is_primary() {
            return;
        }

        match self.input_state {
            InputState::Connecting { origin } => {
                match find_slot_at(position, &self.board.rectangles, self.slot_hit_radius) {
                    Some(target) if target != origin => {
                        match self.board.add_connection(origin, target) {
                            Ok(connection) => {
                                debug!(connection_id = connection.id, "Connection created");
                            }
                            Err(reason) => debug!(%reason, "Connection rejected"),
                        }
                    }
                    Some(_) => debug!("Connection cancelled on its origin slot"),
                    None => debug!("Connection cancelled"),
                }
                self.input_state.reset();
            }
            InputState::DraggingRect { rect_id, .. } => {
                // Position was committed on every move
                debug!(rect_id, "Stop dragging");
                self.input_state.reset();
            }
            InputState::Idle => {}
        }
    }
}
