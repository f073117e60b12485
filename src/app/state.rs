//! Editor state - the session object owning everything one canvas needs.
//!
//! Holds what a browser script would keep in globals: the board, the
//! interaction mode and the last pointer position. The render pass borrows
//! it read-only through [`SceneView`].

use rand::rngs::StdRng;

use crate::board::Board;
use crate::input::InputState;
use crate::render::{Frame, RenderStyle, SceneView, render_frame};
use crate::types::{CanvasSize, Point};

pub struct Editor {
    /// Rectangles and connections
    pub board: Board,
    /// Current interaction mode
    pub input_state: InputState,
    /// Last known pointer position (canvas space)
    pub pointer: Point,
    /// Size of the drawing surface
    pub canvas: CanvasSize,
    /// Pointer distance under which a slot counts as hit
    pub slot_hit_radius: f32,
    /// Colors and sizes for the render pass
    pub style: RenderStyle,
    /// Source of random rectangle placement
    pub(crate) rng: StdRng,
}

impl Editor {
    /// Borrow the state the render pass reads
    pub fn scene(&self) -> SceneView<'_> {
        SceneView {
            board: &self.board,
            input_state: &self.input_state,
            pointer: self.pointer,
            canvas: self.canvas,
            slot_hit_radius: self.slot_hit_radius,
        }
    }

    /// Render the current state without changing it
    pub fn frame(&self) -> Frame {
        render_frame(&self.scene(), &self.style)
    }
}
