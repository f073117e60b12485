//! Render/feedback pass.
//!
//! A pure function of the board, the input state and the pointer position.
//! It produces the draw calls for one frame plus the cursor shape and status
//! line. Nothing here mutates editor state, so rendering the same state twice
//! yields identical frames.
//!
//! ## Modules
//!
//! - `surface` - The `DrawSurface` capability, recorded `DrawCommand`s, colors
//! - `canvas` - Connections, preview line, rectangles and slots, back to front
//! - `feedback` - Cursor style and status text

mod canvas;
mod feedback;
mod surface;

pub use canvas::render_canvas;
pub use feedback::{CursorStyle, Feedback, derive_feedback};
pub use surface::{Bounds, Color, DrawCommand, DrawList, DrawSurface, Stroke, dash_segments};

use crate::board::Board;
use crate::constants::{
    CANVAS_BACKGROUND, CONNECTION_COLOR, CONNECTION_WIDTH, PREVIEW_COLOR, PREVIEW_DASH, RECT_BORDER_COLOR,
    RECT_BORDER_WIDTH, RECT_COLOR, RECT_DRAG_BORDER_COLOR, RECT_DRAG_BORDER_WIDTH, SLOT_COLOR, SLOT_HOVER_COLOR,
    SLOW_FRAME_MS,
};
use crate::hit_testing::find_slot_at;
use crate::input::InputState;
use crate::profile_scope;
use crate::types::{CanvasSize, Point, SlotRef};

/// Resolved colors for one render pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub slot: Color,
    pub slot_hover: Color,
    pub connection: Color,
    pub preview: Color,
    pub rect_fill: Color,
    pub rect_border: Color,
    pub rect_drag_border: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            slot: Color(SLOT_COLOR),
            slot_hover: Color(SLOT_HOVER_COLOR),
            connection: Color(CONNECTION_COLOR),
            preview: Color(PREVIEW_COLOR),
            rect_fill: Color(RECT_COLOR),
            rect_border: Color(RECT_BORDER_COLOR),
            rect_drag_border: Color(RECT_DRAG_BORDER_COLOR),
            background: Color(CANVAS_BACKGROUND),
        }
    }
}

/// Sizes and colors used by the draw pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub palette: Palette,
    pub slot_radius: f32,
    pub connection_width: f32,
    pub preview_dash: [f32; 2],
    pub border_width: f32,
    pub drag_border_width: f32,
}

impl RenderStyle {
    pub fn new(palette: Palette, slot_radius: f32) -> Self {
        Self {
            palette,
            slot_radius,
            connection_width: CONNECTION_WIDTH,
            preview_dash: PREVIEW_DASH,
            border_width: RECT_BORDER_WIDTH,
            drag_border_width: RECT_DRAG_BORDER_WIDTH,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::new(Palette::default(), crate::constants::SLOT_RADIUS)
    }
}

/// Read-only view of everything a frame depends on
#[derive(Clone, Copy, Debug)]
pub struct SceneView<'a> {
    pub board: &'a Board,
    pub input_state: &'a InputState,
    pub pointer: Point,
    pub canvas: CanvasSize,
    pub slot_hit_radius: f32,
}

impl SceneView<'_> {
    /// Slot under the pointer, ignored while dragging
    pub fn hovered_slot(&self) -> Option<SlotRef> {
        if self.input_state.is_dragging() {
            return None;
        }
        find_slot_at(self.pointer, &self.board.rectangles, self.slot_hit_radius)
    }
}

/// Output of one render pass
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub commands: DrawList,
    pub cursor: CursorStyle,
    pub status: String,
}

/// Draw the scene and derive cursor/status in one pass.
pub fn render_frame(view: &SceneView<'_>, style: &RenderStyle) -> Frame {
    profile_scope!("render_frame", SLOW_FRAME_MS);

    let mut commands = DrawList::new();
    render_canvas(view, style, &mut commands);
    let Feedback { cursor, status } = derive_feedback(view);

    Frame { commands, cursor, status }
}
