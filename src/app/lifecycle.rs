//! Editor lifecycle - construction, commands and event dispatch.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use super::Editor;
use crate::board::{Board, Deleted};
use crate::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, SLOT_HIT_RADIUS};
use crate::error::SettingsResult;
use crate::input::{InputState, PointerEvent};
use crate::render::{Frame, RenderStyle};
use crate::settings::Settings;
use crate::types::{CanvasSize, Point, RectId};

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Editor with default geometry, an 800x600 canvas and random placement.
    pub fn new() -> Self {
        Self::with_rng(
            Board::new(),
            CanvasSize::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            SLOT_HIT_RADIUS,
            RenderStyle::default(),
            StdRng::from_entropy(),
        )
    }

    /// Default editor whose rectangle placement is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        let mut editor = Self::new();
        editor.rng = StdRng::seed_from_u64(seed);
        editor
    }

    /// Build an editor from validated settings.
    pub fn from_settings(settings: &Settings) -> SettingsResult<Self> {
        settings.validate()?;

        let palette = settings.colors.palette()?;
        let rng = match settings.placement_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self::with_rng(
            Board::with_layout((settings.rect_width, settings.rect_height), settings.placement_margin),
            CanvasSize::new(settings.canvas_width, settings.canvas_height),
            settings.slot_hit_radius,
            RenderStyle::new(palette, settings.slot_radius),
            rng,
        ))
    }

    fn with_rng(
        board: Board,
        canvas: CanvasSize,
        slot_hit_radius: f32,
        style: RenderStyle,
        rng: StdRng,
    ) -> Self {
        Self {
            board,
            input_state: InputState::Idle,
            pointer: Point::default(),
            canvas,
            slot_hit_radius,
            style,
            rng,
        }
    }

    /// The "add rectangle" command: random placement inside the canvas.
    pub fn add_rectangle(&mut self) -> Frame {
        self.board.add_rectangle(self.canvas, &mut self.rng);
        self.frame()
    }

    /// Cascade-delete a rectangle and drop any mode that referred to it.
    pub fn delete_rectangle(&mut self, rect_id: RectId) -> Option<Deleted> {
        let deleted = self.board.delete_rectangle(rect_id)?;
        if self.input_state.references(rect_id) {
            debug!(rect_id, "Resetting interaction that referenced deleted rectangle");
            self.input_state.reset();
        }
        Some(deleted)
    }

    /// Handle one pointer event completely, then render.
    pub fn dispatch(&mut self, event: PointerEvent) -> Frame {
        match event {
            PointerEvent::Down { button, position } => self.handle_mouse_down(button, position),
            PointerEvent::Move { position } => self.handle_mouse_move(position),
            PointerEvent::Up { button, position } => self.handle_mouse_up(button, position),
            PointerEvent::DoubleClick { button, position } => {
                self.handle_double_click(button, position)
            }
        }
        self.frame()
    }
}
