//! Coordinate conversion utilities for hosts.
//!
//! Hosts report pointer positions relative to their window; the editor works
//! in canvas space. The canvas may sit below a header bar or beside a dock,
//! so conversion subtracts the canvas origin. There is no zoom or pan.

use crate::types::Point;

/// Where the canvas sits inside the host window
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoordinateContext {
    pub canvas_origin: Point,
}

impl CoordinateContext {
    /// Create a new coordinate context
    #[inline]
    pub fn new(canvas_origin: Point) -> Self {
        Self { canvas_origin }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a window position to a canvas position
    #[inline]
    pub fn window_to_canvas(window_pos: Point, ctx: &CoordinateContext) -> Point {
        window_pos - ctx.canvas_origin
    }

    /// Convert a canvas position to a window position
    #[inline]
    pub fn canvas_to_window(canvas_pos: Point, ctx: &CoordinateContext) -> Point {
        canvas_pos + ctx.canvas_origin
    }
}
