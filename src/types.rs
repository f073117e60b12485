//! Core types for the diagram canvas.
//!
//! Rectangles and connections are owned by the [`Board`](crate::board::Board).
//! Slots are never stored: a [`SlotRef`] names one of the four edge midpoints
//! of a rectangle and its position is derived from the rectangle's bounds.

use std::fmt;
use std::ops::{Add, Sub};

/// Identifier of a rectangle. Allocated monotonically, never reused.
pub type RectId = u64;

/// Identifier of a connection. Allocated monotonically, never reused.
pub type ConnectionId = u64;

// ============================================================================
// Geometry primitives
// ============================================================================

/// A position in canvas space (origin top-left, y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point
    #[inline]
    pub fn distance_squared(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

/// Size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// A node on the canvas. Only `x`/`y` change after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub id: RectId,
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn move_to(&mut self, top_left: Point) {
        self.x = top_left.x;
        self.y = top_left.y;
    }
}

// ============================================================================
// Slots
// ============================================================================

/// One of the four anchor points on a rectangle's perimeter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotType {
    Top,
    Bottom,
    Left,
    Right,
}

impl SlotType {
    /// Scan order used for hit testing and drawing
    pub const ALL: [SlotType; 4] = [SlotType::Top, SlotType::Bottom, SlotType::Left, SlotType::Right];

    /// Upper-case name shown in the status line
    pub fn label(self) -> &'static str {
        match self {
            SlotType::Top => "TOP",
            SlotType::Bottom => "BOTTOM",
            SlotType::Left => "LEFT",
            SlotType::Right => "RIGHT",
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SlotType::Top => "top",
            SlotType::Bottom => "bottom",
            SlotType::Left => "left",
            SlotType::Right => "right",
        })
    }
}

/// A slot identified by `(rectangle id, slot type)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub rect_id: RectId,
    pub slot_type: SlotType,
}

impl SlotRef {
    pub const fn new(rect_id: RectId, slot_type: SlotType) -> Self {
        Self { rect_id, slot_type }
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.rect_id, self.slot_type)
    }
}

// ============================================================================
// Connections
// ============================================================================

/// A straight line between two slots.
///
/// Holds ids only; the rectangles it references may be looked up and not
/// found, which callers treat as "skip".
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub id: ConnectionId,
    pub start: SlotRef,
    pub end: SlotRef,
}

impl Connection {
    /// True if this connection joins `a` and `b` in either orientation
    pub fn joins(&self, a: SlotRef, b: SlotRef) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }

    /// True if either endpoint sits on the given rectangle
    pub fn touches(&self, rect_id: RectId) -> bool {
        self.start.rect_id == rect_id || self.end.rect_id == rect_id
    }
}
