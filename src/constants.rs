//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Canvas
// ============================================================================

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;

/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

/// Height of the header bar (add button + status) in the desktop host
pub const HEADER_HEIGHT: f32 = 40.0;

// ============================================================================
// Rectangle Defaults
// ============================================================================

/// Width of a newly added rectangle
pub const RECT_WIDTH: f32 = 100.0;

/// Height of a newly added rectangle
pub const RECT_HEIGHT: f32 = 60.0;

/// Distance kept from every canvas edge when placing a new rectangle
pub const PLACEMENT_MARGIN: f32 = 20.0;

/// Border width of an idle rectangle
pub const RECT_BORDER_WIDTH: f32 = 1.0;

/// Border width of the rectangle being dragged
pub const RECT_DRAG_BORDER_WIDTH: f32 = 2.0;

// ============================================================================
// Slots & Connections
// ============================================================================

/// Visual radius of a slot
pub const SLOT_RADIUS: f32 = 5.0;

/// Hit radius of a slot. Larger than the visual radius for easier clicking.
pub const SLOT_HIT_RADIUS: f32 = 8.0;

/// Stroke width of connections and the connection preview
pub const CONNECTION_WIDTH: f32 = 2.0;

/// Dash pattern (on, off) of the connection preview
pub const PREVIEW_DASH: [f32; 2] = [5.0, 5.0];

// ============================================================================
// Colors (default 0xRRGGBB values)
// ============================================================================

/// Slot fill
pub const SLOT_COLOR: u32 = 0x007bff;

/// Slot fill under the pointer
pub const SLOT_HOVER_COLOR: u32 = 0x0056b3;

/// Committed connection stroke
pub const CONNECTION_COLOR: u32 = 0x333333;

/// Connection preview stroke
pub const PREVIEW_COLOR: u32 = 0xaaaaaa;

/// Rectangle fill
pub const RECT_COLOR: u32 = 0xf8f9fa;

/// Rectangle border
pub const RECT_BORDER_COLOR: u32 = 0xadb5bd;

/// Rectangle border while dragged (slightly darker)
pub const RECT_DRAG_BORDER_COLOR: u32 = 0x6c757d;

/// Canvas background used by hosts when clearing
pub const CANVAS_BACKGROUND: u32 = 0xffffff;

// ============================================================================
// Profiling
// ============================================================================

/// Pointer handlers slower than this are reported
pub const SLOW_HANDLER_MS: f64 = 4.0;

/// Render passes slower than this are reported (one 60 FPS frame)
pub const SLOW_FRAME_MS: f64 = 16.67;
