//! Pointer events as delivered by a host, already in canvas coordinates.

use crate::types::Point;

/// Which button a press/release/double-click came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { button: PointerButton, position: Point },
    Move { position: Point },
    Up { button: PointerButton, position: Point },
    DoubleClick { button: PointerButton, position: Point },
}

impl PointerEvent {
    /// Primary-button press at `(x, y)`
    pub fn down(x: f32, y: f32) -> Self {
        Self::Down { button: PointerButton::Primary, position: Point::new(x, y) }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::Move { position: Point::new(x, y) }
    }

    /// Primary-button release at `(x, y)`
    pub fn up(x: f32, y: f32) -> Self {
        Self::Up { button: PointerButton::Primary, position: Point::new(x, y) }
    }

    /// Primary-button double-click at `(x, y)`
    pub fn double_click(x: f32, y: f32) -> Self {
        Self::DoubleClick { button: PointerButton::Primary, position: Point::new(x, y) }
    }
}
