//! Slotboard - an interactive diagram canvas.
//!
//! Users place rectangles, drag them around and draw straight connections
//! between the four edge slots of each rectangle.
//!
//! The core is toolkit-agnostic: a host feeds [`input::PointerEvent`]s into an
//! [`app::Editor`] and replays the returned [`render::Frame`] onto its own
//! drawing surface. The optional `gpui` feature ships such a host.

pub mod app;
pub mod board;
pub mod constants;
pub mod error;
pub mod hit_testing;
pub mod input;
pub mod perf;
pub mod render;
pub mod settings;
pub mod types;

pub use app::Editor;
pub use board::Board;
pub use input::{InputState, PointerButton, PointerEvent};
pub use render::{CursorStyle, DrawCommand, DrawList, DrawSurface, Frame};
