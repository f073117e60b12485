//! Pointer input handling for the canvas.
//!
//! This module implements the interaction controller: it interprets pointer
//! events against the board (via `hit_testing`) and mutates it.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode. Dragging and connecting are variants of one
//! enum, so they can never be active together.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `events` - Pointer events and buttons
//! - `mouse_down` - Press handling (connect/drag start) and double-click delete
//! - `drag` - Pointer move handling (pointer tracking, rectangle drag)
//! - `mouse_up` - Release handling (finish connection, end drag)
//! - `coords` - Window to canvas coordinate conversion for hosts

pub mod coords;
mod drag;
mod events;
mod mouse_down;
mod mouse_up;
mod state;

pub use events::{PointerButton, PointerEvent};
pub use state::InputState;
