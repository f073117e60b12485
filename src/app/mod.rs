//! Application module - the editor session and its host.
//!
//! This module is organized into several submodules:
//! - `state` - The `Editor` struct: board, input state, pointer, style
//! - `lifecycle` - Construction from settings, commands and event dispatch
//! - `view` - gpui window hosting the editor (feature `gpui`)

mod lifecycle;
mod state;
#[cfg(feature = "gpui")]
mod view;

pub use state::Editor;
#[cfg(feature = "gpui")]
pub use view::{EditorView, run};
