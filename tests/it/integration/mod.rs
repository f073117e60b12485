//! Integration tests for Slotboard.
//!
//! These tests drive the editor with pointer events and check the board,
//! the interaction state and the rendered frame together.

mod drag_workflow_tests;
