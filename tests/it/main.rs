//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead to a single link step.
//!
//! Structure:
//! - helpers: Board/editor builders and assertions
//! - integration: Pointer-event workflows through the editor
//! - unit: Single-component unit tests

mod integration;
