//! Snapshot tests for the render pass using the insta crate.
//!
//! Each frame is reduced to its `DrawList::trace()`, one draw call per line.
//!
//! To update snapshots after intentional changes:
//! ```bash
//! cargo insta test --accept
//! ```

use crate::helpers::{TestBoardBuilder, play, slot};
use slotboard::input::PointerEvent;
use slotboard::render::{CursorStyle, DrawCommand, DrawList, DrawSurface, Stroke};
use slotboard::types::{Point, SlotType};

#[test]
fn test_empty_canvas_only_clears() {
    let editor = TestBoardBuilder::new().build_editor();
    let frame = editor.frame();

    insta::assert_snapshot!(frame.commands.trace(), @"clear 0 0 800 600");
    assert_eq!(frame.cursor, CursorStyle::Default);
    assert_eq!(frame.status, "Status: Ready.");
}

#[test]
fn test_idle_rectangle_frame() {
    let editor = TestBoardBuilder::new().with_rect(100.0, 100.0).build_editor();

    insta::assert_snapshot!(editor.frame().commands.trace(), @r"
    clear 0 0 800 600
    fill_rect 100 100 100 60 #f8f9fa
    stroke_rect 100 100 100 60 #adb5bd w=1
    circle 150 100 r=5 #007bff
    circle 150 160 r=5 #007bff
    circle 100 130 r=5 #007bff
    circle 200 130 r=5 #007bff
    ");
}

#[test]
fn test_hovered_slot_is_highlighted_when_idle() {
    let mut editor = TestBoardBuilder::new().with_rect(100.0, 100.0).build_editor();
    let frame = play(&mut editor, &[PointerEvent::moved(150.0, 102.0)]);

    insta::assert_snapshot!(frame.commands.trace(), @r"
    clear 0 0 800 600
    fill_rect 100 100 100 60 #f8f9fa
    stroke_rect 100 100 100 60 #adb5bd w=1
    circle 150 100 r=5 #0056b3
    circle 150 160 r=5 #007bff
    circle 100 130 r=5 #007bff
    circle 200 130 r=5 #007bff
    ");
    assert_eq!(frame.cursor, CursorStyle::Crosshair);
    assert_eq!(frame.status, "Status: Hovering Slot TOP on Rect 0. Click to connect.");
}

#[test]
fn test_connecting_frame_draws_preview_behind_rectangles() {
    let mut editor = TestBoardBuilder::new()
        .with_rect(100.0, 100.0)
        .with_rect(300.0, 100.0)
        .with_connection(slot(0, SlotType::Right), slot(1, SlotType::Left))
        .build_editor();

    let frame = play(
        &mut editor,
        &[PointerEvent::down(150.0, 160.0), PointerEvent::moved(250.0, 250.0)],
    );

    insta::assert_snapshot!(frame.commands.trace(), @r"
    clear 0 0 800 600
    line 200 130 -> 300 130 #333333 w=2
    line 150 160 -> 250 250 #aaaaaa w=2 dash=5,5
    fill_rect 100 100 100 60 #f8f9fa
    stroke_rect 100 100 100 60 #adb5bd w=1
    fill_rect 300 100 100 60 #f8f9fa
    stroke_rect 300 100 100 60 #adb5bd w=1
    circle 150 100 r=5 #007bff
    circle 150 160 r=5 #007bff
    circle 100 130 r=5 #007bff
    circle 200 130 r=5 #007bff
    circle 350 100 r=5 #007bff
    circle 350 160 r=5 #007bff
    circle 300 130 r=5 #007bff
    circle 400 130 r=5 #007bff
    ");
    assert_eq!(frame.cursor, CursorStyle::Crosshair);
    assert_eq!(
        frame.status,
        "Status: Connecting from Slot BOTTOM on Rect 0... Click another slot."
    );
}

#[test]
fn test_dragged_rectangle_gets_heavier_border() {
    let mut editor = TestBoardBuilder::new().with_rect(100.0, 100.0).build_editor();

    let frame = play(
        &mut editor,
        &[PointerEvent::down(110.0, 105.0), PointerEvent::moved(140.0, 85.0)],
    );

    insta::assert_snapshot!(frame.commands.trace(), @r"
    clear 0 0 800 600
    fill_rect 130 80 100 60 #f8f9fa
    stroke_rect 130 80 100 60 #6c757d w=2
    circle 180 80 r=5 #007bff
    circle 180 140 r=5 #007bff
    circle 130 110 r=5 #007bff
    circle 230 110 r=5 #007bff
    ");
    assert_eq!(frame.cursor, CursorStyle::Grabbing);
    assert_eq!(frame.status, "Status: Dragging Rect 0");
}

#[test]
fn test_hover_suppressed_while_dragging_over_another_slot() {
    let mut editor = TestBoardBuilder::new()
        .with_rect(100.0, 100.0)
        .with_rect(400.0, 100.0)
        .build_editor();

    // Drag rect 0 so the pointer ends on rect 1's top slot (450, 100)
    let frame = play(
        &mut editor,
        &[PointerEvent::down(150.0, 130.0), PointerEvent::moved(450.0, 100.0)],
    );

    let hovered = frame.commands.commands().iter().any(|c| {
        matches!(c, DrawCommand::FillCircle { color, .. } if *color == editor.style.palette.slot_hover)
    });
    assert!(!hovered, "no slot should be highlighted while dragging");
}

#[test]
fn test_dangling_connection_is_skipped() {
    let mut editor = TestBoardBuilder::new()
        .with_rect(100.0, 100.0)
        .with_rect(300.0, 100.0)
        .with_connection(slot(0, SlotType::Right), slot(1, SlotType::Left))
        .build_editor();

    // Remove the rectangle without cascading
    editor.board.rectangles.retain(|r| r.id != 1);
    let frame = editor.frame();

    assert!(
        !frame
            .commands
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Line { .. }))
    );
}

#[test]
fn test_draw_list_replays_onto_other_surfaces() {
    struct Counter(usize);

    impl DrawSurface for Counter {
        fn clear(&mut self, _: slotboard::render::Bounds) {
            self.0 += 1;
        }
        fn fill_rect(&mut self, _: slotboard::render::Bounds, _: slotboard::render::Color) {
            self.0 += 1;
        }
        fn stroke_rect(&mut self, _: slotboard::render::Bounds, _: slotboard::render::Color, _: f32) {
            self.0 += 1;
        }
        fn fill_circle(&mut self, _: Point, _: f32, _: slotboard::render::Color) {
            self.0 += 1;
        }
        fn line(&mut self, _: Point, _: Point, _: Stroke) {
            self.0 += 1;
        }
    }

    let editor = TestBoardBuilder::new().with_rect(100.0, 100.0).build_editor();
    let frame = editor.frame();

    let mut counter = Counter(0);
    frame.commands.replay(&mut counter);
    assert_eq!(counter.0, frame.commands.len());

    let mut copy = DrawList::new();
    frame.commands.replay(&mut copy);
    assert_eq!(copy, frame.commands);
}
