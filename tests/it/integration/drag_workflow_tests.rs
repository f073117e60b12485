//! Dragging workflows.

use crate::helpers::{TestBoardBuilder, assert_idle, move_to, play, press, release};
use slotboard::input::InputState;
use slotboard::types::Point;

#[test]
fn test_drag_keeps_grab_offset() {
    let mut editor = TestBoardBuilder::new().with_rect(200.0, 200.0).build_editor();
    let orig = editor.board.rectangles[0].top_left();

    let grab = orig + Point::new(10.0, 5.0);
    play(&mut editor, &[press(grab)]);
    assert_eq!(
        editor.input_state,
        InputState::DraggingRect { rect_id: 0, drag_offset: Point::new(10.0, 5.0) }
    );

    let target = grab + Point::new(30.0, -20.0);
    play(&mut editor, &[move_to(target)]);
    assert_eq!(editor.board.rectangles[0].top_left(), Point::new(orig.x + 30.0, orig.y - 20.0));

    play(&mut editor, &[release(target)]);
    assert_idle(&editor);
    assert_eq!(editor.board.rectangles[0].top_left(), Point::new(230.0, 180.0));
}

#[test]
fn test_drag_is_not_clamped_to_canvas() {
    let mut editor = TestBoardBuilder::new().with_rect(50.0, 50.0).build_editor();

    play(
        &mut editor,
        &[press(Point::new(60.0, 60.0)), move_to(Point::new(-100.0, 900.0)), release(Point::new(-100.0, 900.0))],
    );

    assert_eq!(editor.board.rectangles[0].top_left(), Point::new(-110.0, 890.0));
    assert_idle(&editor);
}

#[test]
fn test_press_picks_topmost_rectangle() {
    let mut editor = TestBoardBuilder::new()
        .with_rect(100.0, 100.0)
        .with_rect(150.0, 120.0)
        .build_editor();

    play(&mut editor, &[press(Point::new(170.0, 140.0))]);
    assert_eq!(editor.input_state.dragged_rect_id(), Some(1));

    play(&mut editor, &[move_to(Point::new(370.0, 140.0)), release(Point::new(370.0, 140.0))]);
    assert_eq!(editor.board.rectangles[0].top_left(), Point::new(100.0, 100.0));
    assert_eq!(editor.board.rectangles[1].top_left(), Point::new(350.0, 120.0));
}

#[test]
fn test_moves_without_press_only_track_pointer() {
    let mut editor = TestBoardBuilder::new().with_rect(100.0, 100.0).build_editor();

    play(&mut editor, &[move_to(Point::new(150.0, 130.0)), move_to(Point::new(400.0, 400.0))]);

    assert_idle(&editor);
    assert_eq!(editor.pointer, Point::new(400.0, 400.0));
    assert_eq!(editor.board.rectangles[0].top_left(), Point::new(100.0, 100.0));
}

#[test]
fn test_press_on_empty_canvas_stays_idle() {
    let mut editor = TestBoardBuilder::new().with_rect(100.0, 100.0).build_editor();

    play(&mut editor, &[press(Point::new(600.0, 500.0)), release(Point::new(600.0, 500.0))]);

    assert_idle(&editor);
}

#[test]
fn test_connections_follow_dragged_rectangle() {
    let mut editor = TestBoardBuilder::new()
        .with_rect(100.0, 100.0)
        .with_rect(300.0, 100.0)
        .with_connection(
            crate::helpers::slot(0, slotboard::types::SlotType::Right),
            crate::helpers::slot(1, slotboard::types::SlotType::Left),
        )
        .build_editor();

    let frame = play(
        &mut editor,
        &[press(Point::new(350.0, 130.0)), move_to(Point::new(350.0, 230.0))],
    );

    insta::assert_snapshot!(frame.commands.commands()[1].to_string(), @"line 200 130 -> 300 230 #333333 w=2");
}
