//! Unit tests for slot and rectangle hit testing.

use slotboard::constants::SLOT_HIT_RADIUS;
use slotboard::hit_testing::{Hit, find_rect_at, find_slot_at, hit_test, point_in_rect};
use slotboard::types::{Point, Rectangle, SlotRef, SlotType};

fn rect(id: u64, x: f32, y: f32) -> Rectangle {
    Rectangle { id, x, y, width: 100.0, height: 60.0 }
}

#[test]
fn test_point_in_rect_includes_edges() {
    let r = rect(0, 0.0, 0.0);
    assert!(point_in_rect(Point::new(0.0, 0.0), &r));
    assert!(point_in_rect(Point::new(100.0, 60.0), &r));
    assert!(!point_in_rect(Point::new(100.5, 60.0), &r));
    assert!(!point_in_rect(Point::new(50.0, -0.5), &r));
}

#[test]
fn test_slot_hit_radius_is_strict() {
    let rects = [rect(0, 0.0, 0.0)];

    // Top slot sits at (50, 0)
    assert_eq!(
        find_slot_at(Point::new(50.0, 7.9), &rects, SLOT_HIT_RADIUS),
        Some(SlotRef::new(0, SlotType::Top))
    );
    assert_eq!(find_slot_at(Point::new(50.0, 8.0), &rects, SLOT_HIT_RADIUS), None);
}

#[test]
fn test_slot_hit_radius_exceeds_visual_radius() {
    let rects = [rect(0, 0.0, 0.0)];
    // 6px away: outside the drawn circle but still a hit
    assert_eq!(
        find_slot_at(Point::new(-6.0, 30.0), &rects, SLOT_HIT_RADIUS),
        Some(SlotRef::new(0, SlotType::Left))
    );
}

#[test]
fn test_first_slot_in_stored_order_wins() {
    // Rect 0's right slot at (100, 30), rect 1's left slot at (104, 30)
    let rects = [rect(0, 0.0, 0.0), rect(1, 104.0, 0.0)];

    // Closer to rect 1, but rect 0 is scanned first
    assert_eq!(
        find_slot_at(Point::new(103.0, 30.0), &rects, SLOT_HIT_RADIUS),
        Some(SlotRef::new(0, SlotType::Right))
    );
}

#[test]
fn test_topmost_rectangle_wins_on_overlap() {
    let rects = [rect(0, 0.0, 0.0), rect(1, 50.0, 30.0), rect(2, 60.0, 40.0)];

    assert_eq!(find_rect_at(Point::new(70.0, 50.0), &rects).map(|r| r.id), Some(2));
    assert_eq!(find_rect_at(Point::new(55.0, 35.0), &rects).map(|r| r.id), Some(1));
    assert_eq!(find_rect_at(Point::new(10.0, 10.0), &rects).map(|r| r.id), Some(0));
    assert!(find_rect_at(Point::new(500.0, 500.0), &rects).is_none());
}

#[test]
fn test_hit_test_prefers_slots_over_bodies() {
    let rects = [rect(0, 0.0, 0.0)];

    // The top slot lies on the rectangle's edge, which is inside the body too
    assert_eq!(
        hit_test(Point::new(50.0, 0.0), &rects, SLOT_HIT_RADIUS),
        Hit::Slot(SlotRef::new(0, SlotType::Top))
    );
    assert_eq!(hit_test(Point::new(50.0, 30.0), &rects, SLOT_HIT_RADIUS), Hit::Rectangle(0));
    assert_eq!(hit_test(Point::new(300.0, 300.0), &rects, SLOT_HIT_RADIUS), Hit::Empty);
}

#[test]
fn test_empty_board_hits_nothing() {
    assert_eq!(hit_test(Point::new(0.0, 0.0), &[], SLOT_HIT_RADIUS), Hit::Empty);
}
