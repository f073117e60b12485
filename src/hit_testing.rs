//! Hit testing for slots and rectangles.
//!
//! Everything here is a pure function over the board's rectangles. Scans are
//! linear: slots are checked in stored order (first match wins, no nearest
//! tie-break), rectangles in reverse stored order so the topmost wins.

use crate::profile_scope;
use crate::types::{Point, RectId, Rectangle, SlotRef, SlotType};

/// What lies under a pointer, in pointer-down priority order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit {
    Slot(SlotRef),
    Rectangle(RectId),
    Empty,
}

/// Midpoint of the named edge of `rect`.
pub fn slot_position(rect: &Rectangle, slot_type: SlotType) -> Point {
    match slot_type {
        SlotType::Top => Point::new(rect.x + rect.width / 2.0, rect.y),
        SlotType::Bottom => Point::new(rect.x + rect.width / 2.0, rect.y + rect.height),
        SlotType::Left => Point::new(rect.x, rect.y + rect.height / 2.0),
        SlotType::Right => Point::new(rect.x + rect.width, rect.y + rect.height / 2.0),
    }
}

/// Inclusive bounds test.
#[inline]
pub fn point_in_rect(point: Point, rect: &Rectangle) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// First slot whose center is strictly closer than `hit_radius` to `point`.
pub fn find_slot_at(point: Point, rectangles: &[Rectangle], hit_radius: f32) -> Option<SlotRef> {
    let radius_sq = hit_radius * hit_radius;
    rectangles.iter().find_map(|rect| {
        SlotType::ALL
            .into_iter()
            .find(|&slot_type| slot_position(rect, slot_type).distance_squared(point) < radius_sq)
            .map(|slot_type| SlotRef::new(rect.id, slot_type))
    })
}

/// Topmost (most recently added) rectangle containing `point`.
pub fn find_rect_at(point: Point, rectangles: &[Rectangle]) -> Option<&Rectangle> {
    rectangles.iter().rev().find(|rect| point_in_rect(point, rect))
}

/// Classify a pointer position: slots take priority over rectangle bodies.
pub fn hit_test(point: Point, rectangles: &[Rectangle], hit_radius: f32) -> Hit {
    profile_scope!("hit_test");

    if let Some(slot) = find_slot_at(point, rectangles, hit_radius) {
        Hit::Slot(slot)
    } else if let Some(rect) = find_rect_at(point, rectangles) {
        Hit::Rectangle(rect.id)
    } else {
        Hit::Empty
    }
}
