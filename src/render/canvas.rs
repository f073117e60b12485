//! Canvas rendering - connections, connection preview, rectangles and slots.
//!
//! Draw order, back to front:
//! 1. committed connections
//! 2. the dashed preview line while connecting
//! 3. rectangles (the dragged one with a heavier, darker border)
//! 4. slots of every rectangle, hovered slot highlighted only when idle

use super::surface::{Bounds, DrawSurface, Stroke};
use super::{RenderStyle, SceneView};
use crate::hit_testing::slot_position;
use crate::profile_scope;
use crate::types::{Connection, SlotType};

/// Issue every draw call for the current scene onto `surface`.
pub fn render_canvas<S: DrawSurface + ?Sized>(view: &SceneView<'_>, style: &RenderStyle, surface: &mut S) {
    profile_scope!("render_canvas");

    surface.clear(Bounds::new(0.0, 0.0, view.canvas.width, view.canvas.height));

    for connection in &view.board.connections {
        render_connection(view, style, connection, surface);
    }
    render_preview(view, style, surface);
    render_rectangles(view, style, surface);
    render_slots(view, style, surface);
}

fn render_connection<S: DrawSurface + ?Sized>(
    view: &SceneView<'_>,
    style: &RenderStyle,
    connection: &Connection,
    surface: &mut S,
) {
    // Dangling endpoints are skipped; cascade delete should make this unreachable
    let Some((start_rect, end_rect)) = view.board.endpoints(connection) else {
        tracing::trace!(connection_id = connection.id, "Skipping connection with missing rectangle");
        return;
    };

    surface.line(
        slot_position(start_rect, connection.start.slot_type),
        slot_position(end_rect, connection.end.slot_type),
        Stroke::solid(style.palette.connection, style.connection_width),
    );
}

fn render_preview<S: DrawSurface + ?Sized>(view: &SceneView<'_>, style: &RenderStyle, surface: &mut S) {
    let Some(origin) = view.input_state.connection_origin() else {
        return;
    };
    let Some(rect) = view.board.rectangle(origin.rect_id) else {
        return;
    };

    surface.line(
        slot_position(rect, origin.slot_type),
        view.pointer,
        Stroke::dashed(style.palette.preview, style.connection_width, style.preview_dash),
    );
}

fn render_rectangles<S: DrawSurface + ?Sized>(view: &SceneView<'_>, style: &RenderStyle, surface: &mut S) {
    let dragged = view.input_state.dragged_rect_id();

    for rect in &view.board.rectangles {
        let bounds = Bounds::new(rect.x, rect.y, rect.width, rect.height);
        let (border, width) = if dragged == Some(rect.id) {
            (style.palette.rect_drag_border, style.drag_border_width)
        } else {
            (style.palette.rect_border, style.border_width)
        };

        surface.fill_rect(bounds, style.palette.rect_fill);
        surface.stroke_rect(bounds, border, width);
    }
}

fn render_slots<S: DrawSurface + ?Sized>(view: &SceneView<'_>, style: &RenderStyle, surface: &mut S) {
    // Hover is only shown while idle
    let hovered = view.hovered_slot().filter(|_| view.input_state.is_idle());

    for rect in &view.board.rectangles {
        for slot_type in SlotType::ALL {
            let is_hovered =
                hovered.is_some_and(|slot| slot.rect_id == rect.id && slot.slot_type == slot_type);
            let color = if is_hovered { style.palette.slot_hover } else { style.palette.slot };
            surface.fill_circle(slot_position(rect, slot_type), style.slot_radius, color);
        }
    }
}
