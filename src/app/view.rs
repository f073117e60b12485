//! gpui host - a window with a header bar above the editor canvas.
//!
//! Window events are converted to canvas space and dispatched to the
//! [`Editor`]; the returned [`Frame`] is replayed inside a gpui `canvas`
//! element and its cursor/status shown around it.

use gpui::prelude::*;
use gpui::{
    App, Application, Bounds, ClickEvent, Context, CursorStyle as GpuiCursor, Hsla, MouseButton,
    MouseDownEvent, MouseMoveEvent, MouseUpEvent, PathBuilder, Pixels, Point as GpuiPoint, Window,
    WindowBounds, WindowOptions, canvas, div, point, px, quad, rgb, size, transparent_black,
};

use super::Editor;
use crate::constants::HEADER_HEIGHT;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::{PointerButton, PointerEvent};
use crate::render::{Bounds as CanvasBounds, Color, CursorStyle, DrawSurface, Frame, Stroke, dash_segments};
use crate::settings::Settings;
use crate::types::Point;

fn hsla(color: Color) -> Hsla {
    rgb(color.0).into()
}

fn cursor_for(style: CursorStyle) -> GpuiCursor {
    match style {
        CursorStyle::Default => GpuiCursor::Arrow,
        CursorStyle::Grab => GpuiCursor::OpenHand,
        CursorStyle::Grabbing => GpuiCursor::ClosedHand,
        CursorStyle::Crosshair => GpuiCursor::Crosshair,
    }
}

/// Paints recorded draw calls into the current gpui window.
struct WindowSurface<'a> {
    window: &'a mut Window,
    origin: GpuiPoint<Pixels>,
    background: Hsla,
}

impl WindowSurface<'_> {
    fn to_window(&self, p: Point) -> GpuiPoint<Pixels> {
        point(self.origin.x + px(p.x), self.origin.y + px(p.y))
    }

    fn to_bounds(&self, b: CanvasBounds) -> Bounds<Pixels> {
        Bounds {
            origin: self.to_window(b.origin),
            size: size(px(b.width), px(b.height)),
        }
    }
}

impl DrawSurface for WindowSurface<'_> {
    fn clear(&mut self, bounds: CanvasBounds) {
        let bounds = self.to_bounds(bounds);
        self.window.paint_quad(quad(
            bounds,
            px(0.0),
            self.background,
            px(0.0),
            transparent_black(),
            Default::default(),
        ));
    }

    fn fill_rect(&mut self, bounds: CanvasBounds, color: Color) {
        let bounds = self.to_bounds(bounds);
        self.window.paint_quad(quad(
            bounds,
            px(0.0),
            hsla(color),
            px(0.0),
            transparent_black(),
            Default::default(),
        ));
    }

    fn stroke_rect(&mut self, bounds: CanvasBounds, color: Color, line_width: f32) {
        let bounds = self.to_bounds(bounds);
        self.window.paint_quad(quad(
            bounds,
            px(0.0),
            transparent_black(),
            px(line_width),
            hsla(color),
            Default::default(),
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let bounds = self.to_bounds(CanvasBounds::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        ));
        self.window.paint_quad(quad(
            bounds,
            px(radius),
            hsla(color),
            px(0.0),
            transparent_black(),
            Default::default(),
        ));
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let segments = match stroke.dash {
            Some(dash) => dash_segments(from, to, dash),
            None => vec![(from, to)],
        };

        for (start, end) in segments {
            let mut path = PathBuilder::stroke(px(stroke.width));
            path.move_to(self.to_window(start));
            path.line_to(self.to_window(end));
            if let Ok(built_path) = path.build() {
                self.window.paint_path(built_path, hsla(stroke.color));
            }
        }
    }
}

/// Root view: header bar plus the editor canvas.
pub struct EditorView {
    editor: Editor,
    frame: Frame,
    coords: CoordinateContext,
}

impl EditorView {
    pub fn new(editor: Editor) -> Self {
        let frame = editor.frame();
        Self {
            editor,
            frame,
            coords: CoordinateContext::new(Point::new(0.0, HEADER_HEIGHT)),
        }
    }

    fn canvas_point(&self, position: GpuiPoint<Pixels>) -> Point {
        let window_point = Point::new(f32::from(position.x), f32::from(position.y));
        CoordinateConverter::window_to_canvas(window_point, &self.coords)
    }

    fn dispatch(&mut self, event: PointerEvent, cx: &mut Context<Self>) {
        self.frame = self.editor.dispatch(event);
        cx.notify();
    }

    fn on_mouse_down(&mut self, event: &MouseDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let position = self.canvas_point(event.position);
        self.dispatch(PointerEvent::Down { button: PointerButton::Primary, position }, cx);
    }

    fn on_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let position = self.canvas_point(event.position);
        self.dispatch(PointerEvent::Move { position }, cx);
    }

    fn on_mouse_up(&mut self, event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let position = self.canvas_point(event.position);
        self.dispatch(PointerEvent::Up { button: PointerButton::Primary, position }, cx);

        // The second click of a pair completes a double-click
        if event.click_count == 2 {
            self.dispatch(PointerEvent::DoubleClick { button: PointerButton::Primary, position }, cx);
        }
    }

    fn on_add_rectangle(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.frame = self.editor.add_rectangle();
        cx.notify();
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .gap_4()
            .px_3()
            .bg(rgb(0xe9ecef))
            .child(
                div()
                    .id("add-rectangle")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(rgb(0x007bff))
                    .text_color(rgb(0xffffff))
                    .cursor(GpuiCursor::PointingHand)
                    .child("Add Rectangle")
                    .on_click(cx.listener(Self::on_add_rectangle)),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(0x333333))
                    .child(self.frame.status.clone()),
            )
    }
}

impl Render for EditorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let commands = self.frame.commands.clone();
        let background = hsla(self.editor.style.palette.background);
        let canvas_size = self.editor.canvas;

        div()
            .size_full()
            .flex()
            .flex_col()
            .child(self.render_header(cx))
            .child(
                div()
                    .relative()
                    .w(px(canvas_size.width))
                    .h(px(canvas_size.height))
                    .cursor(cursor_for(self.frame.cursor))
                    .on_mouse_down(MouseButton::Left, cx.listener(Self::on_mouse_down))
                    .on_mouse_move(cx.listener(Self::on_mouse_move))
                    .on_mouse_up(MouseButton::Left, cx.listener(Self::on_mouse_up))
                    .on_mouse_up_out(MouseButton::Left, cx.listener(Self::on_mouse_up))
                    .child(
                        canvas(
                            move |_bounds, _window, _cx| (),
                            move |bounds, _data, window, _cx| {
                                let mut surface = WindowSurface {
                                    window,
                                    origin: bounds.origin,
                                    background,
                                };
                                commands.replay(&mut surface);
                            },
                        )
                        .absolute()
                        .size_full(),
                    ),
            )
    }
}

/// Open the editor window and run until it closes.
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let editor = Editor::from_settings(&settings)?;
    let window_size = size(
        px(settings.canvas_width),
        px(settings.canvas_height + HEADER_HEIGHT),
    );

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, window_size, cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(options, |_window, cx| cx.new(|_cx| EditorView::new(editor))) {
            tracing::error!("Failed to open editor window: {}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}
