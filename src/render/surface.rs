//! The drawing surface capability and a recording implementation.
//!
//! The render pass never talks to a real canvas. It issues calls on a
//! [`DrawSurface`]; [`DrawList`] records them so a host can replay them later
//! (or a test can compare them).

use std::fmt;
use std::str::FromStr;

use crate::error::SettingsError;
use crate::types::Point;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Parse `#rrggbb` or `#rgb`
    pub fn from_hex(hex: &str) -> Result<Self, SettingsError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| SettingsError::InvalidColor(hex.to_string()))?;
        // from_str_radix alone would accept a sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SettingsError::InvalidColor(hex.to_string()));
        }
        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(SettingsError::InvalidColor(hex.to_string())),
        };
        u32::from_str_radix(&expanded, 16)
            .map(Color)
            .map_err(|_| SettingsError::InvalidColor(hex.to_string()))
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl FromStr for Color {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xff_ffff)
    }
}

/// Line style for segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    /// `(on, off)` lengths; `None` draws a solid line
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Color, width: f32, dash: [f32; 2]) -> Self {
        Self { color, width, dash: Some(dash) }
    }
}

/// Axis-aligned region in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { origin: Point::new(x, y), width, height }
    }
}

/// Split a dashed line into its visible pieces.
///
/// For surfaces without native dash support. Dashes start at `from`; the
/// last one is cut at `to`.
pub fn dash_segments(from: Point, to: Point, dash: [f32; 2]) -> Vec<(Point, Point)> {
    let [on, off] = dash;
    let length = from.distance_squared(to).sqrt();
    if length == 0.0 {
        return Vec::new();
    }
    if on <= 0.0 || off <= 0.0 {
        return vec![(from, to)];
    }

    let ux = (to.x - from.x) / length;
    let uy = (to.y - from.y) / length;
    let at = |t: f32| Point::new(from.x + ux * t, from.y + uy * t);

    let mut segments = Vec::new();
    let mut t = 0.0;
    while t < length {
        segments.push((at(t), at((t + on).min(length))));
        t += on + off;
    }
    segments
}

/// Drawing primitives the host environment provides.
pub trait DrawSurface {
    fn clear(&mut self, bounds: Bounds);
    fn fill_rect(&mut self, bounds: Bounds, color: Color);
    fn stroke_rect(&mut self, bounds: Bounds, color: Color, line_width: f32);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);
}

/// A single recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Bounds),
    FillRect { bounds: Bounds, color: Color },
    StrokeRect { bounds: Bounds, color: Color, line_width: f32 },
    FillCircle { center: Point, radius: f32, color: Color },
    Line { from: Point, to: Point, stroke: Stroke },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Clear(b) => {
                write!(f, "clear {} {} {} {}", b.origin.x, b.origin.y, b.width, b.height)
            }
            DrawCommand::FillRect { bounds: b, color } => write!(
                f,
                "fill_rect {} {} {} {} {}",
                b.origin.x, b.origin.y, b.width, b.height, color
            ),
            DrawCommand::StrokeRect { bounds: b, color, line_width } => write!(
                f,
                "stroke_rect {} {} {} {} {} w={}",
                b.origin.x, b.origin.y, b.width, b.height, color, line_width
            ),
            DrawCommand::FillCircle { center, radius, color } => {
                write!(f, "circle {} {} r={} {}", center.x, center.y, radius, color)
            }
            DrawCommand::Line { from, to, stroke } => {
                write!(
                    f,
                    "line {} {} -> {} {} {} w={}",
                    from.x, from.y, to.x, to.y, stroke.color, stroke.width
                )?;
                if let Some([on, off]) = stroke.dash {
                    write!(f, " dash={on},{off}")?;
                }
                Ok(())
            }
        }
    }
}

/// Records draw calls in issue order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay every recorded call onto another surface
    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match *command {
                DrawCommand::Clear(bounds) => surface.clear(bounds),
                DrawCommand::FillRect { bounds, color } => surface.fill_rect(bounds, color),
                DrawCommand::StrokeRect { bounds, color, line_width } => {
                    surface.stroke_rect(bounds, color, line_width)
                }
                DrawCommand::FillCircle { center, radius, color } => {
                    surface.fill_circle(center, radius, color)
                }
                DrawCommand::Line { from, to, stroke } => surface.line(from, to, stroke),
            }
        }
    }

    /// One line per command, for logs and snapshot tests
    pub fn trace(&self) -> String {
        self.commands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DrawSurface for DrawList {
    fn clear(&mut self, bounds: Bounds) {
        self.commands.push(DrawCommand::Clear(bounds));
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.commands.push(DrawCommand::FillRect { bounds, color });
    }

    fn stroke_rect(&mut self, bounds: Bounds, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect { bounds, color, line_width });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }
}
