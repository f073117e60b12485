//! The board: the ordered rectangle and connection collections.
//!
//! Stored order is z-order for rectangles (later = drawn on top). Ids come
//! from two monotonic counters and are never reused, even after deletion.

use rand::Rng;
use tracing::{debug, info};

use crate::constants::{PLACEMENT_MARGIN, RECT_HEIGHT, RECT_WIDTH};
use crate::error::ConnectionRejected;
use crate::types::{CanvasSize, Connection, ConnectionId, RectId, Rectangle, SlotRef};

/// Outcome of a rectangle deletion
#[derive(Clone, Debug, PartialEq)]
pub struct Deleted {
    pub rectangle: Rectangle,
    /// Connections removed because they touched the rectangle
    pub cascaded: usize,
}

#[derive(Clone, Debug)]
pub struct Board {
    pub rectangles: Vec<Rectangle>,
    pub connections: Vec<Connection>,
    pub next_rect_id: RectId,
    pub next_connection_id: ConnectionId,
    /// Size given to new rectangles
    pub rect_size: (f32, f32),
    /// Distance kept from the canvas edges on random placement
    pub margin: f32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_layout((RECT_WIDTH, RECT_HEIGHT), PLACEMENT_MARGIN)
    }

    pub fn with_layout(rect_size: (f32, f32), margin: f32) -> Self {
        Self {
            rectangles: Vec::new(),
            connections: Vec::new(),
            next_rect_id: 0,
            next_connection_id: 0,
            rect_size,
            margin,
        }
    }

    // ------------------------------------------------------------------------
    // Rectangles
    // ------------------------------------------------------------------------

    /// Add a rectangle at a uniformly random position that keeps it inside
    /// the canvas with `margin` on every side.
    ///
    /// A canvas too small for that range pins the affected axis to the margin.
    pub fn add_rectangle<R: Rng>(&mut self, canvas: CanvasSize, rng: &mut R) -> &Rectangle {
        let (width, height) = self.rect_size;
        let x = self.random_axis(canvas.width - width, rng);
        let y = self.random_axis(canvas.height - height, rng);
        self.add_rectangle_at(x, y)
    }

    fn random_axis<R: Rng>(&self, free_span: f32, rng: &mut R) -> f32 {
        let low = self.margin;
        let high = free_span - self.margin;
        if high > low {
            rng.gen_range(low..=high)
        } else {
            low
        }
    }

    /// Add a rectangle with its top-left corner at `(x, y)`.
    pub fn add_rectangle_at(&mut self, x: f32, y: f32) -> &Rectangle {
        let id = self.next_rect_id;
        self.next_rect_id += 1;

        let (width, height) = self.rect_size;
        self.rectangles.push(Rectangle { id, x, y, width, height });
        info!(rect_id = id, x, y, "Added rectangle");

        &self.rectangles[self.rectangles.len() - 1]
    }

    pub fn rectangle(&self, id: RectId) -> Option<&Rectangle> {
        self.rectangles.iter().find(|r| r.id == id)
    }

    pub fn rectangle_mut(&mut self, id: RectId) -> Option<&mut Rectangle> {
        self.rectangles.iter_mut().find(|r| r.id == id)
    }

    /// Remove a rectangle and every connection touching it.
    ///
    /// Returns `None` when no rectangle has this id.
    pub fn delete_rectangle(&mut self, id: RectId) -> Option<Deleted> {
        let index = self.rectangles.iter().position(|r| r.id == id)?;
        let rectangle = self.rectangles.remove(index);

        let before = self.connections.len();
        self.connections.retain(|c| !c.touches(id));
        let cascaded = before - self.connections.len();

        info!(rect_id = id, cascaded, "Deleted rectangle and associated connections");
        Some(Deleted { rectangle, cascaded })
    }

    // ------------------------------------------------------------------------
    // Connections
    // ------------------------------------------------------------------------

    /// Connect two slots.
    ///
    /// Rejects identical endpoints and connections that already exist in
    /// either orientation. Endpoint rectangles are not required to exist.
    pub fn add_connection(&mut self, start: SlotRef, end: SlotRef) -> Result<&Connection, ConnectionRejected> {
        if start == end {
            debug!(slot = %start, "Rejected degenerate connection");
            return Err(ConnectionRejected::Degenerate);
        }
        if self.connections.iter().any(|c| c.joins(start, end)) {
            debug!(start = %start, end = %end, "Connection already exists");
            return Err(ConnectionRejected::Duplicate);
        }

        let id = self.next_connection_id;
        self.next_connection_id += 1;
        self.connections.push(Connection { id, start, end });
        debug!(connection_id = id, start = %start, end = %end, "Added connection");

        Ok(&self.connections[self.connections.len() - 1])
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    /// Connections with an endpoint on the given rectangle, in stored order
    pub fn connections_of(&self, rect_id: RectId) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.touches(rect_id))
    }

    /// Remove a single connection. Returns it if it existed.
    pub fn remove_connection(&mut self, id: ConnectionId) -> Option<Connection> {
        let index = self.connections.iter().position(|c| c.id == id)?;
        Some(self.connections.remove(index))
    }

    /// Resolve both endpoint rectangles, or `None` if either is gone
    pub fn endpoints(&self, connection: &Connection) -> Option<(&Rectangle, &Rectangle)> {
        Some((
            self.rectangle(connection.start.rect_id)?,
            self.rectangle(connection.end.rect_id)?,
        ))
    }
}
