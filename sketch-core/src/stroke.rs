//! Strokes - the building blocks of a drawing.

use serde::{Deserialize, Serialize};

use crate::Color;

/// A 2D coordinate in the drawing surface's local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X position (pixels from left).
    pub x: f32,
    /// Y position (pixels from top).
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Unique identifier for a stroke within a drawing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeId(u64);

impl StrokeId {
    /// Create from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stroke-{}", self.0)
    }
}

/// Hands out session-unique stroke IDs from a monotonic counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeIdGenerator {
    next: u64,
}

impl StrokeIdGenerator {
    /// Create a generator starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Take the next ID.
    pub fn fresh(&mut self) -> StrokeId {
        let id = StrokeId(self.next);
        // u64 will not wrap within a session
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Make sure `id` and everything below it is never handed out again.
    pub(crate) fn skip_past(&mut self, id: StrokeId) {
        self.next = self.next.max(id.0.saturating_add(1));
    }
}

/// A freehand stroke: a color and an ordered run of points.
///
/// Points can only be appended by the drawing reducer while the stroke is in
/// progress. Once committed, a stroke is only reachable through shared
/// references and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    id: StrokeId,
    color: Color,
    points: Vec<Point>,
}

impl Stroke {
    /// Create an empty stroke.
    #[must_use]
    pub fn new(id: StrokeId, color: Color) -> Self {
        Self {
            id,
            color,
            points: Vec::new(),
        }
    }

    /// Create a stroke with the given points.
    #[must_use]
    pub fn with_points(id: StrokeId, color: Color, points: Vec<Point>) -> Self {
        Self { id, color, points }
    }

    /// The stroke's identifier.
    #[must_use]
    pub const fn id(&self) -> StrokeId {
        self.id
    }

    /// The stroke's color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The stroke's points, in drawing order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the stroke has no points (a tap with no drag).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }
}
