//! Pointer input translation.
//!
//! Maps raw pointer events onto drawing actions:
//!
//! ```text
//! Down(p)          -> StartStroke, ExtendStroke(p)
//! Move(p) pressed  -> ExtendStroke(p)
//! Move(p) hovering -> (nothing)
//! Up | Cancel      -> EndStroke
//! ```

use serde::{Deserialize, Serialize};

use crate::{Action, Point, SketchError, SketchResult};

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// Pointer pressed (finger/pen down, mouse button down).
    Down,
    /// Pointer moved.
    Move,
    /// Pointer released.
    Up,
    /// Gesture aborted by the platform (e.g. pointer left the surface).
    Cancel,
}

/// A single pointer sample in drawing-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Phase of this event.
    pub phase: PointerPhase,
    /// X position in surface coordinates.
    pub x: f32,
    /// Y position in surface coordinates.
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    /// The event position as a point.
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Tracks whether the pointer is pressed and turns events into actions.
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    pressed: bool,
}

impl InputAdapter {
    /// Create an adapter with the pointer released.
    #[must_use]
    pub const fn new() -> Self {
        Self { pressed: false }
    }

    /// Whether a press is in progress.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Translate one pointer event.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidPoint`] for non-finite coordinates on
    /// `Down` and `Move`. The adapter state is left unchanged.
    pub fn translate(&mut self, event: PointerEvent) -> SketchResult<Vec<Action>> {
        let actions = match event.phase {
            PointerPhase::Down => {
                let point = Self::validate(event)?;
                if self.pressed {
                    tracing::debug!("Pointer down while already pressed; restarting stroke");
                }
                self.pressed = true;
                vec![Action::StartStroke, Action::ExtendStroke(point)]
            }
            PointerPhase::Move => {
                let point = Self::validate(event)?;
                if self.pressed {
                    vec![Action::ExtendStroke(point)]
                } else {
                    Vec::new()
                }
            }
            // Release position is not sampled; the last move already was.
            PointerPhase::Up | PointerPhase::Cancel => {
                self.pressed = false;
                vec![Action::EndStroke]
            }
        };
        Ok(actions)
    }

    fn validate(event: PointerEvent) -> SketchResult<Point> {
        let point = event.point();
        if point.is_finite() {
            Ok(point)
        } else {
            tracing::warn!(x = event.x, y = event.y, "Rejected non-finite pointer sample");
            Err(SketchError::InvalidPoint {
                x: event.x,
                y: event.y,
            })
        }
    }
}
