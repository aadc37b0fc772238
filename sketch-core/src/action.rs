//! Actions dispatched into the drawing state machine.

use serde::{Deserialize, Serialize};

use crate::{Color, Point};

/// Every transition the drawing state machine accepts.
///
/// All variants are valid in every state; out-of-order sequences degrade to
/// no-ops rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Action {
    /// Set the color applied to new strokes.
    SelectColor(Color),
    /// Begin a new stroke, discarding any stroke already in progress.
    StartStroke,
    /// Append a point to the stroke in progress.
    ExtendStroke(Point),
    /// Commit the stroke in progress.
    EndStroke,
    /// Drop every stroke and all history.
    ClearAll,
    /// Move the most recent committed stroke to the redo buffer.
    Undo,
    /// Move the most recently undone stroke back.
    Redo,
}

impl Action {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectColor(_) => "select_color",
            Self::StartStroke => "start_stroke",
            Self::ExtendStroke(_) => "extend_stroke",
            Self::EndStroke => "end_stroke",
            Self::ClearAll => "clear_all",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}
