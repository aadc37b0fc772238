//! Drawing state and its transition function.
//!
//! [`DrawingState`] is a plain value: the committed strokes (which double as
//! the undo stack, top = tail), the redo buffer (top = tail), the stroke in
//! progress and the selected color. [`DrawingState::apply`] is the reducer.
//! It is total, so every [`Action`] is accepted in every state.
//!
//! Committed strokes are immutable and held behind [`Arc`], so cloning a
//! state copies pointers rather than point data.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Action, Color, SketchError, Stroke, StrokeId, StrokeIdGenerator};

/// What a single [`DrawingState::apply`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The selected color changed (or was re-selected).
    ColorSelected,
    /// A new stroke began.
    Started {
        /// ID of the new stroke.
        id: StrokeId,
        /// In-progress stroke that was overwritten, if any.
        discarded: Option<StrokeId>,
    },
    /// A point was appended to the stroke in progress.
    Extended(StrokeId),
    /// The stroke in progress was committed.
    Committed(StrokeId),
    /// The most recent stroke moved to the redo buffer.
    Undone(StrokeId),
    /// The most recently undone stroke moved back.
    Redone(StrokeId),
    /// Everything was dropped.
    Cleared,
    /// The action did not apply in this state; nothing changed.
    Ignored,
}

impl Transition {
    /// Whether the state was left untouched.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// The complete drawing state.
///
/// Deserializing re-derives the undo/redo flags, rejects duplicate stroke
/// IDs and moves the ID counter past every ID present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SavedDrawing")]
pub struct DrawingState {
    /// Color applied to new strokes.
    selected_color: Color,
    /// Stroke under construction, present while a gesture is active.
    current_stroke: Option<Stroke>,
    /// Finalized strokes, oldest first. Also the render list.
    committed_strokes: Vec<Arc<Stroke>>,
    /// Strokes available for redo, most recently undone last.
    redo_buffer: Vec<Arc<Stroke>>,
    /// Cached `!committed_strokes.is_empty()`.
    can_undo: bool,
    /// Cached `!redo_buffer.is_empty()`.
    can_redo: bool,
    /// Source of stroke IDs.
    stroke_ids: StrokeIdGenerator,
}

impl DrawingState {
    /// Create an empty drawing with the default color.
    #[must_use]
    pub fn new() -> Self {
        Self::with_color(Color::default())
    }

    /// Create an empty drawing with the given starting color.
    #[must_use]
    pub fn with_color(selected_color: Color) -> Self {
        Self {
            selected_color,
            current_stroke: None,
            committed_strokes: Vec::new(),
            redo_buffer: Vec::new(),
            can_undo: false,
            can_redo: false,
            stroke_ids: StrokeIdGenerator::new(),
        }
    }

    /// Apply one action.
    ///
    /// Never fails. Actions that make no sense in the current state (undo
    /// with nothing committed, extend or end without a stroke in progress)
    /// leave the state unchanged and return [`Transition::Ignored`].
    pub fn apply(&mut self, action: Action) -> Transition {
        let transition = match action {
            Action::SelectColor(color) => {
                self.selected_color = color;
                Transition::ColorSelected
            }
            Action::StartStroke => {
                let id = self.stroke_ids.fresh();
                let discarded = self
                    .current_stroke
                    .replace(Stroke::new(id, self.selected_color))
                    .map(|stroke| stroke.id());
                if let Some(old) = discarded {
                    tracing::debug!("Discarded unfinished {old}");
                }
                Transition::Started { id, discarded }
            }
            Action::ExtendStroke(point) => match self.current_stroke.as_mut() {
                Some(stroke) => {
                    stroke.push(point);
                    Transition::Extended(stroke.id())
                }
                None => Transition::Ignored,
            },
            Action::EndStroke => match self.current_stroke.take() {
                Some(stroke) => {
                    let id = stroke.id();
                    self.committed_strokes.push(Arc::new(stroke));
                    self.redo_buffer.clear();
                    Transition::Committed(id)
                }
                None => Transition::Ignored,
            },
            Action::ClearAll => {
                self.committed_strokes.clear();
                self.redo_buffer.clear();
                self.current_stroke = None;
                Transition::Cleared
            }
            Action::Undo => match self.committed_strokes.pop() {
                Some(stroke) => {
                    let id = stroke.id();
                    self.redo_buffer.push(stroke);
                    Transition::Undone(id)
                }
                None => Transition::Ignored,
            },
            Action::Redo => match self.redo_buffer.pop() {
                Some(stroke) => {
                    let id = stroke.id();
                    self.committed_strokes.push(stroke);
                    Transition::Redone(id)
                }
                None => Transition::Ignored,
            },
        };

        self.refresh_flags();

        match transition {
            Transition::Extended(_) | Transition::Ignored => {
                tracing::trace!(action = action.name(), ?transition, "applied");
            }
            _ => tracing::debug!(
                action = action.name(),
                ?transition,
                committed = self.committed_strokes.len(),
                redo = self.redo_buffer.len(),
                "applied"
            ),
        }
        transition
    }

    fn refresh_flags(&mut self) {
        self.can_undo = !self.committed_strokes.is_empty();
        self.can_redo = !self.redo_buffer.is_empty();
    }

    /// Color applied to new strokes.
    #[must_use]
    pub const fn selected_color(&self) -> Color {
        self.selected_color
    }

    /// The stroke being drawn, if a gesture is active.
    #[must_use]
    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.current_stroke.as_ref()
    }

    /// Whether a draw gesture is active.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.current_stroke.is_some()
    }

    /// Finalized strokes, oldest first.
    #[must_use]
    pub fn committed_strokes(&self) -> &[Arc<Stroke>] {
        &self.committed_strokes
    }

    /// Strokes available for redo, most recently undone last.
    #[must_use]
    pub fn redo_buffer(&self) -> &[Arc<Stroke>] {
        &self.redo_buffer
    }

    /// Whether [`Action::Undo`] would do anything.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.can_undo
    }

    /// Whether [`Action::Redo`] would do anything.
    #[must_use]
    pub const fn can_redo(&self) -> bool {
        self.can_redo
    }

    /// Look up a committed stroke by ID.
    #[must_use]
    pub fn committed_stroke(&self, id: StrokeId) -> Option<&Stroke> {
        self.committed_strokes
            .iter()
            .find(|s| s.id() == id)
            .map(|s| &**s)
    }
}

/// Wire form of a [`DrawingState`]. The cached flags are not trusted.
#[derive(Default, Deserialize)]
#[serde(default)]
struct SavedDrawing {
    selected_color: Color,
    current_stroke: Option<Stroke>,
    committed_strokes: Vec<Arc<Stroke>>,
    redo_buffer: Vec<Arc<Stroke>>,
    stroke_ids: StrokeIdGenerator,
}

impl TryFrom<SavedDrawing> for DrawingState {
    type Error = SketchError;

    fn try_from(saved: SavedDrawing) -> Result<Self, Self::Error> {
        let mut stroke_ids = saved.stroke_ids;
        let mut seen = HashSet::new();
        let all = saved
            .committed_strokes
            .iter()
            .chain(&saved.redo_buffer)
            .map(|s| &**s)
            .chain(saved.current_stroke.as_ref());
        for stroke in all {
            if !seen.insert(stroke.id()) {
                return Err(SketchError::InvalidState(format!(
                    "duplicate {}",
                    stroke.id()
                )));
            }
            stroke_ids.skip_past(stroke.id());
        }

        let mut state = Self {
            selected_color: saved.selected_color,
            current_stroke: saved.current_stroke,
            committed_strokes: saved.committed_strokes,
            redo_buffer: saved.redo_buffer,
            can_undo: false,
            can_redo: false,
            stroke_ids,
        };
        state.refresh_flags();
        Ok(state)
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new()
    }
}
