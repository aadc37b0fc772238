//! Drawing controls: color swatches and the undo/redo/clear buttons.

use serde::{Deserialize, Serialize};

use crate::{Action, Color, DrawingState};

/// A user-facing control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "control", content = "color", rename_all = "lowercase")]
pub enum Control {
    /// A color swatch.
    Swatch(Color),
    /// The undo button.
    Undo,
    /// The redo button.
    Redo,
    /// The clear button.
    Clear,
}

impl Control {
    /// Whether the control can be activated in this state.
    ///
    /// Undo and redo are disabled when their stack is empty; swatches and
    /// clear are always enabled.
    #[must_use]
    pub const fn is_enabled(self, state: &DrawingState) -> bool {
        match self {
            Self::Undo => state.can_undo(),
            Self::Redo => state.can_redo(),
            Self::Swatch(_) | Self::Clear => true,
        }
    }

    /// The action this control dispatches, or `None` while disabled.
    #[must_use]
    pub const fn action(self, state: &DrawingState) -> Option<Action> {
        if !self.is_enabled(state) {
            return None;
        }
        Some(match self {
            Self::Swatch(color) => Action::SelectColor(color),
            Self::Undo => Action::Undo,
            Self::Redo => Action::Redo,
            Self::Clear => Action::ClearAll,
        })
    }
}

/// The row of swatches shown by the color picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    swatches: Vec<Color>,
}

impl Palette {
    /// Create a palette from colors, in display order.
    #[must_use]
    pub fn new(swatches: Vec<Color>) -> Self {
        Self { swatches }
    }

    /// Swatch controls in display order.
    pub fn controls(&self) -> impl Iterator<Item = Control> + '_ {
        self.swatches.iter().copied().map(Control::Swatch)
    }

    /// Index of the swatch matching the selected color, if any.
    #[must_use]
    pub fn selected_index(&self, state: &DrawingState) -> Option<usize> {
        let selected = state.selected_color();
        self.swatches.iter().position(|c| *c == selected)
    }

    /// The palette colors.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.swatches
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(crate::color::DEFAULT_PALETTE.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_history() -> DrawingState {
        let mut state = DrawingState::new();
        state.apply(Action::StartStroke);
        state.apply(Action::EndStroke);
        state.apply(Action::StartStroke);
        state.apply(Action::EndStroke);
        state.apply(Action::Undo);
        state
    }

    #[test]
    fn test_undo_redo_disabled_on_fresh_state() {
        let state = DrawingState::new();
        assert!(!Control::Undo.is_enabled(&state));
        assert!(!Control::Redo.is_enabled(&state));
        assert_eq!(Control::Undo.action(&state), None);
        assert_eq!(Control::Redo.action(&state), None);
    }

    #[test]
    fn test_enabled_controls_map_to_actions() {
        let state = state_with_history();
        assert_eq!(Control::Undo.action(&state), Some(Action::Undo));
        assert_eq!(Control::Redo.action(&state), Some(Action::Redo));
        assert_eq!(Control::Clear.action(&state), Some(Action::ClearAll));
        assert_eq!(
            Control::Swatch(Color::RED).action(&state),
            Some(Action::SelectColor(Color::RED))
        );
    }

    #[test]
    fn test_clear_is_always_enabled() {
        assert!(Control::Clear.is_enabled(&DrawingState::new()));
    }

    #[test]
    fn test_palette_tracks_selection() {
        let palette = Palette::default();
        let mut state = DrawingState::new();
        assert_eq!(palette.selected_index(&state), Some(0));

        state.apply(Action::SelectColor(Color::BLUE));
        assert_eq!(palette.selected_index(&state), Some(5));

        state.apply(Action::SelectColor(Color::rgb(1, 2, 3)));
        assert_eq!(palette.selected_index(&state), None);
    }

    #[test]
    fn test_palette_controls_are_swatches() {
        let palette = Palette::new(vec![Color::RED, Color::GREEN]);
        let controls: Vec<_> = palette.controls().collect();
        assert_eq!(
            controls,
            vec![Control::Swatch(Color::RED), Control::Swatch(Color::GREEN)]
        );
    }

    #[test]
    fn test_control_json() {
        let json = serde_json::to_value(Control::Swatch(Color::RED)).expect("serialize");
        assert_eq!(json["control"], "swatch");
        assert_eq!(json["color"], "#FF0000");

        let parsed: Control = serde_json::from_str(r#"{"control":"undo"}"#).expect("parse");
        assert_eq!(parsed, Control::Undo);
    }
}
