//! What a renderer paints, and in which order.

use std::slice::Iter;
use std::sync::Arc;

use crate::{DrawingState, Stroke};

/// Strokes in paint order: committed strokes oldest first, then the stroke in
/// progress on top.
#[derive(Debug, Clone)]
pub struct RenderList<'a> {
    committed: Iter<'a, Arc<Stroke>>,
    current: Option<&'a Stroke>,
}

impl<'a> RenderList<'a> {
    /// Build the paint order for a state.
    #[must_use]
    pub fn new(state: &'a DrawingState) -> Self {
        Self {
            committed: state.committed_strokes().iter(),
            current: state.current_stroke(),
        }
    }

    /// Whether there is nothing left to paint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.as_slice().is_empty() && self.current.is_none()
    }
}

impl<'a> Iterator for RenderList<'a> {
    type Item = &'a Stroke;

    fn next(&mut self) -> Option<Self::Item> {
        self.committed
            .next()
            .map(|stroke| &**stroke)
            .or_else(|| self.current.take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.committed.len() + usize::from(self.current.is_some());
        (len, Some(len))
    }
}

impl ExactSizeIterator for RenderList<'_> {}

impl DrawingState {
    /// Strokes to paint, bottom to top.
    #[must_use]
    pub fn render_list(&self) -> RenderList<'_> {
        RenderList::new(self)
    }
}

/// Paints the drawing.
///
/// Any renderer can be attached to a [`DrawingMachine`](crate::DrawingMachine)
/// through [`RenderObserver`] to repaint on every state change.
pub trait Renderer {
    /// Paint the given strokes in order.
    fn render(&mut self, strokes: RenderList<'_>);
}

/// Adapts a [`Renderer`] into an [`Observer`](crate::Observer).
#[derive(Debug, Default)]
pub struct RenderObserver<R>(pub R);

impl<R: Renderer> crate::Observer for RenderObserver<R> {
    fn on_state(&mut self, state: &DrawingState) {
        self.0.render(state.render_list());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Point, StrokeId};

    #[test]
    fn test_empty_state_renders_nothing() {
        let state = DrawingState::new();
        assert_eq!(state.render_list().len(), 0);
        assert!(state.render_list().is_empty());
        assert!(state.render_list().next().is_none());
    }

    #[test]
    fn test_is_empty_tracks_remaining_strokes() {
        let mut state = DrawingState::new();
        state.apply(Action::StartStroke);
        state.apply(Action::EndStroke);
        state.apply(Action::StartStroke);

        let mut list = state.render_list();
        assert!(!list.is_empty());
        assert!(list.next().is_some());
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
        assert!(list.next().is_some());
        assert!(list.is_empty());
        assert!(list.next().is_none());
    }

    #[test]
    fn test_current_stroke_paints_last() {
        let mut state = DrawingState::new();
        state.apply(Action::StartStroke);
        state.apply(Action::EndStroke);
        state.apply(Action::StartStroke);
        state.apply(Action::EndStroke);
        state.apply(Action::StartStroke);
        state.apply(Action::ExtendStroke(Point::new(5.0, 5.0)));

        let ids: Vec<StrokeId> = state.render_list().map(Stroke::id).collect();
        assert_eq!(
            ids,
            vec![
                StrokeId::from_raw(0),
                StrokeId::from_raw(1),
                StrokeId::from_raw(2)
            ]
        );
        assert_eq!(state.render_list().len(), 3);
    }

    #[test]
    fn test_undone_strokes_are_not_rendered() {
        let mut state = DrawingState::new();
        state.apply(Action::StartStroke);
        state.apply(Action::EndStroke);
        state.apply(Action::Undo);
        assert_eq!(state.render_list().len(), 0);
        assert!(state.render_list().is_empty());
    }

    #[derive(Default)]
    struct CountingRenderer {
        frames: Vec<usize>,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, strokes: RenderList<'_>) {
            self.frames.push(strokes.count());
        }
    }

    #[test]
    fn test_render_observer_paints_on_state() {
        use crate::Observer;

        let mut observer = RenderObserver(CountingRenderer::default());
        let mut state = DrawingState::new();
        observer.on_state(&state);
        state.apply(Action::StartStroke);
        observer.on_state(&state);
        assert_eq!(observer.0.frames, vec![0, 1]);
    }
}
