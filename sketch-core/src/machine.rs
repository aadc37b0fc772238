//! The drawing state machine: owns a [`DrawingState`], applies actions one at
//! a time and notifies observers after each one.
//!
//! ## Usage
//!
//! ```
//! use sketch_core::{Action, DrawingMachine, Point};
//!
//! let mut machine = DrawingMachine::new();
//! let _sub = machine.subscribe(|state: &sketch_core::DrawingState| {
//!     println!("{} strokes", state.committed_strokes().len());
//! });
//!
//! machine.dispatch(Action::StartStroke);
//! machine.dispatch(Action::ExtendStroke(Point::new(1.0, 1.0)));
//! machine.dispatch(Action::EndStroke);
//! assert!(machine.current_state().can_undo());
//! ```

use crate::input::{InputAdapter, PointerEvent};
use crate::{Action, Control, DrawingState, Palette, SketchConfig, SketchResult, Transition};

/// Receives every state the machine publishes.
pub trait Observer {
    /// Called once per dispatch with the resulting state.
    fn on_state(&mut self, state: &DrawingState);
}

impl<F> Observer for F
where
    F: FnMut(&DrawingState),
{
    fn on_state(&mut self, state: &DrawingState) {
        self(state);
    }
}

/// Handle returned by [`DrawingMachine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "dropping the handle makes it impossible to unsubscribe"]
pub struct Subscription(u64);

/// Single-owner drawing state machine.
///
/// Not designed for concurrent use; see [`SharedMachine`](crate::SharedMachine)
/// for a thread-safe handle.
pub struct DrawingMachine {
    state: DrawingState,
    revision: u64,
    palette: Palette,
    input: InputAdapter,
    observers: Vec<(Subscription, Box<dyn Observer>)>,
    next_subscription: u64,
}

impl std::fmt::Debug for DrawingMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingMachine")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("observers", &format!("<{} observers>", self.observers.len()))
            .finish_non_exhaustive()
    }
}

impl DrawingMachine {
    /// Create a machine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&SketchConfig::default())
    }

    /// Create a machine from a configuration.
    #[must_use]
    pub fn with_config(config: &SketchConfig) -> Self {
        Self {
            state: DrawingState::with_color(config.default_color),
            revision: 0,
            palette: Palette::new(config.palette.clone()),
            input: InputAdapter::new(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Apply one action and notify every observer.
    ///
    /// Observers run after the transition has been fully applied, in
    /// subscription order, and are called even when the action was a no-op.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let transition = self.state.apply(action);
        self.revision += 1;
        for (_, observer) in &mut self.observers {
            observer.on_state(&self.state);
        }
        transition
    }

    /// Dispatch a sequence of actions in order.
    pub fn dispatch_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Translate a raw pointer event and dispatch the resulting actions.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidPoint`](crate::SketchError::InvalidPoint)
    /// if the event carries a non-finite coordinate. Nothing is dispatched in
    /// that case.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> SketchResult<()> {
        let actions = self.input.translate(event)?;
        self.dispatch_all(actions);
        Ok(())
    }

    /// Activate a control. Disabled controls do nothing and return `None`.
    pub fn handle_control(&mut self, control: Control) -> Option<Transition> {
        let action = control.action(&self.state)?;
        Some(self.dispatch(action))
    }

    /// Register an observer.
    pub fn subscribe<O>(&mut self, observer: O) -> Subscription
    where
        O: Observer + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        tracing::debug!("Observer {} subscribed", subscription.0);
        subscription
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != subscription);
        self.observers.len() != before
    }

    /// The state as of the last dispatch.
    #[must_use]
    pub const fn current_state(&self) -> &DrawingState {
        &self.state
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> DrawingState {
        self.state.clone()
    }

    /// Number of dispatches applied so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Swatches offered to the color picker.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for DrawingMachine {
    fn default() -> Self {
        Self::new()
    }
}
