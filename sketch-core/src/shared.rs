//! Thread-safe drawing machine handle.
//!
//! [`SharedMachine`] serializes dispatches behind a lock and publishes each
//! resulting state on a broadcast channel, so renderers running on other
//! threads or tasks receive the same ordered sequence of snapshots.

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::broadcast;

use crate::input::{InputAdapter, PointerEvent};
use crate::{Action, Control, DrawingState, SketchConfig, SketchResult, Transition};

/// A published drawing state.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Dispatch count that produced this state. Strictly increasing.
    pub revision: u64,
    /// The state after that dispatch.
    pub state: Arc<DrawingState>,
}

#[derive(Debug)]
struct Inner {
    state: DrawingState,
    revision: u64,
    input: InputAdapter,
}

/// Cloneable, thread-safe handle to one drawing session.
///
/// # Example
///
/// ```
/// use sketch_core::{Action, SharedMachine};
///
/// let machine = SharedMachine::new();
/// let mut snapshots = machine.subscribe();
///
/// machine.dispatch(Action::StartStroke);
/// machine.dispatch(Action::EndStroke);
///
/// let first = snapshots.try_recv().unwrap();
/// let second = snapshots.try_recv().unwrap();
/// assert!(first.revision < second.revision);
/// assert!(second.state.can_undo());
/// ```
#[derive(Debug, Clone)]
pub struct SharedMachine {
    inner: Arc<RwLock<Inner>>,
    snapshot_tx: broadcast::Sender<Snapshot>,
}

impl SharedMachine {
    /// Create a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&SketchConfig::default())
    }

    /// Create a session from a configuration.
    #[must_use]
    pub fn with_config(config: &SketchConfig) -> Self {
        // broadcast::channel panics on zero capacity
        let (snapshot_tx, _) = broadcast::channel(config.snapshot_capacity.max(1));
        Self {
            inner: Arc::new(RwLock::new(Inner {
                state: DrawingState::with_color(config.default_color),
                revision: 0,
                input: InputAdapter::new(),
            })),
            snapshot_tx,
        }
    }

    /// Apply one action and publish the resulting snapshot.
    pub fn dispatch(&self, action: Action) -> Transition {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        self.apply_locked(&mut inner, action)
    }

    /// Apply actions in order without interleaving other dispatchers.
    pub fn dispatch_all<I>(&self, actions: I)
    where
        I: IntoIterator<Item = Action>,
    {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        for action in actions {
            self.apply_locked(&mut inner, action);
        }
    }

    /// Translate a pointer event and dispatch the resulting actions atomically.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidPoint`](crate::SketchError::InvalidPoint)
    /// for non-finite coordinates; nothing is dispatched.
    pub fn handle_pointer(&self, event: PointerEvent) -> SketchResult<()> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let actions = inner.input.translate(event)?;
        for action in actions {
            self.apply_locked(&mut inner, action);
        }
        Ok(())
    }

    /// Activate a control if it is enabled in the current state.
    pub fn handle_control(&self, control: Control) -> Option<Transition> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let action = control.action(&inner.state)?;
        Some(self.apply_locked(&mut inner, action))
    }

    fn apply_locked(&self, inner: &mut Inner, action: Action) -> Transition {
        let transition = inner.state.apply(action);
        inner.revision += 1;
        // Committed strokes are shared, only the in-progress stroke is copied.
        let snapshot = Snapshot {
            revision: inner.revision,
            state: Arc::new(inner.state.clone()),
        };
        // Sent under the lock so every receiver sees dispatch order.
        // No receivers is fine.
        let _ = self.snapshot_tx.send(snapshot);
        transition
    }

    /// Subscribe to snapshots published after this call.
    ///
    /// The channel holds `snapshot_capacity` snapshots. A receiver that falls
    /// further behind gets [`RecvError::Lagged`](broadcast::error::RecvError::Lagged)
    /// with the number of skipped snapshots and then resumes at the oldest one
    /// still buffered. Revisions stay strictly increasing, so a lagging
    /// renderer can repaint from the next snapshot it receives, or call
    /// [`current_state`](Self::current_state).
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.snapshot_tx.receiver_count()
    }

    /// The latest state.
    #[must_use]
    pub fn current_state(&self) -> Snapshot {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Snapshot {
            revision: inner.revision,
            state: Arc::new(inner.state.clone()),
        }
    }

    /// Number of dispatches applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .revision
    }
}

impl Default for SharedMachine {
    fn default() -> Self {
        Self::new()
    }
}
