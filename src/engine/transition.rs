//! Transition table entries.

use crate::core::{Event, State, TransitionAction};

/// One row of the transition table: what happens when `event` arrives while
/// the machine is in `source`.
///
/// A `target` of `None` marks an **internal** transition: the state never
/// changes and entry/exit actions never fire; only the transition action
/// runs, and without the caller's dispatch parameters. A present `target`
/// marks a **full** transition, which fires exit and entry actions and may
/// change state, including a self-loop when `target` equals `source`.
///
/// For a fixed (source, event) pair, the last entry registered wins.
pub struct TransitionEntry<S: State, E: Event> {
    pub source: S,
    pub target: Option<S>,
    pub event: E,
    pub action: Option<TransitionAction<S>>,
}

impl<S: State, E: Event> TransitionEntry<S, E> {
    /// Create a full transition from `source` to `target`, with no action.
    pub fn full(source: S, event: E, target: S) -> Self {
        Self {
            source,
            target: Some(target),
            event,
            action: None,
        }
    }

    /// Create an internal transition, with no action.
    pub fn internal(source: S, event: E) -> Self {
        Self {
            source,
            target: None,
            event,
            action: None,
        }
    }

    /// Attach a transition action.
    pub fn with_action(mut self, action: TransitionAction<S>) -> Self {
        self.action = Some(action);
        self
    }

    /// Whether this entry is an internal transition.
    pub fn is_internal(&self) -> bool {
        self.target.is_none()
    }
}
