//! Builder for constructing transition entries.

use std::any::Any;

use crate::builder::error::BuildError;
use crate::core::{ActionError, Event, State, TransitionAction};
use crate::engine::TransitionEntry;

/// Builder for constructing transitions with a fluent API.
///
/// Exactly one of [`to`](Self::to) or [`internal`](Self::internal) must be
/// called before [`build`](Self::build).
pub struct TransitionBuilder<S: State, E: Event> {
    from: Option<S>,
    event: Option<E>,
    /// `Some(Some(s))` = full transition to `s`, `Some(None)` = internal.
    target: Option<Option<S>>,
    action: Option<TransitionAction<S>>,
}

impl<S: State, E: Event> TransitionBuilder<S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            target: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Make this a full transition targeting `state`.
    pub fn to(mut self, state: S) -> Self {
        self.target = Some(Some(state));
        self
    }

    /// Make this an internal transition: no state change, no entry/exit
    /// actions.
    pub fn internal(mut self) -> Self {
        self.target = Some(None);
        self
    }

    /// Set the transition action from a fallible callback that may override
    /// the target (optional).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&[&dyn Any]) -> Result<Option<S>, ActionError> + Send + Sync + 'static,
    {
        self.action = Some(TransitionAction::new(action));
        self
    }

    /// Set the transition action from an infallible side effect (optional).
    pub fn effect<F>(mut self, effect: F) -> Self
    where
        F: Fn(&[&dyn Any]) + Send + Sync + 'static,
    {
        self.action = Some(TransitionAction::from_fn(effect));
        self
    }

    /// Build the transition entry.
    pub fn build(self) -> Result<TransitionEntry<S, E>, BuildError> {
        let source = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let target = self.target.ok_or(BuildError::MissingTarget)?;

        Ok(TransitionEntry {
            source,
            target,
            event,
            action: self.action,
        })
    }
}

impl<S: State, E: Event> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
