//! Caller-supplied actions fired during dispatch.
//!
//! Exactly two callable shapes exist:
//! - [`StateAction`]: zero-argument, bound to a state, fired on entering or
//!   leaving it during a full transition.
//! - [`TransitionAction`]: bound to a (source state, event) pair, receives
//!   the caller's positional dispatch parameters and may return a state that
//!   overrides the statically configured target.
//!
//! Actions are side-effecting by design. A failing action surfaces its error
//! to the `execute` caller unmodified; the engine performs no local recovery.

use std::any::Any;

use super::state::State;

/// Error type produced by caller-supplied actions.
///
/// The engine propagates these to the `execute` caller with the source chain
/// intact; it never retries or suppresses them.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Zero-argument action bound to a state, fired on entry or exit.
///
/// The success value carries no information; only the side effect matters.
///
/// # Example
///
/// ```rust
/// use switchyard::core::StateAction;
///
/// let action = StateAction::from_fn(|| println!("entering"));
/// assert!(action.invoke().is_ok());
/// ```
pub struct StateAction {
    callback: Box<dyn Fn() -> Result<(), ActionError> + Send + Sync>,
}

impl StateAction {
    /// Create an action from a fallible callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() -> Result<(), ActionError> + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Create an action from an infallible callback.
    pub fn from_fn<F>(callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::new(move || {
            callback();
            Ok(())
        })
    }

    /// Run the action.
    pub fn invoke(&self) -> Result<(), ActionError> {
        (self.callback)()
    }
}

/// Variable-argument action bound to a (source state, event) pair.
///
/// On a full transition the action receives the caller's positional
/// parameters as a slice of opaque `Any` values; returning `Some(state)`
/// overrides the statically configured target, `None` keeps it. On an
/// internal transition the action is invoked with an empty slice and its
/// return value is ignored (state cannot change).
///
/// # Example
///
/// ```rust
/// use switchyard::core::TransitionAction;
/// use serde::{Deserialize, Serialize};
///
/// # use switchyard::core::State;
/// # #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// # enum S { A, B }
/// # impl State for S {
/// #     fn name(&self) -> &str { match self { Self::A => "A", Self::B => "B" } }
/// # }
/// // Override the target with a caller-supplied state, when one is given.
/// let action: TransitionAction<S> = TransitionAction::new(|params| {
///     Ok(params.first().and_then(|p| p.downcast_ref::<S>()).cloned())
/// });
///
/// assert_eq!(action.invoke(&[&S::B]).unwrap(), Some(S::B));
/// assert_eq!(action.invoke(&[]).unwrap(), None);
/// ```
pub struct TransitionAction<S: State> {
    #[allow(clippy::type_complexity)]
    callback: Box<dyn Fn(&[&dyn Any]) -> Result<Option<S>, ActionError> + Send + Sync>,
}

impl<S: State> TransitionAction<S> {
    /// Create an action from a fallible callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&[&dyn Any]) -> Result<Option<S>, ActionError> + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Create an action from an infallible callback that never overrides the
    /// target.
    pub fn from_fn<F>(callback: F) -> Self
    where
        F: Fn(&[&dyn Any]) + Send + Sync + 'static,
    {
        Self::new(move |params| {
            callback(params);
            Ok(None)
        })
    }

    /// Run the action with the given dispatch parameters.
    pub fn invoke(&self, params: &[&dyn Any]) -> Result<Option<S>, ActionError> {
        (self.callback)(params)
    }
}
