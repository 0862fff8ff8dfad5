//! Dispatch and sealing errors.

use thiserror::Error;

use crate::core::ActionError;

/// A caller-supplied action failed during dispatch.
///
/// The variant names the phase of the transition protocol that failed; the
/// caller's own error is preserved intact as the source. The machine's state
/// is never advanced by a failed dispatch, but side effects of phases that
/// already ran are not rolled back (see
/// [`ExitTiming`](crate::engine::ExitTiming)).
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("exit action for state '{state}' failed")]
    ExitActionFailed {
        state: String,
        #[source]
        source: ActionError,
    },

    #[error("transition action for event '{event}' in state '{state}' failed")]
    TransitionActionFailed {
        state: String,
        event: String,
        #[source]
        source: ActionError,
    },

    #[error("entry action for state '{state}' failed")]
    EntryActionFailed {
        state: String,
        #[source]
        source: ActionError,
    },
}

/// The machine has already dispatched and its wiring is frozen.
///
/// Transitions and actions must be registered before the first call to
/// `execute`; the first dispatch builds the transition index and seals the
/// machine.
#[derive(Debug, Error)]
#[error("machine '{label}' is sealed; transitions and actions must be registered before the first dispatch")]
pub struct SealedError {
    pub label: String,
}
