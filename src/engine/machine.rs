//! The dispatch engine: owns the current state and executes the transition
//! protocol.

use std::any::Any;
use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use crate::core::{
    DispatchJournal, DispatchKind, DispatchRecord, Event, State, StateAction, TransitionAction,
};
use crate::engine::error::{DispatchError, SealedError};
use crate::engine::transition::TransitionEntry;

/// When the exit action fires relative to the transition action of a full
/// transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ExitTiming {
    /// Exit fires before the transition action. If the transition action
    /// then fails, the exit effects have already been applied and are not
    /// rolled back.
    #[default]
    BeforeAction,
    /// Exit is deferred until the transition action has succeeded, so a
    /// failing transition action leaves no exit effects behind.
    AfterAction,
}

/// A finite-state machine: transition table, entry/exit action registries,
/// and the current state.
///
/// A machine is assembled in two phases. While **unsealed**, transitions and
/// actions can be registered freely; the first call to [`execute`] builds the
/// (state, event) index and **seals** the machine, after which registration
/// returns [`SealedError`]. One machine instance belongs to one logical
/// session and must not be dispatched concurrently.
///
/// Dispatch follows a fixed protocol per event:
/// - no entry for (current, event): the event is silently ignored,
/// - entry with a target (**full** transition): exit action, transition
///   action, entry action, then the state advances,
/// - entry without a target (**internal** transition): only the transition
///   action fires and the state is pinned.
///
/// Every dispatch emits one structured `tracing` event and appends one
/// journal record.
///
/// [`execute`]: StateMachine::execute
pub struct StateMachine<S: State, E: Event> {
    label: String,
    current: S,
    table: Vec<TransitionEntry<S, E>>,
    entry_actions: HashMap<S, StateAction>,
    exit_actions: HashMap<S, StateAction>,
    /// `Some` once the first dispatch has built it; building seals the
    /// machine.
    index: Option<HashMap<(S, E), usize>>,
    exit_timing: ExitTiming,
    journal: DispatchJournal<S, E>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a new machine in the given initial state.
    ///
    /// The label identifies the machine in diagnostics and nowhere else.
    pub fn new(initial: S, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            current: initial,
            table: Vec::new(),
            entry_actions: HashMap::new(),
            exit_actions: HashMap::new(),
            index: None,
            exit_timing: ExitTiming::default(),
            journal: DispatchJournal::new(),
        }
    }

    /// The diagnostic label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the current state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the machine is in a final state.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Whether the first dispatch has frozen the wiring.
    pub fn is_sealed(&self) -> bool {
        self.index.is_some()
    }

    /// The dispatch journal.
    pub fn journal(&self) -> &DispatchJournal<S, E> {
        &self.journal
    }

    /// The configured exit timing.
    pub fn exit_timing(&self) -> ExitTiming {
        self.exit_timing
    }

    /// Register a transition. For a fixed (source, event) pair the last
    /// registration wins.
    pub fn register_transition(
        &mut self,
        transition: TransitionEntry<S, E>,
    ) -> Result<(), SealedError> {
        self.check_unsealed()?;
        self.table.push(transition);
        Ok(())
    }

    /// Register the entry action for a state, replacing any prior one.
    pub fn set_entry_action(&mut self, state: S, action: StateAction) -> Result<(), SealedError> {
        self.check_unsealed()?;
        self.entry_actions.insert(state, action);
        Ok(())
    }

    /// Register the exit action for a state, replacing any prior one.
    pub fn set_exit_action(&mut self, state: S, action: StateAction) -> Result<(), SealedError> {
        self.check_unsealed()?;
        self.exit_actions.insert(state, action);
        Ok(())
    }

    /// Set when exit actions fire relative to transition actions.
    pub fn set_exit_timing(&mut self, timing: ExitTiming) -> Result<(), SealedError> {
        self.check_unsealed()?;
        self.exit_timing = timing;
        Ok(())
    }

    /// Dispatch an event with no parameters.
    ///
    /// Shorthand for `execute(event, &[])`.
    pub fn fire(&mut self, event: E) -> Result<S, DispatchError> {
        self.execute(event, &[])
    }

    /// Dispatch an event, driving the transition protocol.
    ///
    /// The first call builds the transition index and seals the machine.
    /// If no transition is registered for (current state, event), the event
    /// is ignored: no action fires and the unchanged state is returned. A
    /// full transition fires exit(current), the transition action with
    /// `params`, and entry(next), in the order selected by [`ExitTiming`];
    /// the next state is the action's override if it returned one, otherwise
    /// the entry's target. An internal transition fires only the transition
    /// action, with an empty parameter slice, and pins the state.
    ///
    /// Any action failure propagates immediately as a [`DispatchError`]
    /// carrying the action's error as its source. A failed dispatch never
    /// advances the state, but effects of phases that already ran are not
    /// rolled back.
    pub fn execute(&mut self, event: E, params: &[&dyn Any]) -> Result<S, DispatchError> {
        self.seal();

        let from = self.current.clone();
        let slot = self
            .index
            .as_ref()
            .and_then(|index| index.get(&(from.clone(), event.clone())))
            .copied();

        let Some(slot) = slot else {
            debug!(
                machine = %self.label,
                state = %from.name(),
                event = %event.name(),
                "event ignored: no transition registered"
            );
            self.journal = self.journal.record(DispatchRecord {
                from: from.clone(),
                event,
                to: from.clone(),
                kind: DispatchKind::Ignored,
                timestamp: Utc::now(),
            });
            return Ok(from);
        };

        let entry = &self.table[slot];
        let Some(target) = entry.target.clone() else {
            // Internal: the action runs without the caller's params and its
            // return value is ignored. Entry/exit actions never fire.
            let _ = run_transition_action(entry.action.as_ref(), &[], &from, &event)?;
            debug!(
                machine = %self.label,
                state = %from.name(),
                event = %event.name(),
                "internal transition"
            );
            self.journal = self.journal.record(DispatchRecord {
                from: from.clone(),
                event,
                to: from.clone(),
                kind: DispatchKind::Internal,
                timestamp: Utc::now(),
            });
            return Ok(from);
        };

        let action = entry.action.as_ref();
        let next = match self.exit_timing {
            ExitTiming::BeforeAction => {
                run_exit_action(&self.exit_actions, &from)?;
                let overridden = run_transition_action(action, params, &from, &event)?;
                overridden.unwrap_or(target)
            }
            ExitTiming::AfterAction => {
                let overridden = run_transition_action(action, params, &from, &event)?;
                run_exit_action(&self.exit_actions, &from)?;
                overridden.unwrap_or(target)
            }
        };

        if let Some(entry_action) = self.entry_actions.get(&next) {
            entry_action
                .invoke()
                .map_err(|source| DispatchError::EntryActionFailed {
                    state: next.name().to_string(),
                    source,
                })?;
        }

        self.current = next.clone();
        debug!(
            machine = %self.label,
            from = %from.name(),
            event = %event.name(),
            to = %next.name(),
            "transition"
        );
        self.journal = self.journal.record(DispatchRecord {
            from,
            event,
            to: next.clone(),
            kind: DispatchKind::Full,
            timestamp: Utc::now(),
        });
        Ok(next)
    }

    fn check_unsealed(&self) -> Result<(), SealedError> {
        if self.index.is_some() {
            return Err(SealedError {
                label: self.label.clone(),
            });
        }
        Ok(())
    }

    /// Build the (source, event) index on the first dispatch. From then on
    /// the wiring is frozen: registration attempts return [`SealedError`].
    fn seal(&mut self) {
        if self.index.is_some() {
            return;
        }
        let mut index = HashMap::with_capacity(self.table.len());
        for (slot, entry) in self.table.iter().enumerate() {
            // Insertion order makes the last registration win for a pair.
            index.insert((entry.source.clone(), entry.event.clone()), slot);
        }
        debug!(
            machine = %self.label,
            transitions = index.len(),
            "transition index built; machine sealed"
        );
        self.index = Some(index);
    }
}

fn run_exit_action<S: State>(
    exit_actions: &HashMap<S, StateAction>,
    state: &S,
) -> Result<(), DispatchError> {
    match exit_actions.get(state) {
        Some(action) => action
            .invoke()
            .map_err(|source| DispatchError::ExitActionFailed {
                state: state.name().to_string(),
                source,
            }),
        None => Ok(()),
    }
}

fn run_transition_action<S: State, E: Event>(
    action: Option<&TransitionAction<S>>,
    params: &[&dyn Any],
    state: &S,
    event: &E,
) -> Result<Option<S>, DispatchError> {
    match action {
        Some(action) => {
            action
                .invoke(params)
                .map_err(|source| DispatchError::TransitionActionFailed {
                    state: state.name().to_string(),
                    event: event.name().to_string(),
                    source,
                })
        }
        None => Ok(None),
    }
}
