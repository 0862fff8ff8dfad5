//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State, StateAction};
use crate::engine::{ExitTiming, StateMachine, TransitionEntry};

/// Builder for constructing state machines with a fluent API.
///
/// The built machine is fully wired and unsealed; it seals itself on its
/// first dispatch.
pub struct StateMachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    label: Option<String>,
    exit_timing: ExitTiming,
    entry_actions: Vec<(S, StateAction)>,
    exit_actions: Vec<(S, StateAction)>,
    transitions: Vec<TransitionEntry<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            label: None,
            exit_timing: ExitTiming::default(),
            entry_actions: Vec::new(),
            exit_actions: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the diagnostic label (required).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set when exit actions fire relative to transition actions.
    pub fn exit_timing(mut self, timing: ExitTiming) -> Self {
        self.exit_timing = timing;
        self
    }

    /// Register the entry action for a state. The last registration for a
    /// state wins.
    pub fn on_entry(mut self, state: S, action: StateAction) -> Self {
        self.entry_actions.push((state, action));
        self
    }

    /// Register the exit action for a state. The last registration for a
    /// state wins.
    pub fn on_exit(mut self, state: S, action: StateAction) -> Self {
        self.exit_actions.push((state, action));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: TransitionEntry<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<TransitionEntry<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let label = self.label.ok_or(BuildError::MissingLabel)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut machine = StateMachine::new(initial, label);
        machine
            .set_exit_timing(self.exit_timing)
            .expect("fresh machine is unsealed");
        for (state, action) in self.entry_actions {
            machine
                .set_entry_action(state, action)
                .expect("fresh machine is unsealed");
        }
        for (state, action) in self.exit_actions {
            machine
                .set_exit_action(state, action)
                .expect("fresh machine is unsealed");
        }
        for transition in self.transitions {
            machine
                .register_transition(transition)
                .expect("fresh machine is unsealed");
        }

        Ok(machine)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event_enum, state_enum};
    use std::sync::{Arc, Mutex};

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
        final: [Complete]
    }

    event_enum! {
        enum TestEvent {
            Advance,
            Finish,
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = StateMachineBuilder::<TestState, TestEvent>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_label() {
        let result = StateMachineBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Initial)
            .build();

        assert!(matches!(result, Err(BuildError::MissingLabel)));
    }

    #[test]
    fn builder_requires_transitions() {
        let result = StateMachineBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Initial)
            .label("empty")
            .build();

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .label("flow")
            .add_transition(TransitionEntry::full(
                TestState::Initial,
                TestEvent::Advance,
                TestState::Processing,
            ))
            .add_transition(TransitionEntry::full(
                TestState::Processing,
                TestEvent::Finish,
                TestState::Complete,
            ))
            .build();

        assert!(machine.is_ok());
        let machine = machine.unwrap();
        assert_eq!(machine.current_state(), &TestState::Initial);
        assert_eq!(machine.label(), "flow");
        assert!(!machine.is_sealed());
    }

    #[test]
    fn transition_builder_integrates() {
        let mut machine = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .label("flow")
            .transition(
                TransitionBuilder::new()
                    .from(TestState::Initial)
                    .on(TestEvent::Advance)
                    .to(TestState::Processing),
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            machine.fire(TestEvent::Advance).unwrap(),
            TestState::Processing
        );
    }

    #[test]
    fn builder_wires_entry_and_exit_actions() {
        let log: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let exit_sink = Arc::clone(&log);
        let entry_sink = Arc::clone(&log);

        let mut machine = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .label("flow")
            .on_exit(
                TestState::Initial,
                StateAction::from_fn(move || {
                    exit_sink.lock().unwrap().push("exit".to_string());
                }),
            )
            .on_entry(
                TestState::Processing,
                StateAction::from_fn(move || {
                    entry_sink.lock().unwrap().push("entry".to_string());
                }),
            )
            .add_transition(TransitionEntry::full(
                TestState::Initial,
                TestEvent::Advance,
                TestState::Processing,
            ))
            .build()
            .unwrap();

        machine.fire(TestEvent::Advance).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["exit", "entry"]);
    }

    #[test]
    fn builder_applies_exit_timing() {
        let machine = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .label("deferred")
            .exit_timing(ExitTiming::AfterAction)
            .add_transition(TransitionEntry::full(
                TestState::Initial,
                TestEvent::Advance,
                TestState::Processing,
            ))
            .build()
            .unwrap();

        assert_eq!(machine.exit_timing(), ExitTiming::AfterAction);
    }
}
