//! Switchyard: an embeddable finite-state-machine engine
//!
//! Switchyard dispatches caller-supplied actions on state transitions and
//! tracks the current state. It is meant to be embedded inside larger
//! stateful components (UI controllers, session handlers) that want explicit,
//! auditable transition logic instead of ad-hoc conditional branching.
//!
//! # Core Concepts
//!
//! - **States and events**: caller-defined enums implementing the [`State`]
//!   and [`Event`] traits (or generated with [`state_enum!`] /
//!   [`event_enum!`])
//! - **Transition table**: at most one [`TransitionEntry`] per
//!   (source state, event) pair; entries without a target are *internal*
//!   transitions that never change state
//! - **Actions**: zero-argument [`StateAction`]s fired on entering/leaving a
//!   state, and [`TransitionAction`]s that receive the caller's dispatch
//!   parameters and may override the target
//! - **Silent ignore**: an event with no entry for the current state is
//!   ignored, visible only in diagnostics and the [`DispatchJournal`]
//!
//! A machine seals itself on its first dispatch; wiring after that point is
//! rejected with [`SealedError`] rather than landing in a stale table.
//!
//! # Example
//!
//! ```rust
//! use switchyard::builder::{StateMachineBuilder, TransitionBuilder};
//! use switchyard::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! event_enum! {
//!     enum Stimulus {
//!         Push,
//!         Pull,
//!     }
//! }
//!
//! let mut door = StateMachineBuilder::new()
//!     .initial(Door::Closed)
//!     .label("front-door")
//!     .transition(
//!         TransitionBuilder::new()
//!             .from(Door::Closed)
//!             .on(Stimulus::Pull)
//!             .to(Door::Open),
//!     )
//!     .unwrap()
//!     .transition(
//!         TransitionBuilder::new()
//!             .from(Door::Open)
//!             .on(Stimulus::Push)
//!             .to(Door::Closed),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(door.fire(Stimulus::Pull).unwrap(), Door::Open);
//!
//! // Pulling an open door is not wired: silently ignored.
//! assert_eq!(door.fire(Stimulus::Pull).unwrap(), Door::Open);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{
    ActionError, DispatchJournal, DispatchKind, DispatchRecord, Event, State, StateAction,
    TransitionAction,
};
pub use crate::engine::{DispatchError, ExitTiming, SealedError, StateMachine, TransitionEntry};
