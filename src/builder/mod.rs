//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for wiring machines with
//! minimal boilerplate: [`StateMachineBuilder`] assembles a machine in one
//! expression, [`TransitionBuilder`] describes a single table row, and the
//! [`state_enum!`](crate::state_enum) / [`event_enum!`](crate::event_enum)
//! macros generate the enum plumbing.
//!
//! The raw registration API on
//! [`StateMachine`](crate::engine::StateMachine) remains available for
//! callers that wire machines incrementally.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
