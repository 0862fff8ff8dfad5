//! Core vocabulary of the engine.
//!
//! This module contains the types dispatch is spoken in:
//! - State and event definitions via the [`State`] and [`Event`] traits
//! - The two caller-supplied action shapes, [`StateAction`] and
//!   [`TransitionAction`]
//! - The immutable [`DispatchJournal`] audit trail

mod action;
mod event;
mod journal;
mod state;

pub use action::{ActionError, StateAction, TransitionAction};
pub use event::Event;
pub use journal::{DispatchJournal, DispatchKind, DispatchRecord};
pub use state::State;
