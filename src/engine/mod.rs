//! The dispatch engine.
//!
//! This module holds the machinery around the [`StateMachine`]:
//! - [`TransitionEntry`]: one row of the transition table
//! - [`StateMachine`]: current state, registries, and the dispatch protocol
//! - [`DispatchError`] / [`SealedError`]: failures surfaced to callers
//!
//! The engine is fully synchronous: a dispatch performs lookup, exit action,
//! transition action, entry action, and state mutation on the calling thread
//! with no suspension points.

mod error;
mod machine;
mod transition;

pub use error::{DispatchError, SealedError};
pub use machine::{ExitTiming, StateMachine};
pub use transition::TransitionEntry;
