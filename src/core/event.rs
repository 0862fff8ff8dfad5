//! Core Event trait for dispatch triggers.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the events that trigger dispatch.
///
/// Events are members of a finite, caller-defined enumeration. Together with
/// the current state they select at most one transition entry; an event with
/// no entry for the current state is silently ignored.
///
/// Bounds mirror [`State`](super::State): events key the transition index
/// (`Eq + Hash`), are copied into journal records (`Clone`, serde), and are
/// named for diagnostics.
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}
