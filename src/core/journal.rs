//! Dispatch journal: an in-memory audit trail of machine activity.
//!
//! Every completed dispatch (full, internal, or ignored) appends one record.
//! The journal is immutable: `record` returns a new journal with the record
//! added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::event::Event;
use super::state::State;

/// How a dispatch was resolved.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum DispatchKind {
    /// A transition with a target state; exit/entry actions fired and the
    /// state may have changed.
    Full,
    /// A transition without a target state; only the transition action fired.
    Internal,
    /// No transition registered for the (state, event) pair; nothing fired.
    Ignored,
}

/// Record of a single dispatch.
///
/// For internal and ignored dispatches `to` equals `from`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<S: State, E: Event> {
    /// The state the machine was in when the event arrived
    pub from: S,
    /// The triggering event
    pub event: E,
    /// The state the machine was in after the dispatch
    pub to: S,
    /// How the dispatch was resolved
    pub kind: DispatchKind,
    /// When the dispatch completed
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of dispatch records.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{DispatchJournal, DispatchKind, DispatchRecord, Event, State};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase { One, Two }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::One => "One",
///             Self::Two => "Two",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Tick { Next }
///
/// impl Event for Tick {
///     fn name(&self) -> &str {
///         "Next"
///     }
/// }
///
/// let journal = DispatchJournal::new();
/// let journal = journal.record(DispatchRecord {
///     from: Phase::One,
///     event: Tick::Next,
///     to: Phase::Two,
///     kind: DispatchKind::Full,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(journal.len(), 1);
/// assert_eq!(journal.path(), vec![&Phase::One, &Phase::Two]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchJournal<S: State, E: Event> {
    records: Vec<DispatchRecord<S, E>>,
}

impl<S: State, E: Event> Default for DispatchJournal<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> DispatchJournal<S, E> {
    /// Create a new empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new journal.
    ///
    /// The existing journal is left untouched.
    pub fn record(&self, record: DispatchRecord<S, E>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get all records in dispatch order.
    pub fn records(&self) -> &[DispatchRecord<S, E>] {
        &self.records
    }

    /// Get the sequence of states the machine passed through: the `from` of
    /// the first record, then the `to` of every record.
    ///
    /// Internal and ignored dispatches contribute their unchanged state, so
    /// the path is an honest account of every dispatch, not only of state
    /// changes.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate the span from first to last record.
    ///
    /// Returns `None` for an empty journal.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the journal holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
