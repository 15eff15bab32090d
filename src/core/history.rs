//! Session history tracking.
//!
//! Records every applied action together with the mode it moved the
//! session between. History values are immutable: recording returns a
//! new history.

use super::action::{Action, ActionKind};
use super::state::SessionMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied action.
///
/// In-mode actions such as `Recenter` produce records whose `from` and
/// `to` are equal.
///
/// # Example
///
/// ```rust
/// use vrx_session::core::{Action, SessionMode, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     action: Action::EnterVr,
///     from: SessionMode::Inactive,
///     to: SessionMode::Active,
///     timestamp: Utc::now(),
/// };
/// assert!(record.changes_mode());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The action that was applied
    pub action: Action,
    /// Mode before the action
    pub from: SessionMode,
    /// Mode after the action
    pub to: SessionMode,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    pub fn changes_mode(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of applied actions.
///
/// An optional capacity bounds the number of retained records; once it
/// is reached the oldest records are dropped first.
///
/// # Example
///
/// ```rust
/// use vrx_session::core::{Action, SessionHistory, SessionMode, TransitionRecord};
/// use chrono::Utc;
///
/// let history = SessionHistory::new();
///
/// let history = history.record(TransitionRecord {
///     action: Action::EnterVr,
///     from: SessionMode::Inactive,
///     to: SessionMode::Active,
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(TransitionRecord {
///     action: Action::ExitVr,
///     from: SessionMode::Active,
///     to: SessionMode::Inactive,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Inactive -> Active -> Inactive
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionHistory {
    records: Vec<TransitionRecord>,
    capacity: Option<usize>,
}

impl SessionHistory {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that retains at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Record an applied action, returning a new history.
    ///
    /// This is a pure function - the existing history is left untouched.
    ///
    /// ```rust
    /// use vrx_session::core::{Action, SessionHistory, SessionMode, TransitionRecord};
    /// use chrono::Utc;
    ///
    /// let history = SessionHistory::new();
    /// let new_history = history.record(TransitionRecord {
    ///     action: Action::EnterVr,
    ///     from: SessionMode::Inactive,
    ///     to: SessionMode::Active,
    ///     timestamp: Utc::now(),
    /// });
    /// assert_eq!(new_history.records().len(), 1);
    /// assert_eq!(history.records().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        if let Some(capacity) = self.capacity {
            let excess = records.len().saturating_sub(capacity);
            records.drain(..excess);
        }
        Self {
            records,
            capacity: self.capacity,
        }
    }

    /// Modes traversed: the starting mode of the first retained record,
    /// then the `to` mode of each record.
    pub fn get_path(&self) -> Vec<SessionMode> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|record| record.to));
        path
    }

    /// Time between the first and last retained record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of retained records for actions of the given kind.
    pub fn count(&self, kind: ActionKind) -> usize {
        self.records
            .iter()
            .filter(|record| record.action.kind() == kind)
            .count()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
