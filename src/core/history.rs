//! Phase transition history.
//!
//! Tracking of phase changes over a calculator session. `record` builds a
//! new history; `push` appends in place under a size limit.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Phase, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Idle,
///     to: Phase::AwaitingOperand,
///     timestamp: Utc::now(),
///     input: "operator".to_string(),
/// };
/// assert_eq!(transition.input, "operator");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// Name of the input that caused the change
    pub input: String,
}

/// Ordered history of phase transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Phase, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::Idle,
///         to: Phase::AwaitingOperand,
///         timestamp: Utc::now(),
///         input: "operator".into(),
///     })
///     .record(StateTransition {
///         from: Phase::AwaitingOperand,
///         to: Phase::Idle,
///         timestamp: Utc::now(),
///         input: "digit".into(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Idle, &Phase::AwaitingOperand, &Phase::Idle]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place, keeping at most `limit` of the newest.
    ///
    /// ```rust
    /// use abacus::core::{Phase, StateHistory, StateTransition};
    /// use chrono::Utc;
    ///
    /// let mut history = StateHistory::new();
    /// for _ in 0..3 {
    ///     history.push(
    ///         StateTransition {
    ///             from: Phase::Idle,
    ///             to: Phase::AwaitingOperand,
    ///             timestamp: Utc::now(),
    ///             input: "operator".into(),
    ///         },
    ///         2,
    ///     );
    /// }
    /// assert_eq!(history.transitions().len(), 2);
    /// ```
    pub fn push(&mut self, transition: StateTransition<S>, limit: usize) {
        self.transitions.push(transition);
        if self.transitions.len() > limit {
            let excess = self.transitions.len() - limit;
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of phases traversed.
    ///
    /// The first element is the `from` of the first transition, followed
    /// by the `to` of every transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transitions.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of transitions that entered an error phase.
    pub fn error_count(&self) -> usize {
        self.transitions.iter().filter(|t| t.to.is_error()).count()
    }

    /// All transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
