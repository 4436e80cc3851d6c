//! Journal of completed calculations.
//!
//! Each successful evaluation is recorded with its rendered expression,
//! its result and when it happened. The newest entry comes first and the
//! journal never grows past its capacity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Stable identifier for recalling this entry
    pub id: Uuid,
    /// Token stream rendered with display glyphs, e.g. `5 + 3 × 2`
    pub expression: String,
    /// Result text as shown on the display
    pub result: String,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

/// Bounded, newest-first list of completed calculations.
///
/// # Example
///
/// ```rust
/// use abacus::journal::Journal;
///
/// let mut journal = Journal::new(2);
/// journal.record("1 + 1", "2");
/// journal.record("2 × 3", "6");
/// journal.record("9 − 4", "5");
///
/// let results: Vec<_> = journal.entries().iter().map(|e| e.result.as_str()).collect();
/// assert_eq!(results, vec!["5", "6"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
    capacity: usize,
}

impl Journal {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record a calculation at the front, dropping the oldest entries past
    /// capacity. Returns the new entry's id.
    pub fn record(&mut self, expression: impl Into<String>, result: impl Into<String>) -> Uuid {
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now(),
        };
        let id = entry.id;
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
        id
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&JournalEntry> {
        self.entries.first()
    }

    pub fn find(&self, id: Uuid) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
