//! Per-session calculator settings.

use serde::{Deserialize, Serialize};

/// Default maximum number of characters in the operand being typed.
pub const DEFAULT_MAX_OPERAND_LEN: usize = 15;

/// Default number of journal entries kept.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 20;

/// Default number of phase transitions kept.
pub const DEFAULT_PHASE_HISTORY_CAPACITY: usize = 100;

/// Settings for a calculator session.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial JSON object is a valid configuration.
///
/// ```
/// use abacus::machine::CalculatorConfig;
///
/// let config: CalculatorConfig = serde_json::from_str(r#"{"journal_capacity": 5}"#).unwrap();
/// assert_eq!(config.journal_capacity, 5);
/// assert_eq!(config.max_operand_len, 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Digits typed beyond this length are dropped
    pub max_operand_len: usize,

    /// Oldest journal entries are discarded past this count
    pub journal_capacity: usize,

    /// Oldest phase transitions are discarded past this count
    pub phase_history_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_operand_len: DEFAULT_MAX_OPERAND_LEN,
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
            phase_history_capacity: DEFAULT_PHASE_HISTORY_CAPACITY,
        }
    }
}

impl CalculatorConfig {
    pub fn with_max_operand_len(mut self, len: usize) -> Self {
        self.max_operand_len = len.max(1);
        self
    }

    pub fn with_journal_capacity(mut self, capacity: usize) -> Self {
        self.journal_capacity = capacity;
        self
    }

    pub fn with_phase_history_capacity(mut self, capacity: usize) -> Self {
        self.phase_history_capacity = capacity;
        self
    }
}
