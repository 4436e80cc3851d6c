//! Session checkpoint and resume.
//!
//! A [`Checkpoint`] captures everything a calculator session owns so it
//! can be written wherever the caller keeps session data and restored
//! later. Where it is stored is up to the caller.

use crate::core::{Phase, StateHistory};
use crate::eval::{is_well_formed, Token};
use crate::journal::Journal;
use crate::machine::{Calculator, CalculatorConfig, CalculatorState, Memory};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a calculator session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub config: CalculatorConfig,

    pub state: CalculatorState,

    /// Phase changes up to the checkpoint
    pub phases: StateHistory<Phase>,

    pub journal: Journal,

    pub memory: Memory,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Decode(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode(e.to_string()))
    }

    /// Check the version and the internal consistency of the snapshot:
    /// pending tokens, the displayed operand, and the settings against the
    /// saved journal and phase history.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            warn!(
                "rejecting checkpoint {} with version {}",
                self.id, self.version
            );
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if !is_pending_prefix(self.state.pending_tokens()) {
            return Err(CheckpointError::MalformedPending);
        }

        // NaN is a reachable result.
        if self.state.error_state().is_none()
            && self.state.current_operand().parse::<f64>().is_err()
        {
            return Err(CheckpointError::InvalidOperand(
                self.state.current_operand().to_string(),
            ));
        }

        self.validate_config()
    }

    fn validate_config(&self) -> Result<(), CheckpointError> {
        let config = &self.config;
        if config.max_operand_len == 0 {
            return Err(CheckpointError::InconsistentConfig(
                "max_operand_len must be at least 1".to_string(),
            ));
        }
        if config.journal_capacity != self.journal.capacity() {
            return Err(CheckpointError::InconsistentConfig(format!(
                "journal_capacity is {} but the journal was created with {}",
                config.journal_capacity,
                self.journal.capacity()
            )));
        }
        if self.journal.len() > self.journal.capacity() {
            return Err(CheckpointError::InconsistentConfig(format!(
                "journal holds {} entries but capacity is {}",
                self.journal.len(),
                self.journal.capacity()
            )));
        }
        let transitions = self.phases.transitions().len();
        if transitions > config.phase_history_capacity {
            return Err(CheckpointError::InconsistentConfig(format!(
                "phase history holds {} transitions but capacity is {}",
                transitions, config.phase_history_capacity
            )));
        }
        Ok(())
    }
}

impl Calculator {
    /// Snapshot this session.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            config: self.config.clone(),
            state: self.state.clone(),
            phases: self.phases.clone(),
            journal: self.journal.clone(),
            memory: self.memory,
        }
    }

    /// Rebuild a session from a checkpoint after validating it.
    pub fn resume(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        Ok(Calculator::from_parts(
            checkpoint.config,
            checkpoint.state,
            checkpoint.phases,
            checkpoint.journal,
            checkpoint.memory,
        ))
    }
}

fn is_pending_prefix(tokens: &[Token]) -> bool {
    match tokens.split_last() {
        None => true,
        Some((last, rest)) => !last.is_number() && is_well_formed(rest),
    }
}
