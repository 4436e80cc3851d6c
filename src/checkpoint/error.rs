//! Why a session snapshot could not be written or resumed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckpointError {
    /// serde_json or bincode refused to encode the snapshot
    #[error("could not encode session snapshot: {0}")]
    Encode(String),

    /// Input was not a snapshot in the expected encoding
    #[error("could not decode session snapshot: {0}")]
    Decode(String),

    #[error("snapshot format version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Pending tokens do not form `number op … number op`
    #[error("pending tokens must alternate number and operator and end with an operator")]
    MalformedPending,

    /// Outside the error phase the display must hold a number
    #[error("current operand {0:?} is not a number")]
    InvalidOperand(String),

    /// Settings disagree with each other or with the saved journal and
    /// phase history
    #[error("inconsistent session settings: {0}")]
    InconsistentConfig(String),
}
