//! Phase trait and the calculator's phases.
//!
//! A phase is the coarse, nameable position of the input state machine.
//! The full calculator state carries more data (operand text, pending
//! tokens); the phase is what transitions are recorded and guarded by.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine phases.
///
/// All methods are pure. A phase is a small immutable value describing
/// where the machine currently is.
///
/// # Example
///
/// ```rust
/// use abacus::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum LampState {
///     Off,
///     On,
///     Burnt,
/// }
///
/// impl State for LampState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///             Self::Burnt => "Burnt",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Burnt)
///     }
/// }
///
/// assert!(LampState::Burnt.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the phase for display and logging.
    fn name(&self) -> &str;

    /// Check if this phase represents a failure the user must clear.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Coarse phase of the calculator input state machine.
    ///
    /// There is no terminal phase: `clear` always returns to `Idle`.
    pub enum Phase {
        /// Typing into the current operand.
        Idle,
        /// An operator or equals was just pressed; the next digit starts a
        /// fresh operand.
        AwaitingOperand,
        /// The last evaluation failed; the display shows the error message.
        Error,
    }
    error: [Error]
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Idle
    }
}
