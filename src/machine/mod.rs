//! The keystroke-driven input state machine.
//!
//! [`Calculator`] is the single owner of a session's [`CalculatorState`].
//! Inputs arrive one at a time, either as direct method calls or as
//! [`Input`] values (for example mapped from keyboard keys); the
//! calculator hands finished token streams to [`crate::eval::evaluate`]
//! and folds the result back into its state.

mod calculator;
mod config;
mod input;
mod memory;
mod state;

pub use calculator::Calculator;
pub use config::{
    CalculatorConfig, DEFAULT_JOURNAL_CAPACITY, DEFAULT_MAX_OPERAND_LEN,
    DEFAULT_PHASE_HISTORY_CAPACITY,
};
pub use input::Input;
pub use memory::Memory;
pub use state::CalculatorState;
