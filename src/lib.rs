//! Abacus: the input and evaluation core of a four-function calculator
//!
//! Abacus separates a pure evaluation core from a small input state machine.
//! Evaluation takes a finished token stream and returns a result string or an
//! error; the machine turns keystrokes into state transitions and owns the
//! only mutable state in the crate.
//!
//! # Core Concepts
//!
//! - **Tokens**: an expression is a flat, alternating list of numbers and operators
//! - **Evaluation**: two passes, `×`/`÷` before `+`/`−`, left to right within a tier
//! - **Calculator**: the keystroke state machine with journal and memory
//! - **Checkpoint**: a serializable snapshot a session can be resumed from
//!
//! # Example
//!
//! ```rust
//! use abacus::{evaluate, tokenize, Calculator, Phase};
//!
//! assert_eq!(evaluate(&tokenize(["5", "+", "3", "*", "2"])), Ok("11".to_string()));
//!
//! let mut calc = Calculator::new();
//! for key in ["1", "/", "0", "Enter"] {
//!     calc.press_key(key);
//! }
//! assert_eq!(calc.phase(), Phase::Error);
//! assert_eq!(calc.display(), "Cannot divide by zero");
//!
//! calc.press_key("Escape");
//! assert_eq!(calc.display(), "0");
//! ```

#[macro_use]
mod macros;

pub mod checkpoint;
pub mod core;
pub mod eval;
pub mod journal;
pub mod machine;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{Phase, State};
pub use eval::{combine, evaluate, tokenize, CalcError, CalculationResult, Operator, Token};
pub use journal::{Journal, JournalEntry};
pub use machine::{Calculator, CalculatorConfig, CalculatorState, Input};
