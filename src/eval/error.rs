//! Evaluation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while evaluating a token stream.
///
/// The `Display` text of each variant is the exact message shown to the
/// user, so it doubles as the calculator's error display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum CalcError {
    /// An operand failed to parse, or the token stream is malformed
    #[error("Invalid input")]
    InvalidInput,

    /// The right-hand side of a division was zero
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// An operator symbol outside `+ - * /` and their display glyphs
    #[error("Unknown operation")]
    UnknownOperation,
}

/// Outcome of an evaluation: the canonical text of the value, or the error.
pub type CalculationResult = Result<String, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing_literals() {
        assert_eq!(CalcError::InvalidInput.to_string(), "Invalid input");
        assert_eq!(CalcError::DivideByZero.to_string(), "Cannot divide by zero");
        assert_eq!(CalcError::UnknownOperation.to_string(), "Unknown operation");
    }

    #[test]
    fn error_round_trips_through_json() {
        let json = serde_json::to_string(&CalcError::DivideByZero).unwrap();
        let back: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CalcError::DivideByZero);
    }
}
