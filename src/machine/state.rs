//! The calculator's UI-facing state.

use crate::core::Phase;
use crate::eval::{CalcError, Token};
use serde::{Deserialize, Serialize};

/// Text of a fresh operand.
pub const ZERO: &str = "0";

/// In-progress calculation: the operand being typed, the tokens already
/// committed by operator presses, and the error from the last evaluation.
///
/// Only [`Calculator`](crate::machine::Calculator) mutates this value;
/// everyone else reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) current_operand: String,
    pub(crate) pending_tokens: Vec<Token>,
    pub(crate) awaiting_operand: bool,
    pub(crate) error_state: Option<CalcError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_operand: ZERO.to_string(),
            pending_tokens: Vec::new(),
            awaiting_operand: false,
            error_state: None,
        }
    }
}

impl CalculatorState {
    /// Operand text, or the error message while in the error phase.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn pending_tokens(&self) -> &[Token] {
        &self.pending_tokens
    }

    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    pub fn error_state(&self) -> Option<CalcError> {
        self.error_state
    }

    /// Coarse phase derived from the flags. Error takes precedence.
    pub fn phase(&self) -> Phase {
        if self.error_state.is_some() {
            Phase::Error
        } else if self.awaiting_operand {
            Phase::AwaitingOperand
        } else {
            Phase::Idle
        }
    }

    /// Pending tokens followed by the current operand.
    pub fn token_stream(&self) -> Vec<Token> {
        let mut tokens = self.pending_tokens.clone();
        tokens.push(Token::number(self.current_operand.clone()));
        tokens
    }

    pub(crate) fn enter_error(&mut self, err: CalcError) {
        self.error_state = Some(err);
        self.current_operand = err.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Operator;

    #[test]
    fn default_state_is_idle_zero() {
        let state = CalculatorState::default();
        assert_eq!(state.current_operand(), "0");
        assert!(state.pending_tokens().is_empty());
        assert!(!state.awaiting_operand());
        assert_eq!(state.error_state(), None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn error_phase_wins_over_awaiting() {
        let mut state = CalculatorState {
            awaiting_operand: true,
            ..CalculatorState::default()
        };
        assert_eq!(state.phase(), Phase::AwaitingOperand);

        state.enter_error(CalcError::DivideByZero);
        assert_eq!(state.phase(), Phase::Error);
        assert_eq!(state.current_operand(), "Cannot divide by zero");
    }

    #[test]
    fn token_stream_appends_current_operand() {
        let state = CalculatorState {
            current_operand: "3".to_string(),
            pending_tokens: vec![Token::number("5"), Token::Operator(Operator::Add)],
            ..CalculatorState::default()
        };

        assert_eq!(
            state.token_stream(),
            vec![
                Token::number("5"),
                Token::Operator(Operator::Add),
                Token::number("3")
            ]
        );
    }
}
