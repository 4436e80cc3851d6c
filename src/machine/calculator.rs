//! The input state machine.
//!
//! [`Calculator`] owns one session's [`CalculatorState`] and turns discrete
//! inputs into state transitions. Every transition is total: malformed
//! sequences degrade to no-ops, and evaluation failures move the machine
//! into the error phase instead of propagating.

use crate::core::{Guard, Phase, State, StateHistory, StateTransition};
use crate::eval::{evaluate, normalize, parse_operand, render, CalcError, Operator, Token};
use crate::journal::Journal;
use crate::machine::config::CalculatorConfig;
use crate::machine::input::Input;
use crate::machine::memory::Memory;
use crate::machine::state::{CalculatorState, ZERO};
use chrono::Utc;
use log::{debug, warn};
use uuid::Uuid;

/// A single calculator session.
///
/// # Example
///
/// ```rust
/// use abacus::machine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.input_digit('5');
/// calc.select_operator("+");
/// calc.input_digit('3');
/// calc.select_operator("×");
/// calc.input_digit('2');
/// calc.handle_equals();
///
/// assert_eq!(calc.display(), "11");
/// assert_eq!(calc.journal().latest().map(|e| e.expression.as_str()), Some("5 + 3 × 2"));
/// ```
#[derive(Debug)]
pub struct Calculator {
    pub(crate) config: CalculatorConfig,
    pub(crate) state: CalculatorState,
    pub(crate) phases: StateHistory<Phase>,
    pub(crate) journal: Journal,
    pub(crate) memory: Memory,
    accepts_operators: Guard<Phase>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Fresh session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Fresh session with an empty journal sized by `config`.
    pub fn with_config(config: CalculatorConfig) -> Self {
        let journal = Journal::new(config.journal_capacity);
        Self::from_parts(
            config,
            CalculatorState::default(),
            StateHistory::new(),
            journal,
            Memory::new(),
        )
    }

    pub(crate) fn from_parts(
        config: CalculatorConfig,
        state: CalculatorState,
        phases: StateHistory<Phase>,
        journal: Journal,
        memory: Memory,
    ) -> Self {
        Self {
            config,
            state,
            phases,
            journal,
            memory,
            accepts_operators: Guard::not_error(),
        }
    }

    /// Read-only view of the in-progress calculation.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Current phase, derived from the state.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Text to show: the operand being typed, the last result, or the
    /// error message.
    pub fn display(&self) -> &str {
        &self.state.current_operand
    }

    /// Most recent phase changes, oldest first, bounded by
    /// [`CalculatorConfig::phase_history_capacity`].
    pub fn phase_history(&self) -> &StateHistory<Phase> {
        &self.phases
    }

    /// Completed calculations, newest first.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The M+ / M- register.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Settings this session was created or resumed with.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Dispatch a single input to its operation.
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Digit(digit) => self.input_digit(digit),
            Input::Decimal => self.input_decimal(),
            Input::Operator(op) => self.select(op),
            Input::Equals => self.handle_equals(),
            Input::Backspace => self.delete_last_digit(),
            Input::Clear => self.clear(),
            Input::Percent => self.percentage(),
            Input::MemoryAdd => self.memory_add(),
            Input::MemorySubtract => self.memory_subtract(),
            Input::MemoryRecall => self.memory_recall(),
            Input::MemoryClear => self.memory_clear(),
        }
    }

    /// Map a keyboard key onto an input and apply it. Returns `false` for
    /// keys the calculator does not handle.
    pub fn press_key(&mut self, key: &str) -> bool {
        match Input::from_key(key) {
            Some(input) => {
                self.apply(input);
                true
            }
            None => false,
        }
    }

    /// Type a digit. Non-digit characters are ignored.
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            debug!("ignoring non-digit input {digit:?}");
            return;
        }
        let max_len = self.config.max_operand_len;
        self.track(Input::Digit(digit), |state| {
            if state.error_state.is_some() {
                state.error_state = None;
                state.pending_tokens.clear();
                state.current_operand = digit.to_string();
                state.awaiting_operand = false;
            } else if state.awaiting_operand {
                state.current_operand = digit.to_string();
                state.awaiting_operand = false;
            } else if state.current_operand == ZERO {
                if digit != '0' {
                    state.current_operand = digit.to_string();
                }
            } else if state.current_operand.chars().count() < max_len {
                state.current_operand.push(digit);
            }
        });
    }

    /// Type a decimal point, starting `0.` on a fresh operand.
    pub fn input_decimal(&mut self) {
        let max_len = self.config.max_operand_len;
        self.track(Input::Decimal, |state| {
            if state.error_state.is_some() {
                state.error_state = None;
                state.pending_tokens.clear();
                state.current_operand = "0.".to_string();
                state.awaiting_operand = false;
            } else if state.awaiting_operand {
                state.current_operand = "0.".to_string();
                state.awaiting_operand = false;
            } else if !state.current_operand.contains('.')
                && state.current_operand.chars().count() < max_len
            {
                state.current_operand.push('.');
            }
        });
    }

    /// Commit the current operand and an operator given by symbol or glyph.
    ///
    /// Ignored while in the error phase. An unrecognized glyph moves the
    /// machine into the error phase with [`CalcError::UnknownOperation`].
    pub fn select_operator(&mut self, symbol: &str) {
        match Operator::from_symbol(symbol) {
            Some(op) => self.select(op),
            None => {
                if !self.accepts_operators.check(&self.phase()) {
                    return;
                }
                warn!("unknown operator glyph {symbol:?}");
                self.track_named("operator", |state| {
                    state.enter_error(CalcError::UnknownOperation)
                });
            }
        }
    }

    fn select(&mut self, op: Operator) {
        if !self.accepts_operators.check(&self.phase()) {
            debug!("operator {} ignored in error phase", op.symbol());
            return;
        }
        self.track(Input::Operator(op), |state| {
            let operand = std::mem::replace(&mut state.current_operand, ZERO.to_string());
            state.pending_tokens.push(Token::Number(operand));
            state.pending_tokens.push(Token::Operator(op));
            state.awaiting_operand = true;
        });
    }

    /// Evaluate the pending tokens followed by the current operand.
    ///
    /// A bare number with nothing pending is passed through unchanged.
    /// On success the result becomes the current operand and is journaled;
    /// on failure the machine enters the error phase and keeps the pending
    /// tokens.
    pub fn handle_equals(&mut self) {
        if !self.accepts_operators.check(&self.phase()) {
            return;
        }
        let tokens = self.state.token_stream();
        if tokens.len() == 1 {
            self.track(Input::Equals, |state| {
                state.pending_tokens.clear();
                state.awaiting_operand = true;
            });
            return;
        }

        match evaluate(&tokens) {
            Ok(value) => {
                self.journal.record(render(&tokens), value.clone());
                self.track(Input::Equals, |state| {
                    state.current_operand = value;
                    state.pending_tokens.clear();
                    state.awaiting_operand = true;
                    state.error_state = None;
                });
            }
            Err(err) => self.track(Input::Equals, |state| state.enter_error(err)),
        }
    }

    /// Backspace. Recovers from the error phase; does nothing on an operand
    /// that has not been started yet.
    pub fn delete_last_digit(&mut self) {
        self.track(Input::Backspace, |state| {
            if state.error_state.is_some() {
                state.error_state = None;
                state.current_operand = ZERO.to_string();
                state.awaiting_operand = false;
                return;
            }
            if state.awaiting_operand {
                return;
            }
            state.current_operand.pop();
            if state.current_operand.is_empty() || state.current_operand == "-" {
                state.current_operand = ZERO.to_string();
            }
        });
    }

    /// Reset to the initial state from any phase. Journal and memory are
    /// kept.
    pub fn clear(&mut self) {
        self.track(Input::Clear, |state| *state = CalculatorState::default());
    }

    /// Turn the current operand into a percentage: of the number before a
    /// pending operator if there is one, otherwise of one.
    pub fn percentage(&mut self) {
        if !self.accepts_operators.check(&self.phase()) {
            return;
        }
        self.track(Input::Percent, |state| {
            let Ok(current) = parse_operand(&state.current_operand) else {
                return;
            };
            let base = match state.pending_tokens.as_slice() {
                [.., Token::Number(base), Token::Operator(_)] => parse_operand(base).ok(),
                _ => None,
            };
            let value = match base {
                Some(base) => base * current / 100.0,
                None => current / 100.0,
            };
            state.current_operand = normalize(value);
        });
    }

    /// M+: add the current operand (zero if unparseable) to memory.
    pub fn memory_add(&mut self) {
        let amount = self.operand_value();
        self.memory.add(amount);
    }

    /// M-: subtract the current operand (zero if unparseable) from memory.
    pub fn memory_subtract(&mut self) {
        let amount = self.operand_value();
        self.memory.subtract(amount);
    }

    /// MR: load the stored value as the operand being typed.
    pub fn memory_recall(&mut self) {
        let Some(value) = self.memory.recall() else {
            return;
        };
        self.track(Input::MemoryRecall, |state| load_operand(state, normalize(value)));
    }

    /// MC
    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    /// Load a journaled result as the operand being typed. Returns `false`
    /// if no entry has this id.
    pub fn recall(&mut self, id: Uuid) -> bool {
        let Some(result) = self.journal.find(id).map(|entry| entry.result.clone()) else {
            return false;
        };
        self.track_named("recall", |state| load_operand(state, result));
        true
    }

    /// Load pasted text as the operand being typed.
    ///
    /// Surrounding whitespace is trimmed. Text that is empty or not a
    /// number is rejected and leaves the session untouched; accepted text
    /// also clears any error.
    pub fn paste(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || parse_operand(trimmed).is_err() {
            debug!("rejected pasted text {text:?}");
            return false;
        }
        let operand = trimmed.to_string();
        self.track_named("paste", |state| load_operand(state, operand));
        true
    }

    /// Forget every journaled calculation.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    fn operand_value(&self) -> f64 {
        parse_operand(&self.state.current_operand).unwrap_or(0.0)
    }

    fn track<F>(&mut self, input: Input, mutate: F)
    where
        F: FnOnce(&mut CalculatorState),
    {
        self.track_named(input.name(), mutate);
    }

    /// Run a mutation and record the phase change it causes, if any.
    fn track_named<F>(&mut self, input: &str, mutate: F)
    where
        F: FnOnce(&mut CalculatorState),
    {
        let from = self.state.phase();
        mutate(&mut self.state);
        let to = self.state.phase();
        if from != to {
            debug!("{} -> {} on {}", from.name(), to.name(), input);
            let transition = StateTransition {
                from,
                to,
                timestamp: Utc::now(),
                input: input.to_string(),
            };
            self.phases.push(transition, self.config.phase_history_capacity);
        }
    }
}

fn load_operand(state: &mut CalculatorState, operand: String) {
    state.current_operand = operand;
    state.awaiting_operand = false;
    state.error_state = None;
}
