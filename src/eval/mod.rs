//! Stateless expression evaluation.
//!
//! - `token`: operators, tokens and stream helpers
//! - `arith`: the binary step with ten-place rounding and number text
//! - `evaluate`: two-pass precedence reduction over a token stream
//!
//! Nothing here holds state; every function is safe to call from any
//! thread.

mod arith;
mod error;
mod evaluate;
mod token;

pub use arith::{
    apply, canonical_text, combine, normalize, parse_operand, round_to_precision,
    DECIMAL_PLACES, MAX_DIGITS,
};
pub use error::{CalcError, CalculationResult};
pub use evaluate::evaluate;
pub use token::{is_well_formed, render, tokenize, Operator, Token};
