//! Binary arithmetic step and number text normalization.
//!
//! All arithmetic is `f64`. Every result is rounded to ten decimal places
//! and written out the way a browser prints a number, switching to a
//! ten-digit scientific form once more than fifteen digits would be shown.

use super::error::{CalcError, CalculationResult};
use super::token::Operator;

/// Decimal places kept after every binary step.
pub const DECIMAL_PLACES: i32 = 10;

/// Digits (sign and decimal point excluded) above which results switch to
/// scientific notation.
pub const MAX_DIGITS: usize = 15;

const PRECISION_MULTIPLIER: f64 = 1e10;

// From 2^52 up every f64 is already an integer.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Parse an operand literal. `NaN` is rejected.
pub fn parse_operand(literal: &str) -> Result<f64, CalcError> {
    let value: f64 = literal
        .trim()
        .parse()
        .map_err(|_| CalcError::InvalidInput)?;
    if value.is_nan() {
        return Err(CalcError::InvalidInput);
    }
    Ok(value)
}

/// Round to [`DECIMAL_PLACES`], ties toward positive infinity.
///
/// The value always goes through the scale and back, so large results
/// carry the same representation noise a browser would show. Only values
/// whose scaled form overflows are returned as is.
pub fn round_to_precision(value: f64) -> f64 {
    let scaled = value * PRECISION_MULTIPLIER;
    if !scaled.is_finite() {
        return value;
    }
    if scaled.abs() >= INTEGRAL_THRESHOLD {
        // Already integral; adding one half would round odd values up.
        return scaled / PRECISION_MULTIPLIER;
    }
    (scaled + 0.5).floor() / PRECISION_MULTIPLIER
}

/// Shortest text for a number, as a browser would print it.
///
/// Plain decimal for magnitudes in `[1e-6, 1e21)`, exponential
/// (`1e+21`, `1.5e-7`) outside that range, `0` for both zeros.
pub fn canonical_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return signed_exponent(format!("{value:e}"));
    }
    format!("{value}")
}

/// Round, then render; long results fall back to scientific notation.
///
/// ```
/// use abacus::eval::normalize;
///
/// assert_eq!(normalize(0.1 + 0.2), "0.3");
/// assert_eq!(normalize(123456789.0 * 1e9), "1.2345678900e+17");
/// ```
pub fn normalize(raw: f64) -> String {
    let rounded = round_to_precision(raw);
    let text = canonical_text(rounded);
    if rounded.is_finite() && digit_count(&text) > MAX_DIGITS {
        return signed_exponent(format!("{rounded:.10e}"));
    }
    text
}

/// Apply one operator to two parsed operands.
pub fn apply(left: f64, op: Operator, right: f64) -> CalculationResult {
    let raw = match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            left / right
        }
    };
    Ok(normalize(raw))
}

/// Combine two operand literals with an operator given by symbol or glyph.
///
/// Operands are checked before the operator, so `combine("x", "%", "1")`
/// reports invalid input rather than an unknown operation.
///
/// ```
/// use abacus::eval::{combine, CalcError};
///
/// assert_eq!(combine("0.1", "+", "0.2"), Ok("0.3".to_string()));
/// assert_eq!(combine("5", "-", "10"), Ok("-5".to_string()));
/// assert_eq!(combine("10", "÷", "0"), Err(CalcError::DivideByZero));
/// ```
pub fn combine(left: &str, symbol: &str, right: &str) -> CalculationResult {
    let a = parse_operand(left)?;
    let b = parse_operand(right)?;
    let op: Operator = symbol.parse()?;
    apply(a, op, b)
}

pub(crate) fn combine_operands(left: &str, op: Operator, right: &str) -> CalculationResult {
    let a = parse_operand(left)?;
    let b = parse_operand(right)?;
    apply(a, op, b)
}

fn digit_count(text: &str) -> usize {
    let mut count = text.chars().count();
    if text.contains('.') {
        count -= 1;
    }
    if text.contains('-') {
        count -= 1;
    }
    count
}

fn signed_exponent(text: String) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
