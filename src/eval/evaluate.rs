//! Two-pass precedence evaluation of a flat token stream.

use super::arith::combine_operands;
use super::error::{CalcError, CalculationResult};
use super::token::{is_well_formed, render, Operator, Token};
use log::debug;

/// Evaluate a flat `Number, Operator, …, Number` stream.
///
/// Multiplication and division are reduced first, then addition and
/// subtraction, each tier strictly left to right. Every reduction goes
/// through the ten-place rounding of the binary step, and the first
/// failing step aborts the whole evaluation.
///
/// A single number token is returned untouched.
///
/// ```
/// use abacus::eval::{evaluate, tokenize, CalcError};
///
/// assert_eq!(evaluate(&tokenize(["5", "+", "3", "×", "2"])), Ok("11".to_string()));
/// assert_eq!(evaluate(&tokenize(["20", "÷", "4", "÷", "5"])), Ok("1".to_string()));
/// assert_eq!(evaluate(&tokenize(["10", "÷", "0"])), Err(CalcError::DivideByZero));
/// assert_eq!(evaluate(&[]), Err(CalcError::InvalidInput));
/// ```
pub fn evaluate(tokens: &[Token]) -> CalculationResult {
    let result = reduce_all(tokens);
    match &result {
        Ok(value) => debug!("evaluated `{}` = {}", render(tokens), value),
        Err(err) => debug!("evaluation of `{}` failed: {:?}", render(tokens), err),
    }
    result
}

fn reduce_all(tokens: &[Token]) -> CalculationResult {
    if !is_well_formed(tokens) {
        return Err(CalcError::InvalidInput);
    }

    let mut stream = tokens.to_vec();
    reduce_tier(&mut stream, Operator::is_multiplicative)?;
    reduce_tier(&mut stream, |op| !op.is_multiplicative())?;

    match stream.as_slice() {
        [Token::Number(value)] => Ok(value.clone()),
        _ => Err(CalcError::InvalidInput),
    }
}

/// Repeatedly collapse the leftmost `number op number` triple whose
/// operator belongs to the tier.
fn reduce_tier<F>(stream: &mut Vec<Token>, in_tier: F) -> Result<(), CalcError>
where
    F: Fn(Operator) -> bool,
{
    while let Some(index) = stream
        .iter()
        .position(|token| token.as_operator().is_some_and(&in_tier))
    {
        if index == 0 {
            return Err(CalcError::InvalidInput);
        }
        let value = match (&stream[index - 1], &stream[index], stream.get(index + 1)) {
            (Token::Number(left), Token::Operator(op), Some(Token::Number(right))) => {
                combine_operands(left, *op, right)?
            }
            _ => return Err(CalcError::InvalidInput),
        };
        stream.splice(index - 1..=index + 1, std::iter::once(Token::Number(value)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::tokenize;

    fn eval(parts: &[&str]) -> CalculationResult {
        evaluate(&tokenize(parts))
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(eval(&["5", "+", "3", "×", "2"]), Ok("11".to_string()));
        assert_eq!(eval(&["10", "-", "6", "÷", "2"]), Ok("7".to_string()));
    }

    #[test]
    fn mixed_tiers_reduce_correctly() {
        assert_eq!(eval(&["2", "×", "3", "+", "4", "×", "5"]), Ok("26".to_string()));
        assert_eq!(eval(&["100", "÷", "4", "-", "5", "×", "2"]), Ok("15".to_string()));
    }

    #[test]
    fn same_tier_is_left_associative() {
        assert_eq!(eval(&["20", "/", "4", "/", "5"]), Ok("1".to_string()));
        assert_eq!(eval(&["10", "-", "4", "-", "3"]), Ok("3".to_string()));
        assert_eq!(eval(&["8", "÷", "2", "×", "4"]), Ok("16".to_string()));
    }

    #[test]
    fn simple_binary_stream() {
        assert_eq!(eval(&["5", "+", "3"]), Ok("8".to_string()));
    }

    #[test]
    fn single_number_is_returned_verbatim() {
        assert_eq!(eval(&["42"]), Ok("42".to_string()));
        assert_eq!(eval(&["0.50"]), Ok("0.50".to_string()));
    }

    #[test]
    fn rounding_applies_per_step() {
        assert_eq!(eval(&["0.1", "+", "0.2", "+", "0.3"]), Ok("0.6".to_string()));
        assert_eq!(eval(&["1", "÷", "3", "×", "3"]), Ok("0.9999999999".to_string()));
    }

    #[test]
    fn division_by_zero_short_circuits() {
        assert_eq!(eval(&["10", "÷", "0"]), Err(CalcError::DivideByZero));
        assert_eq!(eval(&["1", "+", "10", "/", "0", "+", "2"]), Err(CalcError::DivideByZero));
    }

    #[test]
    fn later_divide_by_zero_wins_over_earlier_addition() {
        assert_eq!(eval(&["x", "+", "1", "÷", "0"]), Err(CalcError::DivideByZero));
    }

    #[test]
    fn malformed_streams_are_invalid_input() {
        assert_eq!(evaluate(&[]), Err(CalcError::InvalidInput));
        assert_eq!(eval(&["5", "+"]), Err(CalcError::InvalidInput));
        assert_eq!(eval(&["+", "5"]), Err(CalcError::InvalidInput));
        assert_eq!(eval(&["5", "5"]), Err(CalcError::InvalidInput));
        assert_eq!(eval(&["5", "×", "+", "2", "3"]), Err(CalcError::InvalidInput));
    }

    #[test]
    fn unparseable_operand_is_invalid_input() {
        assert_eq!(eval(&["abc", "+", "1"]), Err(CalcError::InvalidInput));
    }
}
