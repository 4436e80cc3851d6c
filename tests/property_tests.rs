//! Property-based tests for evaluation and the input state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use abacus::checkpoint::Checkpoint;
use abacus::eval::{combine, evaluate, is_well_formed, Operator, Token};
use abacus::machine::{Calculator, CalculatorState};
use abacus::Phase;
use proptest::prelude::*;

const KEYS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "=", "Enter",
    "Backspace", "Escape", "%",
];

// Up to ten million, well past the point where ten decimal places no
// longer fit below 2^52 once scaled.
prop_compose! {
    fn cents()(i in -1_000_000_000i64..1_000_000_000) -> f64 {
        i as f64 / 100.0
    }
}

prop_compose! {
    fn nonzero_cents()(i in 1i64..100_000, negative in any::<bool>()) -> f64 {
        let value = i as f64 / 100.0;
        if negative { -value } else { value }
    }
}

fn arbitrary_key() -> impl Strategy<Value = &'static str> {
    prop::sample::select(KEYS.to_vec())
}

fn integer_operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
    ]
}

fn parse(text: &str) -> f64 {
    text.parse().unwrap()
}

/// Integer reference: multiplications first, then a signed sum.
fn reference_fold(first: i64, rest: &[(Operator, i64)]) -> i64 {
    let mut sum = 0;
    let mut sign = 1;
    let mut term = first;
    for &(op, n) in rest {
        match op {
            Operator::Multiply => term *= n,
            Operator::Add | Operator::Subtract => {
                sum += sign * term;
                sign = if op == Operator::Add { 1 } else { -1 };
                term = n;
            }
            Operator::Divide => unreachable!(),
        }
    }
    sum + sign * term
}

fn session(keys: &[&str]) -> Calculator {
    let mut calc = Calculator::new();
    for key in keys {
        calc.press_key(key);
    }
    calc
}

proptest! {
    #[test]
    fn subtraction_undoes_addition(a in cents(), b in cents()) {
        let sum = combine(&a.to_string(), "+", &b.to_string()).unwrap();
        let back = combine(&sum, "-", &b.to_string()).unwrap();
        let tolerance = 1e-9 + a.abs() * 1e-12;
        prop_assert!((parse(&back) - a).abs() < tolerance, "{} + {} - {} gave {}", a, b, b, back);
    }

    #[test]
    fn division_undoes_multiplication(a in cents(), b in nonzero_cents()) {
        let product = combine(&a.to_string(), "×", &b.to_string()).unwrap();
        let back = combine(&product, "÷", &b.to_string()).unwrap();
        let tolerance = 1e-8 + a.abs() * 1e-10;
        prop_assert!((parse(&back) - a).abs() < tolerance, "{} × {} ÷ {} gave {}", a, b, b, back);
    }

    #[test]
    fn single_number_is_returned_verbatim(literal in "-?[0-9]{1,12}(\\.[0-9]{1,4})?") {
        prop_assert_eq!(evaluate(&[Token::number(literal.clone())]), Ok(literal));
    }

    #[test]
    fn precedence_matches_integer_reference(
        first in 0i64..100,
        rest in prop::collection::vec((integer_operator(), 0i64..100), 0..6)
    ) {
        let mut tokens = vec![Token::number(first.to_string())];
        for (op, n) in &rest {
            tokens.push(Token::Operator(*op));
            tokens.push(Token::number(n.to_string()));
        }
        prop_assert!(is_well_formed(&tokens));

        let expected = reference_fold(first, &rest);
        prop_assert_eq!(evaluate(&tokens), Ok(expected.to_string()));
    }

    #[test]
    fn clear_resets_after_any_session(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let mut calc = session(&keys);
        let journaled = calc.journal().len();

        calc.clear();
        prop_assert_eq!(calc.state(), &CalculatorState::default());
        prop_assert_eq!(calc.phase(), Phase::Idle);
        prop_assert_eq!(calc.journal().len(), journaled);
    }

    #[test]
    fn equals_on_bare_number_is_idempotent(digits in prop::collection::vec(0u32..10, 1..15)) {
        let mut calc = Calculator::new();
        for d in &digits {
            calc.input_digit(char::from_digit(*d, 10).unwrap());
        }
        let typed = calc.display().to_string();

        calc.handle_equals();
        prop_assert_eq!(calc.display(), typed.as_str());
        calc.handle_equals();
        prop_assert_eq!(calc.display(), typed.as_str());
        prop_assert!(calc.journal().is_empty());
    }

    #[test]
    fn pending_tokens_stay_well_formed(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let calc = session(&keys);
        let pending = calc.state().pending_tokens();
        if let Some((last, rest)) = pending.split_last() {
            prop_assert!(!last.is_number());
            prop_assert!(is_well_formed(rest));
        }
        prop_assert!(calc.journal().len() <= calc.config().journal_capacity);
    }

    #[test]
    fn checkpoint_json_round_trip(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let calc = session(&keys);
        let json = calc.checkpoint().to_json().unwrap();
        let resumed = Calculator::resume(Checkpoint::from_json(&json).unwrap()).unwrap();

        prop_assert_eq!(resumed.state(), calc.state());
        prop_assert_eq!(resumed.journal(), calc.journal());
        prop_assert_eq!(resumed.memory(), calc.memory());
    }
}
