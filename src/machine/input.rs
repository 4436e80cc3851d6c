//! Discrete user inputs and the keyboard mapping onto them.

use crate::eval::Operator;
use serde::{Deserialize, Serialize};

/// One button press or key stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Backspace,
    Clear,
    Percent,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
}

impl Input {
    /// Map a keyboard key name (as reported by a browser `keydown`) onto
    /// an input.
    ///
    /// ```
    /// use abacus::eval::Operator;
    /// use abacus::machine::Input;
    ///
    /// assert_eq!(Input::from_key("7"), Some(Input::Digit('7')));
    /// assert_eq!(Input::from_key("*"), Some(Input::Operator(Operator::Multiply)));
    /// assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
    /// assert_eq!(Input::from_key("F5"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        let input = match key {
            "." | "Decimal" => Self::Decimal,
            "Enter" | "=" => Self::Equals,
            "Escape" => Self::Clear,
            "Backspace" | "Delete" => Self::Backspace,
            "%" => Self::Percent,
            _ => {
                let mut chars = key.chars();
                return match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Some(Self::Digit(c)),
                    _ => Operator::from_symbol(key).map(Self::Operator),
                };
            }
        };
        Some(input)
    }

    /// Short label used when recording phase transitions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Backspace => "backspace",
            Self::Clear => "clear",
            Self::Percent => "percent",
            Self::MemoryAdd => "memory_add",
            Self::MemorySubtract => "memory_subtract",
            Self::MemoryRecall => "memory_recall",
            Self::MemoryClear => "memory_clear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_digit_key_maps_to_a_digit() {
        for c in '0'..='9' {
            assert_eq!(Input::from_key(&c.to_string()), Some(Input::Digit(c)));
        }
    }

    #[test]
    fn operator_keys_map_to_operators() {
        assert_eq!(Input::from_key("+"), Some(Input::Operator(Operator::Add)));
        assert_eq!(Input::from_key("-"), Some(Input::Operator(Operator::Subtract)));
        assert_eq!(Input::from_key("*"), Some(Input::Operator(Operator::Multiply)));
        assert_eq!(Input::from_key("/"), Some(Input::Operator(Operator::Divide)));
    }

    #[test]
    fn editing_keys_map_to_actions() {
        assert_eq!(Input::from_key("."), Some(Input::Decimal));
        assert_eq!(Input::from_key("Decimal"), Some(Input::Decimal));
        assert_eq!(Input::from_key("="), Some(Input::Equals));
        assert_eq!(Input::from_key("Escape"), Some(Input::Clear));
        assert_eq!(Input::from_key("Backspace"), Some(Input::Backspace));
        assert_eq!(Input::from_key("Delete"), Some(Input::Backspace));
        assert_eq!(Input::from_key("%"), Some(Input::Percent));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(Input::from_key(""), None);
        assert_eq!(Input::from_key("12"), None);
        assert_eq!(Input::from_key("a"), None);
        assert_eq!(Input::from_key("Shift"), None);
    }
}
