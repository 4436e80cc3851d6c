//! Tokens of a flat calculator expression.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four binary operators.
///
/// Serialized as its canonical symbol (`+`, `-`, `*`, `/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Map a canonical symbol or display glyph onto an operator.
    ///
    /// Accepts `+ - * /` and the display glyphs `− × ÷`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "×" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Internal canonical symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Glyph shown to the user.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Multiplication and division bind tighter than addition and subtraction.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or(CalcError::UnknownOperation)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A number literal or an operator.
///
/// Numbers are kept as text in their canonical external form so the
/// stream can be displayed and journaled without re-formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    Number(String),
    Operator(Operator),
}

impl Token {
    pub fn number(literal: impl Into<String>) -> Self {
        Token::Number(literal.into())
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Token::Operator(op) => Some(*op),
            Token::Number(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(literal) => f.write_str(literal),
            Token::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Build a token stream from loose strings.
///
/// Anything that is an operator symbol or glyph becomes an operator
/// token; everything else is taken as a number literal and validated
/// later by the evaluator.
///
/// ```
/// use abacus::eval::{tokenize, Operator, Token};
///
/// let tokens = tokenize(["5", "×", "-2"]);
/// assert_eq!(tokens[1], Token::Operator(Operator::Multiply));
/// assert_eq!(tokens[2], Token::number("-2"));
/// ```
pub fn tokenize<I, S>(parts: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|part| {
            let part = part.as_ref();
            match Operator::from_symbol(part) {
                Some(op) => Token::Operator(op),
                None => Token::number(part),
            }
        })
        .collect()
}

/// Render a stream with display glyphs separated by single spaces.
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check that tokens alternate `Number, Operator, …, Number`.
pub fn is_well_formed(tokens: &[Token]) -> bool {
    tokens.len() % 2 == 1
        && tokens
            .iter()
            .enumerate()
            .all(|(i, token)| token.is_number() == (i % 2 == 0))
}
