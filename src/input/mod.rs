//! Keypad input: the closed set of keys the engine understands.
//!
//! Keys come from three places: keypad button labels, single keyboard
//! characters, and typed lines split by [`tokenize`].

mod keypad;
mod tokenize;

pub use keypad::{ALIASES, KEYPAD, render_keypad};
pub use tokenize::{TokenError, tokenize};

use std::fmt;
use std::str::FromStr;

use crate::calculator::{BinaryOp, Engine, UnaryFn};
use crate::calculator::primitives::Result;

/// A single calculator key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Decimal,
    Backspace,
    /// "AC": reset everything.
    Clear,
    /// "CE": clear the current entry only.
    ClearEntry,
    Operator(BinaryOp),
    Function(UnaryFn),
    Evaluate,
}

impl Key {
    /// Map a keyboard character to a key.
    ///
    /// `*` and `/` stand in for `×` and `÷`, Enter and `=` evaluate,
    /// Backspace deletes and Escape clears.
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }

        let key = match c {
            '.' => Self::Decimal,
            '+' => Self::Operator(BinaryOp::Add),
            '-' | '−' => Self::Operator(BinaryOp::Subtract),
            '*' | '×' => Self::Operator(BinaryOp::Multiply),
            '/' | '÷' => Self::Operator(BinaryOp::Divide),
            '^' => Self::Operator(BinaryOp::Power),
            '%' => Self::Function(UnaryFn::Percent),
            '√' => Self::Function(UnaryFn::Sqrt),
            '±' => Self::Function(UnaryFn::Negate),
            '=' | '\n' | '\r' => Self::Evaluate,
            '\u{8}' | '\u{7f}' | '⌫' => Self::Backspace,
            '\u{1b}' => Self::Clear,
            _ => return None,
        };
        Some(key)
    }

    /// Feed this key into `engine`.
    pub fn apply(self, engine: &mut Engine) -> Result<()> {
        match self {
            Self::Digit(d) => engine.input_digit(d),
            Self::Decimal => engine.input_decimal(),
            Self::Backspace => engine.backspace(),
            Self::Clear => engine.reset(),
            Self::ClearEntry => engine.clear_entry(),
            Self::Operator(op) => engine.set_operator(op)?,
            Self::Function(func) => engine.apply_unary(func)?,
            Self::Evaluate => engine.calculate()?,
        }
        Ok(())
    }
}

impl FromStr for Key {
    type Err = TokenError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(key) = Self::from_char(c)
        {
            return Ok(key);
        }

        let key = match s.to_ascii_lowercase().as_str() {
            "sqrt" => Self::Function(UnaryFn::Sqrt),
            "sin" => Self::Function(UnaryFn::Sin),
            "cos" => Self::Function(UnaryFn::Cos),
            "tan" => Self::Function(UnaryFn::Tan),
            "log" => Self::Function(UnaryFn::Log),
            "ln" => Self::Function(UnaryFn::Ln),
            "neg" => Self::Function(UnaryFn::Negate),
            "ac" => Self::Clear,
            "ce" => Self::ClearEntry,
            "bs" => Self::Backspace,
            _ => return Err(TokenError::Unknown(s.to_string())),
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Backspace => f.write_str("⌫"),
            Self::Clear => f.write_str("AC"),
            Self::ClearEntry => f.write_str("CE"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Function(func) => write!(f, "{func}"),
            Self::Evaluate => f.write_str("="),
        }
    }
}
