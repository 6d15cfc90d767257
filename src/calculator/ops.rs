//! Binary operators and unary functions understood by the engine.

use std::fmt;

use super::primitives::{self, Result};

/// A binary operator waiting for its right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Symbol shown on the keypad and in the history line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            Self::Add => Ok(primitives::add(a, b)),
            Self::Subtract => Ok(primitives::subtract(a, b)),
            Self::Multiply => Ok(primitives::multiply(a, b)),
            Self::Divide => primitives::divide(a, b),
            Self::Power => Ok(primitives::power(a, b)),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A function applied immediately to the current entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Negate,
    Percent,
}

impl UnaryFn {
    pub const ALL: [UnaryFn; 8] = [
        Self::Sqrt,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log,
        Self::Ln,
        Self::Negate,
        Self::Percent,
    ];

    /// Label shown on the keypad.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Negate => "±",
            Self::Percent => "%",
        }
    }

    pub fn apply(self, x: f64) -> Result<f64> {
        match self {
            Self::Sqrt => primitives::sqrt(x),
            Self::Sin => Ok(primitives::sin(x)),
            Self::Cos => Ok(primitives::cos(x)),
            Self::Tan => Ok(primitives::tan(x)),
            Self::Log => primitives::log(x),
            Self::Ln => primitives::ln(x),
            Self::Negate => Ok(-x),
            Self::Percent => Ok(x / 100.0),
        }
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::DomainError;

    #[test]
    fn test_binary_apply() {
        assert_eq!(BinaryOp::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(BinaryOp::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(BinaryOp::Multiply.apply(4.0, 2.5), Ok(10.0));
        assert_eq!(BinaryOp::Divide.apply(9.0, 3.0), Ok(3.0));
        assert_eq!(BinaryOp::Power.apply(2.0, 8.0), Ok(256.0));
        assert_eq!(
            BinaryOp::Divide.apply(1.0, 0.0),
            Err(DomainError::DivideByZero)
        );
    }

    #[test]
    fn test_unary_apply() {
        assert_eq!(UnaryFn::Sqrt.apply(16.0), Ok(4.0));
        assert_eq!(UnaryFn::Negate.apply(5.0), Ok(-5.0));
        assert_eq!(UnaryFn::Percent.apply(50.0), Ok(0.5));
        assert_eq!(UnaryFn::Ln.apply(0.0), Err(DomainError::LnDomain));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(BinaryOp::Multiply.to_string(), "×");
        assert_eq!(UnaryFn::Negate.to_string(), "±");
    }
}
