//! Arithmetic primitives with domain validation.
//!
//! Every function here is pure. Only division, square root and the two
//! logarithms can fail; everything else follows plain `f64` semantics, so
//! overflow and NaN pass through untouched.

use thiserror::Error;

/// An arithmetic operation was asked to leave its domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Cannot divide by zero")]
    DivideByZero,
    #[error("Square root of negative number")]
    NegativeSqrt,
    #[error("Logarithm undefined for <= 0")]
    LogDomain,
    #[error("Natural log undefined for <= 0")]
    LnDomain,
    /// The display buffer no longer holds a parseable number.
    #[error("Invalid operation")]
    InvalidOperand(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`. Fails when `b` is zero of either sign.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(DomainError::DivideByZero);
    }
    Ok(a / b)
}

pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

pub fn sqrt(x: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(DomainError::NegativeSqrt);
    }
    Ok(x.sqrt())
}

/// Sine of an angle given in degrees.
pub fn sin(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees.
pub fn cos(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Tangent of an angle given in degrees.
pub fn tan(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

/// Base-10 logarithm.
pub fn log(x: f64) -> Result<f64> {
    if x <= 0.0 {
        return Err(DomainError::LogDomain);
    }
    Ok(x.log10())
}

/// Natural logarithm.
pub fn ln(x: f64) -> Result<f64> {
    if x <= 0.0 {
        return Err(DomainError::LnDomain);
    }
    Ok(x.ln())
}

/// Parse a display buffer into a number.
pub fn parse_operand(buffer: &str) -> Result<f64> {
    buffer
        .parse::<f64>()
        .map_err(|_| DomainError::InvalidOperand(buffer.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_divide_by_zero_always_fails() {
        for a in [0.0, 1.0, -7.5, f64::MAX, f64::INFINITY] {
            assert_eq!(divide(a, 0.0), Err(DomainError::DivideByZero));
            assert_eq!(divide(a, -0.0), Err(DomainError::DivideByZero));
        }
        assert_eq!(divide(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn test_sqrt_domain() {
        assert_eq!(sqrt(-1.0), Err(DomainError::NegativeSqrt));
        assert_eq!(sqrt(-0.0001), Err(DomainError::NegativeSqrt));
        assert_eq!(sqrt(0.0), Ok(0.0));
        assert_eq!(sqrt(9.0), Ok(3.0));
        assert!(sqrt(2.0).unwrap() >= 0.0);
    }

    #[test]
    fn test_logarithm_domain() {
        assert_eq!(log(0.0), Err(DomainError::LogDomain));
        assert_eq!(log(-10.0), Err(DomainError::LogDomain));
        assert_eq!(ln(0.0), Err(DomainError::LnDomain));
        assert_eq!(ln(-1.0), Err(DomainError::LnDomain));
        assert!((log(1000.0).unwrap() - 3.0).abs() < EPSILON);
        assert!((ln(std::f64::consts::E).unwrap() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_trig_uses_degrees() {
        assert!((sin(90.0) - 1.0).abs() < EPSILON);
        assert!((cos(180.0) + 1.0).abs() < EPSILON);
        assert!((tan(45.0) - 1.0).abs() < EPSILON);
        assert!(sin(0.0).abs() < EPSILON);
    }

    #[test]
    fn test_unchecked_operations_propagate() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(2.0, 3.0), -1.0);
        assert_eq!(multiply(f64::MAX, 2.0), f64::INFINITY);
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert!(power(-8.0, 0.5).is_nan());
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("12.5"), Ok(12.5));
        assert_eq!(parse_operand("3."), Ok(3.0));
        assert_eq!(
            parse_operand("-"),
            Err(DomainError::InvalidOperand("-".to_string()))
        );
    }
}
