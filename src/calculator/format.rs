//! Number formatting for the display buffer.

/// Maximum number of fractional digits shown for a result.
pub const MAX_FRACTION_DIGITS: usize = 10;

/// Format a number for the display buffer.
///
/// Rounds to [`MAX_FRACTION_DIGITS`] fractional digits, then strips trailing
/// zeros and a dangling decimal point. Never uses scientific notation, so the
/// output always parses back as `f64`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    // Tiny negatives round to "-0"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn test_rounds_to_ten_digits() {
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666667");
        assert_eq!(format_number(0.9999999999999999), "1");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1e-15), "0");
    }

    #[test]
    fn test_no_scientific_notation() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e-12), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }
}
