//! Compact fixed-precision number formatting for SVG attributes

/// Format `value` with `precision` decimal places, then drop insignificant
/// trailing zeros and a dangling decimal point.
///
/// Only the fractional part is trimmed: `format_number(10.0, 0)` is `"10"`
/// and `format_number(100.0, 2)` is `"100"`. Negative zero keeps its sign
/// (`"-0"`), as the standard formatter writes it.
///
/// Unlike a plain right-trim of `'0'`, integer strings are left untouched, so
/// precision 0 never turns `10` into `1` or `0` into an empty string.
pub fn format_number(value: f64, precision: usize) -> String {
    let mut s = format!("{:.*}", precision, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_zero_trimmed() {
        assert_eq!(format_number(2.5, 2), "2.5");
        assert_eq!(format_number(0.125, 5), "0.125");
    }

    #[test]
    fn test_integer_values_drop_point() {
        assert_eq!(format_number(3.0, 2), "3");
        assert_eq!(format_number(3.0, 0), "3");
        assert_eq!(format_number(-7.0, 4), "-7");
    }

    #[test]
    fn test_integer_digits_never_trimmed() {
        assert_eq!(format_number(10.0, 0), "10");
        assert_eq!(format_number(100.0, 2), "100");
        assert_eq!(format_number(2000.004, 2), "2000");
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(-100.0, 0), "-100");
    }

    #[test]
    fn test_rounds_to_precision() {
        assert_eq!(format_number(1.23456, 3), "1.235");
        assert_eq!(format_number(0.999, 2), "1");
        assert_eq!(format_number(-1.26, 1), "-1.3");
    }

    #[test]
    fn test_precision_zero_has_no_point() {
        assert_eq!(format_number(12.7, 0), "13");
        assert!(!format_number(0.4, 0).contains('.'));
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        assert_eq!(format_number(-0.0, 2), "-0");
        assert_eq!(format_number(-0.001, 2), "-0");
        assert_eq!(format_number(0.0, 2), "0");
    }
}
