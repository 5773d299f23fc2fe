use regex::Regex;
use std::sync::LazyLock;

/// Optional whole part, whitespace, then `numerator/denominator`.
/// Digits are ASCII only; `f64::parse` rejects anything else.
// The whitespace is required: "11/2" is eleven halves, not one and a half.
static FRACTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:([0-9]+)\s+)?([0-9]+)/([0-9]+)").expect("Invalid fraction regex")
});

/// ASCII digits with at most one decimal point
static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]*\.?[0-9]+").expect("Invalid decimal regex"));

/// Magnitude assumed when the text carries no number at all ("a dash", "splash")
pub const DEFAULT_MAGNITUDE: f64 = 1.0;

/// Pull the first numeric literal out of a measure.
///
/// Mixed numbers ("1 1/2") and fractions ("3/4") win over plain decimals
/// ("1.5", "2") wherever they appear in the text. A fraction with a zero
/// denominator is ignored. Returns [`DEFAULT_MAGNITUDE`] when nothing
/// numeric is found.
pub fn parse_numeric_value(text: &str) -> f64 {
    parse_fraction(text)
        .or_else(|| parse_decimal(text))
        .unwrap_or(DEFAULT_MAGNITUDE)
}

fn parse_fraction(text: &str) -> Option<f64> {
    let caps = FRACTION_REGEX.captures(text)?;

    let whole = match caps.get(1) {
        Some(m) => m.as_str().parse::<f64>().ok()?,
        None => 0.0,
    };
    let numerator = caps[2].parse::<f64>().ok()?;
    let denominator = caps[3].parse::<f64>().ok()?;
    if denominator == 0.0 {
        return None;
    }

    finite(whole + numerator / denominator)
}

fn parse_decimal(text: &str) -> Option<f64> {
    let m = DECIMAL_REGEX.find(text)?;
    m.as_str().parse::<f64>().ok().and_then(finite)
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        assert_eq!(parse_numeric_value("2 oz"), 2.0);
        assert_eq!(parse_numeric_value("30 ml"), 30.0);
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse_numeric_value("1.5 oz"), 1.5);
        assert_eq!(parse_numeric_value(".75 oz"), 0.75);
        assert_eq!(parse_numeric_value("1.5.2"), 1.5);
    }

    #[test]
    fn test_simple_fraction() {
        assert_eq!(parse_numeric_value("1/2 oz"), 0.5);
        assert_eq!(parse_numeric_value("1/4 cup"), 0.25);
    }

    #[test]
    fn test_mixed_number() {
        assert_eq!(parse_numeric_value("1 1/2 oz"), 1.5);
        assert_eq!(parse_numeric_value("2  3/4 cups"), 2.75);
    }

    #[test]
    fn test_fraction_without_space_is_not_mixed() {
        assert_eq!(parse_numeric_value("11/2 oz"), 5.5);
    }

    #[test]
    fn test_fraction_found_after_words() {
        assert_eq!(parse_numeric_value("juice of 1/2 lemon"), 0.5);
    }

    #[test]
    fn test_fraction_beats_earlier_decimal() {
        assert_eq!(parse_numeric_value("2 shots or 1/2 cup"), 0.5);
    }

    #[test]
    fn test_zero_denominator_falls_back_to_decimal() {
        assert_eq!(parse_numeric_value("3/0 oz"), 3.0);
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        assert_eq!(parse_numeric_value("٢ 1/2 oz"), 0.5);
        assert_eq!(parse_numeric_value("２ 2 oz"), 2.0);
        assert_eq!(parse_numeric_value("２"), DEFAULT_MAGNITUDE);
    }

    #[test]
    fn test_no_number_defaults_to_one() {
        assert_eq!(parse_numeric_value("dash"), DEFAULT_MAGNITUDE);
        assert_eq!(parse_numeric_value(""), DEFAULT_MAGNITUDE);
        assert_eq!(parse_numeric_value("."), DEFAULT_MAGNITUDE);
    }
}
