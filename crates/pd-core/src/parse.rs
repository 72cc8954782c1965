//! Lenient value parsing for inspector input.
//!
//! Built on `winnow` 0.7. Inspector fields hand over raw text; these helpers
//! turn it into typed values without ever failing loudly: numbers coerce to 0,
//! colors that do not parse come back as `None`.

use crate::model::Color;
use winnow::ascii::{digit1, multispace0};
use winnow::combinator::opt;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Parse a leading integer the way a browser `parseInt(value, 10)` does:
/// optional whitespace, optional sign, then digits. Trailing junk is ignored.
/// Anything without a digit prefix (including the empty string) is 0.
#[must_use]
pub fn coerce_int(raw: &str) -> i64 {
    let mut input = raw;
    int_prefix.parse_next(&mut input).unwrap_or(0)
}

/// Parse a CSS hex color (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`).
/// The leading `#` is optional; surrounding whitespace is ignored.
#[must_use]
pub fn parse_color(raw: &str) -> Option<Color> {
    let mut input = raw.trim();
    let color = hex_color.parse_next(&mut input).ok()?;
    input.is_empty().then_some(color)
}

fn int_prefix(input: &mut &str) -> ModalResult<i64> {
    let _ = multispace0.parse_next(input)?;
    let sign = opt(one_of(['+', '-'])).parse_next(input)?;
    let digits: &str = digit1.parse_next(input)?;
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Ok(if sign == Some('-') {
        -magnitude
    } else {
        magnitude
    })
}

fn hex_color(input: &mut &str) -> ModalResult<Color> {
    let _ = opt('#').parse_next(input)?;
    let digits: &str = take_while(3..=8, |c: char| c.is_ascii_hexdigit()).parse_next(input)?;
    Color::from_hex_digits(digits).ok_or_else(|| ErrMode::Backtrack(ContextError::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_plain_and_signed() {
        assert_eq!(coerce_int("42"), 42);
        assert_eq!(coerce_int("  -7"), -7);
        assert_eq!(coerce_int("+12"), 12);
    }

    #[test]
    fn coerce_ignores_trailing_junk() {
        assert_eq!(coerce_int("24px"), 24);
        assert_eq!(coerce_int("3.9"), 3);
    }

    #[test]
    fn coerce_invalid_is_zero() {
        assert_eq!(coerce_int(""), 0);
        assert_eq!(coerce_int("abc"), 0);
        assert_eq!(coerce_int("-"), 0);
        assert_eq!(coerce_int("px12"), 0);
    }

    #[test]
    fn coerce_saturates_instead_of_overflowing() {
        assert_eq!(coerce_int("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn color_forms() {
        assert_eq!(parse_color("#ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(parse_color("FFF"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(parse_color(" #ffffff22 "), Some(Color::rgba(255, 255, 255, 0x22)));
        assert_eq!(parse_color("#0008"), Some(Color::rgba(0, 0, 0, 0x88)));
    }

    #[test]
    fn color_rejects_garbage() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("red"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#ff0000;background:url(x)"), None);
    }
}
