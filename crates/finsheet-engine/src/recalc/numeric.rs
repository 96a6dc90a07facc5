//! Numeric cell parsing and display formatting.
//!
//! Cells store text. Numbers are read leniently (thousands separators are
//! ignored, trailing text after a numeric prefix is dropped) and written back
//! in one of two canonical forms:
//!
//! - [`format_fixed`]: exactly two fractional digits, no grouping (`"1234.50"`)
//! - [`format_grouped`]: comma-grouped, at most two fractional digits (`"1,234.5"`)
//!
//! Both round half away from zero, applied to the shortest decimal string that
//! round-trips the `f64`. So `1.005` rounds to `1.01` and `-2.5` to `-3` at
//! zero digits. The decimal separator is always `.`, independent of locale.

use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("numeric prefix pattern is valid")
});

const FRACTION_DIGITS: usize = 2;

/// Parse cell text as a number.
///
/// Commas are stripped first and leading whitespace is ignored. The longest
/// numeric prefix is used, so `"12abc"` reads as `12`. Returns `None` when
/// there is no numeric prefix or the value is not finite.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let stripped: String = text.chars().filter(|&c| c != ',').collect();
    let trimmed = stripped.trim_start();
    let prefix = NUMERIC_PREFIX.find(trimmed)?;
    prefix
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// [`parse_numeric`], with unparseable or empty text counting as zero.
pub fn numeric_or_zero(text: &str) -> f64 {
    parse_numeric(text).unwrap_or(0.0)
}

/// Format with exactly two fractional digits and no grouping.
pub fn format_fixed(value: f64) -> String {
    match round_decimal(value, FRACTION_DIGITS) {
        Some(rounded) => rounded.render(false, false),
        None => format_non_finite(value),
    }
}

/// Format with comma thousands separators and at most two fractional digits.
pub fn format_grouped(value: f64) -> String {
    match round_decimal(value, FRACTION_DIGITS) {
        Some(rounded) => rounded.render(true, true),
        None => format_non_finite(value),
    }
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "#NAN!".to_string()
    } else {
        "#INF!".to_string()
    }
}

/// A decimal rounded to a fixed number of fractional digits.
struct Rounded {
    negative: bool,
    int_digits: String,
    frac_digits: String,
}

impl Rounded {
    fn render(&self, group: bool, trim_zeros: bool) -> String {
        let mut out = String::new();
        if self.negative {
            out.push('-');
        }
        if group {
            out.push_str(&group_thousands(&self.int_digits));
        } else {
            out.push_str(&self.int_digits);
        }
        let frac = if trim_zeros {
            self.frac_digits.trim_end_matches('0')
        } else {
            self.frac_digits.as_str()
        };
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }
        out
    }
}

fn round_decimal(value: f64, digits: usize) -> Option<Rounded> {
    if !value.is_finite() {
        return None;
    }

    // `Display` for f64 is the shortest round-trip form and never uses exponents.
    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut kept: Vec<u8> = int_part.bytes().collect();
    let int_len = kept.len();
    let frac_bytes = frac_part.as_bytes();
    for i in 0..digits {
        kept.push(frac_bytes.get(i).copied().unwrap_or(b'0'));
    }

    if frac_bytes.get(digits).is_some_and(|&d| d >= b'5') {
        // Propagate the carry from the last kept digit.
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    debug_assert!(split >= int_len);
    let int_digits = String::from_utf8_lossy(&kept[..split]).into_owned();
    let frac_digits = String::from_utf8_lossy(&kept[split..]).into_owned();
    let is_zero = kept.iter().all(|&d| d == b'0');

    Some(Rounded {
        negative: value.is_sign_negative() && !is_zero,
        int_digits,
        frac_digits,
    })
}

fn group_thousands(int_digits: &str) -> String {
    let len = int_digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
