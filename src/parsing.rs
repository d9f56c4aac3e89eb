//! Routines for parsing decimal strings into Numbers

use crate::*;

/// Parse `text` keeping at most `scale` fractional digits.
///
/// Grammar: `[+-]? digits? ('.' digits?)?`, with at least one digit
/// somewhere. Leading zeros of the integer part are stripped before the
/// digit count is taken, and the whole input must be consumed; anything
/// else yields zero without a diagnostic, which is how the calculator's
/// scanner expects malformed literals to behave.
pub(crate) fn parse_with_scale(text: &str, scale: u64) -> Number {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'+') => {
            pos += 1;
            false
        }
        Some(b'-') => {
            pos += 1;
            true
        }
        _ => false,
    };

    while bytes.get(pos) == Some(&b'0') {
        pos += 1;
    }
    let int_start = pos;
    while bytes.get(pos).map_or(false, |b| b.is_ascii_digit()) {
        pos += 1;
    }
    let int_digits = &bytes[int_start..pos];

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
    }
    let frac_start = pos;
    while bytes.get(pos).map_or(false, |b| b.is_ascii_digit()) {
        pos += 1;
    }
    let frac_digits = &bytes[frac_start..pos];

    if pos != bytes.len() || int_digits.len() + frac_digits.len() == 0 {
        return Number::zero();
    }

    let kept = (frac_digits.len() as u64).min(scale) as usize;
    let mut digits = Vec::with_capacity(int_digits.len() + kept);
    digits.extend_from_slice(int_digits);
    digits.extend_from_slice(&frac_digits[..kept]);

    let value = BigInt::parse_bytes(&digits, 10).unwrap_or_default();
    let value = if negative { -value } else { value };
    Number::from_bigint(value, kept as u64)
}
