//! Multi-base formatted output
//!
//! POSIX `bc` prints numbers in any output base through a caller
//! supplied character sink. Bases up to 16 use one character per digit;
//! larger bases print each digit as a zero-padded decimal field. The
//! integer section separates fields with a space before every digit,
//! the fractional section only between digits; both quirks are part of
//! the observable format.

use crate::*;

/// The reference string for digits.
static DIGIT_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Emit `val` as decimal digits, zero-left-padded to at least `width`
/// columns, with an optional single leading space.
pub fn write_long<F>(val: i64, width: usize, leading_space: bool, out: &mut F)
where
    F: FnMut(char),
{
    if leading_space {
        out(' ');
    }
    let digits = val.to_string();
    for _ in digits.len()..width {
        out('0');
    }
    for ch in digits.chars() {
        out(ch);
    }
}

pub(crate) fn write_number<F>(num: &Number, obase: u32, out: &mut F)
where
    F: FnMut(char),
{
    debug_assert!(obase >= 2, "output base must be at least 2");

    if num.is_negative() {
        out('-');
    }
    if num.is_zero() {
        out('0');
        return;
    }

    if obase == 10 {
        // base 10 goes through the canonical stringification
        let text = num.to_string();
        for ch in text.chars().filter(|&c| c != '-') {
            out(ch);
        }
        return;
    }

    let base = Number::from(obase);
    let int_signed = num.truncated();
    let mut frac_part = num.sub(&int_signed, 0).abs();
    let mut int_part = int_signed.abs();

    // field width for bases beyond 16: room for the largest digit
    let width = Number::from(obase - 1).digits() as usize;

    let mut digit_stack = Vec::new();
    while !int_part.is_zero() {
        let (quot, digit) = int_part
            .div_rem(&base, 0)
            .expect("output base is nonzero");
        digit_stack.push(digit.to_i64());
        int_part = quot;
    }
    for &digit in digit_stack.iter().rev() {
        if obase <= 16 {
            out(DIGIT_CHARS[digit as usize] as char);
        } else {
            write_long(digit, width, true, out);
        }
    }

    if num.scale() > 0 {
        out('.');
        let mut spaced = false;
        let mut emitted = Number::one();
        while emitted.digits() <= num.scale() {
            frac_part = frac_part.mul(&base, num.scale());
            let digit = frac_part.to_i64();
            frac_part = frac_part.sub(&Number::from(digit), 0);
            if obase <= 16 {
                out(DIGIT_CHARS[digit as usize] as char);
            } else {
                write_long(digit, width, spaced, out);
                spaced = true;
            }
            emitted = emitted.mul(&base, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radix_string(text: &str, scale: u64, obase: u32) -> String {
        let n = Number::parse(text, scale);
        let mut s = String::new();
        n.write_radix(obase, &mut |ch| s.push(ch));
        s
    }

    #[test]
    fn hexadecimal() {
        let vals = vec![
            ("255.5", 1, "FF.8"),
            ("255", 0, "FF"),
            ("-255.5", 1, "-FF.8"),
            ("16", 0, "10"),
            ("0.5", 1, ".8"),
        ];
        for (text, scale, expected) in vals {
            assert_eq!(radix_string(text, scale, 16), expected, "{} in base 16", text);
        }
    }

    #[test]
    fn binary() {
        assert_eq!(radix_string("10", 0, 2), "1010");
        // two decimal fractional digits cost seven binary digits
        assert_eq!(radix_string("10.25", 2, 2), "1010.0100000");
    }

    #[test]
    fn base_10_streams_display_form() {
        let vals = vec![
            ("1.5", 1, "1.5"),
            ("-1.5", 1, "-1.5"),
            ("0", 0, "0"),
            ("0.50", 2, ".50"),
        ];
        for (text, scale, expected) in vals {
            assert_eq!(radix_string(text, scale, 10), expected);
        }
    }

    #[test]
    fn large_bases_space_fields_asymmetrically() {
        // integer digits each get a leading space; fractional fields
        // are separated only between digits
        assert_eq!(radix_string("255.5", 1, 100), " 02 55.50");
        // one base-100 field carries two decimal digits of information
        assert_eq!(radix_string("10000.06", 2, 100), " 01 00 00.06");
        assert_eq!(radix_string("0.123", 3, 100), ".12 30");
        assert_eq!(radix_string("-255", 0, 100), "- 02 55");
    }

    #[test]
    fn zero_is_a_single_character_in_any_base() {
        for obase in [2u32, 8, 16, 99, 1000] {
            assert_eq!(radix_string("0", 0, obase), "0");
        }
    }

    #[test]
    fn write_long_pads_and_spaces() {
        let mut s = String::new();
        write_long(7, 3, false, &mut |ch| s.push(ch));
        assert_eq!(s, "007");

        let mut s = String::new();
        write_long(42, 2, true, &mut |ch| s.push(ch));
        assert_eq!(s, " 42");
    }
}
