//! arithmetic routines
//!
//! Every operation in the crate reduces to the same rewrite rule on
//! `(significand, scale)` pairs: align the operands to a common scale,
//! run the exact integer operation, then multiply or truncating-divide
//! by a power of ten to land on the declared output scale. The rescale
//! primitives live here and nowhere else.

use crate::*;

use std::borrow::Cow;
use std::f64::consts::LOG2_10;

pub(crate) mod addition;
pub(crate) mod division;
pub(crate) mod multiplication;
pub(crate) mod pow;
pub(crate) mod sqrt;
pub(crate) mod subtraction;

/// Return 10^pow
pub(crate) fn ten_to_the(pow: u64) -> BigInt {
    ten_to_the_uint(pow).into()
}

/// Return 10^pow
pub(crate) fn ten_to_the_uint(pow: u64) -> BigUint {
    if pow < 20 {
        return BigUint::from(10u64.pow(pow as u32));
    }
    Pow::pow(BigUint::from(10u8), pow)
}

/// Multiply a significand by 10^pow (exact rescale upward).
pub(crate) fn mul_pow10(n: BigInt, pow: u64) -> BigInt {
    if pow == 0 {
        n
    } else {
        n * ten_to_the(pow)
    }
}

/// Divide a significand by 10^pow, truncating toward zero.
///
/// `BigInt` division truncates toward zero, which is exactly the
/// rescale-downward rule the number model requires.
pub(crate) fn tdiv_pow10(n: BigInt, pow: u64) -> BigInt {
    if pow == 0 {
        n
    } else {
        n / ten_to_the(pow)
    }
}

/// Align two numbers on their larger scale.
///
/// The operand with the smaller scale is stepped *up*; stepping the
/// larger one down would discard digits. Returns the significands in
/// argument order.
pub(crate) fn aligned<'a>(a: &'a Number, b: &'a Number) -> (Cow<'a, BigInt>, Cow<'a, BigInt>) {
    match a.scale().cmp(&b.scale()) {
        Ordering::Greater => {
            let stepped = mul_pow10(b.significand().clone(), a.scale() - b.scale());
            (Cow::Borrowed(a.significand()), Cow::Owned(stepped))
        }
        Ordering::Less => {
            let stepped = mul_pow10(a.significand().clone(), b.scale() - a.scale());
            (Cow::Owned(stepped), Cow::Borrowed(b.significand()))
        }
        Ordering::Equal => (Cow::Borrowed(a.significand()), Cow::Borrowed(b.significand())),
    }
}

/// Return number of decimal digits in integer
pub(crate) fn count_decimal_digits(int: &BigInt) -> u64 {
    count_decimal_digits_uint(int.magnitude())
}

/// Return number of decimal digits in unsigned integer
pub(crate) fn count_decimal_digits_uint(uint: &BigUint) -> u64 {
    if uint.is_zero() {
        return 1;
    }
    // guess from the bit count, then correct upward
    let mut digits = (uint.bits() as f64 / LOG2_10) as u64;
    let mut num = ten_to_the_uint(digits);
    while *uint >= num {
        num *= 10u8;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod test_ten_to_the {
    use super::*;

    #[test]
    fn small_powers() {
        assert_eq!(ten_to_the(0), BigInt::from(1));
        assert_eq!(ten_to_the(1), BigInt::from(10));
        assert_eq!(ten_to_the(19), BigInt::from(10_000_000_000_000_000_000u64));
    }

    #[test]
    fn large_power_matches_string() {
        let n = ten_to_the(45);
        let mut expected = String::from("1");
        expected.push_str(&"0".repeat(45));
        assert_eq!(n.to_string(), expected);
    }
}


#[cfg(test)]
mod test_rescale {
    use super::*;

    #[test]
    fn tdiv_truncates_toward_zero() {
        let vals = vec![
            ("1999", 2, "19"),
            ("-1999", 2, "-19"),
            ("-1", 1, "0"),
            ("5", 1, "0"),
            ("-5000", 3, "-5"),
        ];
        for (n, pow, expected) in vals {
            let n: BigInt = n.parse().unwrap();
            let expected: BigInt = expected.parse().unwrap();
            assert_eq!(tdiv_pow10(n, pow), expected);
        }
    }

    #[test]
    fn aligned_steps_smaller_scale_up() {
        let a = Number::parse("1.25", 10); // scale 2
        let b = Number::parse("3", 10); // scale 0
        let (x, y) = aligned(&a, &b);
        assert_eq!(*x, BigInt::from(125));
        assert_eq!(*y, BigInt::from(300));
    }
}
