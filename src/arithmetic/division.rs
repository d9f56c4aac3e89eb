//! division, remainder, and the combined divmod

use crate::*;
use crate::arithmetic::{mul_pow10, tdiv_pow10};
use crate::arithmetic::multiplication::multiply_with_scale;
use crate::arithmetic::subtraction::subtract_with_scale_min;

/// Quotient `a / b` truncated toward zero, with exactly `scale`
/// fractional digits.
///
/// The dividend is pre-stepped by `b.scale + scale - a.scale` powers of
/// ten so the integer quotient lands on the requested scale directly.
pub(crate) fn divide_with_scale(
    a: &Number,
    b: &Number,
    scale: u64,
) -> Result<Number, ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivideByZero);
    }

    let step = b.scale() as i128 + scale as i128 - a.scale() as i128;
    let dividend = if step > 0 {
        mul_pow10(a.significand().clone(), step as u64)
    } else if step < 0 {
        tdiv_pow10(a.significand().clone(), step.unsigned_abs() as u64)
    } else {
        a.significand().clone()
    };

    Ok(Number::from_bigint(dividend / b.significand(), scale))
}

/// Quotient and remainder of `a / b`.
///
/// The remainder carries scale `max(a.scale, b.scale + scale)` and is
/// derived from the truncated quotient, so `a = quot * b + rem` holds
/// exactly at that scale and the remainder takes the dividend's sign.
pub(crate) fn divmod_with_scale(
    a: &Number,
    b: &Number,
    scale: u64,
) -> Result<(Number, Number), ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivideByZero);
    }

    let rem_scale = a.scale().max(b.scale() + scale);
    let quot = divide_with_scale(a, b, scale)?;
    let prod = multiply_with_scale(&quot, b, rem_scale);
    let rem = subtract_with_scale_min(a, &prod, rem_scale);
    Ok((quot, rem))
}

/// Remainder of `a / b`; the quotient is discarded.
pub(crate) fn modulo_with_scale(
    a: &Number,
    b: &Number,
    scale: u64,
) -> Result<Number, ArithmeticError> {
    divmod_with_scale(a, b, scale).map(|(_, rem)| rem)
}
