//! integer power and modular exponentiation

use crate::*;
use crate::arithmetic::{mul_pow10, tdiv_pow10};
use crate::arithmetic::division::{divide_with_scale, divmod_with_scale, modulo_with_scale};
use crate::arithmetic::multiplication::multiply_with_scale;

use log::warn;

/// `base` raised to the integer part of `expo`.
///
/// A positive exponent computes the exact integer power and rescales to
/// `min(base.scale * e, max(scale, base.scale))`; a negative exponent
/// computes the positive power and inverts it at `scale` fractional
/// digits. An exponent that does not fit an `i64` fails rather than
/// raising to a wrong power.
pub(crate) fn raise(base: &Number, expo: &Number, scale: u64) -> Result<Number, ArithmeticError> {
    if expo.scale() != 0 {
        warn!("non-zero scale in exponent");
    }
    let exponent = expo.to_i64();
    // to_i64 reports out-of-range exponents as zero; a "zero" exponent
    // with magnitude above one is really an overflow
    if exponent == 0 && impl_cmp::compare(expo, &Number::one(), false) == Ordering::Greater {
        return Err(ArithmeticError::ExponentTooLarge);
    }

    if exponent == 0 {
        return Ok(Number::one());
    }

    let negative = exponent < 0;
    let e = exponent.unsigned_abs();

    let full_scale = base.scale() as u128 * e as u128;
    let result_scale = if negative {
        scale
    } else {
        full_scale.min(scale.max(base.scale()) as u128) as u64
    };

    let mut power = Pow::pow(base.significand(), e);
    let target = result_scale as u128;
    if full_scale > target {
        power = tdiv_pow10(power, (full_scale - target) as u64);
    } else if full_scale < target {
        power = mul_pow10(power, (target - full_scale) as u64);
    }

    let raised = Number::from_bigint(power, result_scale);
    if negative {
        divide_with_scale(&Number::one(), &raised, scale)
    } else {
        Ok(raised)
    }
}

/// `base^expo mod modulus` by binary exponentiation.
///
/// Each squaring is reduced immediately, so intermediate values stay
/// bounded by the modulus. The three operands are expected to be
/// integers; a fractional exponent is truncated after a warning, while
/// fractional base or modulus only warn.
pub(crate) fn raise_mod(
    base: &Number,
    expo: &Number,
    modulus: &Number,
    scale: u64,
) -> Result<Number, ArithmeticError> {
    if modulus.is_zero() {
        return Err(ArithmeticError::DivideByZero);
    }
    if expo.is_negative() {
        return Err(ArithmeticError::NegativeExponent);
    }

    if base.scale() != 0 {
        warn!("non-zero scale in base");
    }
    let mut exponent = expo.clone();
    if exponent.scale() != 0 {
        warn!("non-zero scale in exponent");
        exponent = exponent.truncated();
    }
    if modulus.scale() != 0 {
        warn!("non-zero scale in modulus");
    }

    let result_scale = scale.max(base.scale());
    let two = Number::two();
    let mut power = base.clone();
    let mut acc = Number::one();

    while !exponent.is_zero() {
        let (halved, parity) = divmod_with_scale(&exponent, &two, 0)?;
        exponent = halved;
        if !parity.is_zero() {
            acc = multiply_with_scale(&acc, &power, result_scale);
            acc = modulo_with_scale(&acc, modulus, scale)?;
        }
        power = multiply_with_scale(&power, &power, result_scale);
        power = modulo_with_scale(&power, modulus, scale)?;
    }

    Ok(acc)
}
