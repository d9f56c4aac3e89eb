//! Decimal fixed-point numbers for a `bc`-style calculator
//!
//! A [`Number`] models the signed rational `significand * 10^(-scale)`,
//! where the significand is an unbounded [`BigInt`](num_bigint::BigInt)
//! and `scale` counts the decimal digits tracked after the point. All
//! arithmetic is exact up to the requested output scale, and every
//! rescale truncates toward zero, as POSIX `bc` requires.
//!
//! Handles are cheap to clone: a `Number` is a shared reference to its
//! significand, and cloning only bumps a reference count. The library is
//! single-threaded by construction (`Number` is neither `Send` nor
//! `Sync`); see the `bc` execution model, which never shares numbers
//! across threads.
//!
//! # Example
//!
//! ```
//! use bcnum::Number;
//!
//! let a = Number::parse("1.5", 10);
//! let b = Number::parse("2", 10);
//!
//! assert_eq!(a.mul(&b, 10).to_string(), "3.0");
//! assert_eq!(a.add(&b, 0).to_string(), "3.5");
//! ```

#![allow(unused_imports)]

pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(test)]
extern crate paste;

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::rc::Rc;

use num_bigint::{BigInt, BigUint, Sign};
pub use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

// "low level" numeric kernels
mod arithmetic;

// PartialEq / Ord
mod impl_cmp;

// std::fmt traits and the canonical bc stringification
mod impl_fmt;

// From<T> impls and the truncating integer conversion
mod impl_convert;

// construct Numbers from strings
mod parsing;

// POSIX multi-base output
mod radix;
pub use crate::radix::write_long;

use crate::arithmetic::{count_decimal_digits, tdiv_pow10};

/// The shared payload behind a [`Number`] handle.
///
/// The record is immutable once published; the only mutation the
/// library performs is the in-place sign flip of [`Number::negate`],
/// which requires proof of unique ownership via [`Rc::get_mut`].
struct NumData {
    scale: u64,
    value: BigInt,
}

/// An arbitrary-precision decimal fixed-point number.
///
/// The modeled value is `value * 10^(-scale)`. Cloning a `Number`
/// shares the underlying storage; the storage is returned to the
/// allocator when the last clone is dropped.
#[derive(Clone)]
pub struct Number {
    inner: Rc<NumData>,
}

struct Singletons {
    zero: Number,
    one: Number,
    two: Number,
}

impl Singletons {
    fn new() -> Singletons {
        Singletons {
            zero: Number::new(0),
            one: Number::from_bigint(BigInt::one(), 0),
            two: Number::from_bigint(BigInt::from(2u8), 0),
        }
    }
}

thread_local! {
    static SINGLETONS: Singletons = Singletons::new();
}

/// Force the shared `zero`/`one`/`two` handles into existence.
///
/// The singletons are created lazily on first use; callers that care
/// about allocation timing (the calculator runtime does) call this once
/// at startup. The handles live for the remainder of the thread.
pub fn init_numbers() {
    SINGLETONS.with(|_| ());
}

impl Number {
    /// Create a zero-valued number with the given scale.
    pub fn new(scale: u64) -> Number {
        Number::from_bigint(BigInt::zero(), scale)
    }

    /// Construct a `Number` from a significand and a scale.
    ///
    /// The modeled value is `value * 10^(-scale)`.
    pub fn from_bigint(value: BigInt, scale: u64) -> Number {
        Number {
            inner: Rc::new(NumData { scale, value }),
        }
    }

    /// A new share of the singleton zero.
    pub fn zero() -> Number {
        SINGLETONS.with(|s| s.zero.clone())
    }

    /// A new share of the singleton one.
    pub fn one() -> Number {
        SINGLETONS.with(|s| s.one.clone())
    }

    /// A new share of the singleton two.
    pub fn two() -> Number {
        SINGLETONS.with(|s| s.two.clone())
    }

    /// Parse a decimal string, keeping at most `scale` fractional digits.
    ///
    /// The accepted grammar is an optional sign, digits, an optional
    /// point, and more digits; either digit run may be empty but not
    /// both. Anything else parses, silently, as zero. Fractional digits
    /// beyond `scale` are discarded.
    pub fn parse(text: &str, scale: u64) -> Number {
        parsing::parse_with_scale(text, scale)
    }

    pub(crate) fn significand(&self) -> &BigInt {
        &self.inner.value
    }

    /// Count of decimal digits tracked after the point.
    pub fn scale(&self) -> u64 {
        self.inner.scale
    }

    /// Count of decimal digits in the significand, ignoring sign.
    ///
    /// Zero has one digit.
    pub fn digits(&self) -> u64 {
        count_decimal_digits(self.significand())
    }

    pub fn is_zero(&self) -> bool {
        self.inner.value.sign() == Sign::NoSign
    }

    pub fn is_negative(&self) -> bool {
        self.inner.value.sign() == Sign::Minus
    }

    /// Flip the sign in place.
    ///
    /// A handle with no other shares is mutated directly; otherwise the
    /// handle is repointed at a freshly negated copy, leaving the other
    /// shares untouched.
    pub fn negate(&mut self) {
        match Rc::get_mut(&mut self.inner) {
            Some(data) => {
                data.value = -std::mem::take(&mut data.value);
            }
            None => {
                let negated = NumData {
                    scale: self.inner.scale,
                    value: -(&self.inner.value),
                };
                self.inner = Rc::new(negated);
            }
        }
    }

    /// Magnitude of this number, at the same scale.
    pub fn abs(&self) -> Number {
        if self.is_negative() {
            Number::from_bigint(self.significand().abs(), self.scale())
        } else {
            self.clone()
        }
    }

    /// Drop all fractional digits, truncating toward zero.
    ///
    /// The result has scale zero.
    pub fn truncated(&self) -> Number {
        if self.scale() == 0 {
            self.clone()
        } else {
            let int = tdiv_pow10(self.significand().clone(), self.scale());
            Number::from_bigint(int, 0)
        }
    }

    /// `self + rhs`, at scale `max(self.scale, rhs.scale, scale_min)`.
    ///
    /// When `scale_min` exceeds both operand scales, the result is
    /// zero-padded with trailing fractional digits.
    pub fn add(&self, rhs: &Number, scale_min: u64) -> Number {
        arithmetic::addition::add_with_scale_min(self, rhs, scale_min)
    }

    /// `self - rhs`, at scale `max(self.scale, rhs.scale, scale_min)`.
    pub fn sub(&self, rhs: &Number, scale_min: u64) -> Number {
        arithmetic::subtraction::subtract_with_scale_min(self, rhs, scale_min)
    }

    /// `self * rhs`, at scale
    /// `min(self.scale + rhs.scale, max(scale, self.scale, rhs.scale))`.
    ///
    /// Excess fractional digits are truncated toward zero.
    pub fn mul(&self, rhs: &Number, scale: u64) -> Number {
        arithmetic::multiplication::multiply_with_scale(self, rhs, scale)
    }

    /// `self / rhs` truncated toward zero, with exactly `scale`
    /// fractional digits.
    pub fn div(&self, rhs: &Number, scale: u64) -> Result<Number, ArithmeticError> {
        arithmetic::division::divide_with_scale(self, rhs, scale)
    }

    /// Quotient and remainder of `self / rhs`.
    ///
    /// The quotient carries `scale` fractional digits; the remainder is
    /// exact: `self = quot * rhs + rem` at scale
    /// `max(self.scale, rhs.scale + scale)`. Because the quotient
    /// truncates toward zero, the remainder has the sign of `self`.
    pub fn div_rem(&self, rhs: &Number, scale: u64) -> Result<(Number, Number), ArithmeticError> {
        arithmetic::division::divmod_with_scale(self, rhs, scale)
    }

    /// Remainder of `self / rhs`; see [`Number::div_rem`].
    pub fn rem(&self, rhs: &Number, scale: u64) -> Result<Number, ArithmeticError> {
        arithmetic::division::modulo_with_scale(self, rhs, scale)
    }

    /// `self` raised to the integer part of `expo`.
    ///
    /// A fractional exponent is truncated with a warning. Negative
    /// exponents compute the positive power and invert it at `scale`
    /// fractional digits. Exponents that do not fit a machine integer
    /// fail with [`ArithmeticError::ExponentTooLarge`].
    pub fn power(&self, expo: &Number, scale: u64) -> Result<Number, ArithmeticError> {
        arithmetic::pow::raise(self, expo, scale)
    }

    /// `self^expo mod modulus` by binary exponentiation.
    ///
    /// The exponent must be non-negative and the modulus nonzero.
    /// Operands are expected to be integers; fractional digits draw a
    /// warning and the exponent is truncated.
    pub fn power_mod(
        &self,
        expo: &Number,
        modulus: &Number,
        scale: u64,
    ) -> Result<Number, ArithmeticError> {
        arithmetic::pow::raise_mod(self, expo, modulus, scale)
    }

    /// Replace `self` with its square root, carrying
    /// `max(scale, self.scale)` fractional digits.
    ///
    /// The last digit may be off by one unit in the last place. A
    /// negative input fails with [`ArithmeticError::NegativeRadicand`]
    /// and leaves `self` untouched.
    pub fn sqrt(&mut self, scale: u64) -> Result<(), ArithmeticError> {
        arithmetic::sqrt::sqrt_with_scale(self, scale)
    }

    /// Stream `self` in base `obase` to a character sink.
    ///
    /// Bases 2 through 16 use the digits `0-9A-F`; larger bases emit
    /// each digit as a space-separated, zero-padded decimal field. Base
    /// 10 streams the canonical [`Display`](std::fmt::Display) form.
    pub fn write_radix<F>(&self, obase: u32, out: &mut F)
    where
        F: FnMut(char),
    {
        radix::write_number(self, obase, out)
    }
}

impl Default for Number {
    fn default() -> Number {
        Number::zero()
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(mut self) -> Number {
        self.negate();
        self
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number::from_bigint(-self.significand(), self.scale())
    }
}

/// Domain failures surfaced by the fallible operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division (or reduction) by zero.
    DivideByZero,
    /// Modular exponentiation with a negative exponent.
    NegativeExponent,
    /// Square root of a negative number.
    NegativeRadicand,
    /// Exponent does not fit the machine-integer power loop.
    ExponentTooLarge,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ArithmeticError::*;

        match *self {
            DivideByZero => "divide by zero".fmt(f),
            NegativeExponent => "negative exponent".fmt(f),
            NegativeRadicand => "square root of a negative number".fmt(f),
            ExponentTooLarge => "exponent too large".fmt(f),
        }
    }
}

impl std::error::Error for ArithmeticError {}


#[cfg(all(test, property_tests))]
extern crate proptest;

#[cfg(all(test, property_tests))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
