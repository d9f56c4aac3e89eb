//! addition at a minimum output scale

use crate::*;
use crate::arithmetic::{aligned, mul_pow10};

/// Sum of `a` and `b` at scale `max(a.scale, b.scale, scale_min)`.
///
/// The significands are aligned on the larger operand scale before the
/// integer add; a `scale_min` beyond both operands zero-pads the result
/// with trailing fractional digits.
pub(crate) fn add_with_scale_min(a: &Number, b: &Number, scale_min: u64) -> Number {
    let sum_scale = a.scale().max(b.scale());
    let (x, y) = aligned(a, b);

    let mut sum = &*x + &*y;
    if sum_scale < scale_min {
        sum = mul_pow10(sum, scale_min - sum_scale);
    }
    Number::from_bigint(sum, sum_scale.max(scale_min))
}
