//! subtraction at a minimum output scale

use crate::*;
use crate::arithmetic::{aligned, mul_pow10};

/// Difference `a - b` at scale `max(a.scale, b.scale, scale_min)`.
///
/// `aligned` keeps the significands in argument order, so the stepped-up
/// operand is subtracted on the correct side whichever scale is larger.
pub(crate) fn subtract_with_scale_min(a: &Number, b: &Number, scale_min: u64) -> Number {
    let diff_scale = a.scale().max(b.scale());
    let (x, y) = aligned(a, b);

    let mut diff = &*x - &*y;
    if diff_scale < scale_min {
        diff = mul_pow10(diff, scale_min - diff_scale);
    }
    Number::from_bigint(diff, diff_scale.max(scale_min))
}
