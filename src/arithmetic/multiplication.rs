//! multiplication with bc's product-scale rule

use crate::*;
use crate::arithmetic::tdiv_pow10;

/// Product of `a` and `b` at scale
/// `min(a.scale + b.scale, max(scale, a.scale, b.scale))`.
///
/// The significands are multiplied exactly; fractional digits beyond
/// the product scale are truncated toward zero, so the sign of a
/// truncated product matches the sign of the exact one.
pub(crate) fn multiply_with_scale(a: &Number, b: &Number, scale: u64) -> Number {
    let full_scale = a.scale() + b.scale();
    let prod_scale = full_scale.min(scale.max(a.scale().max(b.scale())));

    let mut prod = a.significand() * b.significand();
    if full_scale > prod_scale {
        prod = tdiv_pow10(prod, full_scale - prod_scale);
    }
    Number::from_bigint(prod, prod_scale)
}
