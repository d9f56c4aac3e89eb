//! square root via integer square root

use crate::*;
use crate::arithmetic::mul_pow10;

use num_integer::Roots;

/// Replace `num` with its square root at scale `max(scale, num.scale)`.
///
/// The significand is stepped up so that its integer square root
/// carries exactly the result scale's worth of fractional digits:
/// with `rscale = max(scale, num.scale)`, stepping by
/// `2 * rscale - num.scale` makes `sqrt(value * 10^step)` the
/// significand of the result at scale `rscale`. The last digit may be
/// off by one ULP.
pub(crate) fn sqrt_with_scale(num: &mut Number, scale: u64) -> Result<(), ArithmeticError> {
    match (*num).cmp(&Number::zero()) {
        Ordering::Less => return Err(ArithmeticError::NegativeRadicand),
        Ordering::Equal => {
            *num = Number::zero();
            return Ok(());
        }
        Ordering::Greater => {}
    }
    if *num == Number::one() {
        *num = Number::one();
        return Ok(());
    }

    let result_scale = scale.max(num.scale());
    let step = 2 * result_scale - num.scale();
    let stepped = mul_pow10(num.significand().clone(), step);

    *num = Number::from_bigint(stepped.sqrt(), result_scale);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots() {
        let vals = vec![
            ("4", 0, "2"),
            ("16", 0, "4"),
            ("15", 0, "3"),
            ("2", 20, "1.41421356237309504880"),
            ("2", 4, "1.4142"),
            ("0.25", 2, ".50"),
            ("100", 5, "10.00000"),
            ("152399025", 0, "12345"),
            ("0.0001", 2, ".0100"),
        ];
        for (input, scale, expected) in vals {
            let mut n = Number::parse(input, 20);
            n.sqrt(scale).unwrap();
            assert_eq!(n.to_string(), expected, "sqrt({})", input);
        }
    }

    #[test]
    fn result_scale_is_max_of_input_and_request() {
        let mut n = Number::parse("2.25", 10); // scale 2
        n.sqrt(0).unwrap();
        assert_eq!(n.scale(), 2);
        assert_eq!(n.to_string(), "1.50");
    }

    #[test]
    fn zero_and_one_short_circuit() {
        let mut zero = Number::parse("0.000", 10);
        zero.sqrt(7).unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero.scale(), 0);

        let mut one = Number::parse("1.000", 10);
        one.sqrt(7).unwrap();
        assert_eq!(one.to_string(), "1");
        assert_eq!(one.scale(), 0);
    }

    #[test]
    fn negative_radicand_fails_and_preserves_input() {
        let mut n = Number::parse("-4", 0);
        assert_eq!(n.sqrt(5), Err(ArithmeticError::NegativeRadicand));
        assert_eq!(n.to_string(), "-4");
    }

    #[test]
    fn root_is_within_one_ulp() {
        let cases = vec![("2", 10), ("3", 15), ("10", 8), ("0.5", 12), ("123456.789", 6)];
        for (input, scale) in cases {
            let x = Number::parse(input, 20);
            let mut root = x.clone();
            root.sqrt(scale).unwrap();

            let rscale = root.scale();
            // root^2 <= x < (root + ulp)^2
            let squared = root.mul(&root, 2 * rscale);
            assert!(squared.cmp(&x) != Ordering::Greater, "sqrt({}) too large", input);

            let ulp = Number::from_bigint(BigInt::one(), rscale);
            let next = root.add(&ulp, 0);
            let next_squared = next.mul(&next, 2 * rscale);
            assert_eq!(next_squared.cmp(&x), Ordering::Greater, "sqrt({}) too small", input);
        }
    }
}
