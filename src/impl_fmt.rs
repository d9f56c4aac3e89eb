//! Implementation of std::fmt traits
//!
//! `Display` produces the canonical `bc` base-10 form: the significand's
//! digits with a point inserted `scale` places from the right, zero-padded
//! on the left of the fraction when the significand is short, and no
//! leading zero for values below one (`.5`, not `0.5`).

use crate::*;

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }

        let digits = self.significand().magnitude().to_str_radix(10);
        let scale = self.scale() as usize;

        if digits.len() >= scale {
            let split = digits.len() - scale;
            f.write_str(&digits[..split])?;
            if scale > 0 {
                f.write_str(".")?;
                f.write_str(&digits[split..])?;
            }
        } else {
            f.write_str(".")?;
            for _ in digits.len()..scale {
                f.write_str("0")?;
            }
            f.write_str(&digits)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Number(scale={}, value={})",
            self.scale(),
            self.significand()
        )
    }
}
