//! Conversions between Numbers and machine integers

use crate::*;
use crate::arithmetic::tdiv_pow10;

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            #[inline]
            fn from(n: $t) -> Number {
                Number::from_bigint(BigInt::from(n), 0)
            }
        }
    )*};
}

impl_from_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Number {
    /// Integer part of this number as an `i64`.
    ///
    /// The fraction is truncated toward zero first. A value that does
    /// not fit returns 0; callers distinguish a genuine zero by testing
    /// [`Number::is_zero`] on the input. `i64::MIN` is also reported as
    /// 0 so that negating the result can never overflow.
    pub fn to_i64(&self) -> i64 {
        let int = if self.scale() > 0 {
            tdiv_pow10(self.significand().clone(), self.scale())
        } else {
            self.significand().clone()
        };
        match int.to_i64() {
            None | Some(i64::MIN) => 0,
            Some(v) => v,
        }
    }
}
