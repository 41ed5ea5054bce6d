//! core::integral
//!
//! The `Integral` capability and the reducer bounded by it.
//!
//! # Design
//!
//! [`Integral`] is implemented for the fixed-width integer primitives only.
//! It is sealed: no type outside this module can implement it, so the set of
//! types accepted by [`sum`] is closed.
//!
//! Floating-point and text types are rejected at compile time:
//!
//! ```compile_fail
//! use evensum::core::integral::sum;
//!
//! let total = sum(&[1.5_f64, 2.5]);
//! ```
//!
//! ```compile_fail
//! use evensum::core::integral::sum;
//!
//! let total = sum(&[String::from("1"), String::from("2")]);
//! ```
//!
//! Any integer width is accepted:
//!
//! ```
//! use evensum::core::integral::sum;
//!
//! assert_eq!(sum(&[4_i32, 16, 36]), 56);
//! assert_eq!(sum(&[250_u8, 5]), 255);
//! assert_eq!(sum::<i64>(&[]), 0);
//! ```

use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer type.
///
/// Arithmetic exposed here wraps on overflow in every build profile.
pub trait Integral: sealed::Sealed + Copy + Eq + Ord + Debug + Display {
    /// The additive identity.
    const ZERO: Self;

    /// `self + rhs`, wrapping at the type's bounds.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping at the type's bounds.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// True when `self % 2 == 0`.
    fn is_even(self) -> bool;
}

macro_rules! impl_integral {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integral for $t {
                const ZERO: Self = 0;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn is_even(self) -> bool {
                    self % 2 == 0
                }
            }
        )*
    };
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Sum a sequence of integers.
///
/// Accumulates left-to-right starting from [`Integral::ZERO`]. An empty
/// sequence yields zero.
pub fn sum<T: Integral>(numbers: &[T]) -> T {
    numbers
        .iter()
        .fold(T::ZERO, |total, &n| total.wrapping_add(n))
}
