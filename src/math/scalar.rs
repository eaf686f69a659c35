use std::ops::Neg;

use nalgebra::{ClosedAddAssign, ClosedDivAssign, ClosedMulAssign, ClosedSubAssign};
use num_traits::{One, Zero};
use tracing::debug;

use crate::error::{ArgumentError, Result};

/// Numeric coordinate type accepted by the kernel.
///
/// Implemented for the signed integer primitives and for `f32` / `f64`.
/// Integer implementations follow normal integer arithmetic: division
/// truncates, and the transcendental helpers (`sqrt`, `acos`,
/// `to_degrees`) are evaluated in `f64` and truncated toward zero.
///
/// Integer coordinates must keep their differences and squared edge lengths
/// within the type's range. Higher-degree intermediates (area, circle
/// centers, barycentric solves, sums in the statistics) are checked:
/// `area` falls back to `f64` evaluation, the fallible operations return
/// [`ArgumentError::Overflow`].
pub trait Scalar:
    nalgebra::Scalar
    + Copy
    + PartialOrd
    + Zero
    + One
    + ClosedAddAssign
    + ClosedSubAssign
    + ClosedMulAssign
    + ClosedDivAssign
    + Neg<Output = Self>
{
    /// Converts from `f64`, truncating toward zero for integer types.
    fn from_f64(value: f64) -> Self;

    /// Converts to `f64`.
    fn to_f64(self) -> f64;

    /// Converts a count, saturating at the type's maximum.
    fn from_usize(count: usize) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Arc cosine, in radians.
    fn acos(self) -> Self;

    /// Converts a radian value to degrees.
    fn to_degrees(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// `self + rhs`, `None` on integer overflow. Always `Some` for floats.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, `None` on integer overflow. Always `Some` for floats.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, `None` on integer overflow. Always `Some` for floats.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// `1 + 1`, convenient for halving and averaging.
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

/// Unwraps a checked result, or reports that `operation` overflowed.
pub(crate) fn checked<T>(value: Option<T>, operation: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        debug!(operation, "scalar overflow");
        ArgumentError::Overflow(operation).into()
    })
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            #[allow(clippy::cast_precision_loss)]
            fn from_usize(count: usize) -> Self {
                count as $t
            }

            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            fn acos(self) -> Self {
                <$t>::acos(self)
            }

            fn to_degrees(self) -> Self {
                <$t>::to_degrees(self)
            }

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }
    )*};
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_usize(count: usize) -> Self {
                <$t>::try_from(count).unwrap_or(<$t>::MAX)
            }

            fn sqrt(self) -> Self {
                Self::from_f64(self.to_f64().sqrt())
            }

            fn acos(self) -> Self {
                Self::from_f64(self.to_f64().acos())
            }

            fn to_degrees(self) -> Self {
                Self::from_f64(self.to_f64().to_degrees())
            }

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$t>::checked_mul(self, rhs)
            }
        }
    )*};
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i8, i16, i32, i64, isize);
