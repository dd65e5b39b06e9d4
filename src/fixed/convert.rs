use super::*;
use crate::RoundingMode;
use crate::limit::to_significand_with;
use crate::rounding_mode::rounding_mode;

/// Used to do value-to-value conversions that may *round* the input, according to the ambient
/// [rounding mode](crate::rounding_mode()). It is the reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`], but unlike that which is the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_: converting a float to a [`FixedPoint`] rounds to
/// the nearest LSB (in the sense of the ambient rounding mode) and saturates at the biggest
/// magnitude, and a NaN becomes 0.
///
/// As for [`From`], prefer implementing [`RoundFrom`] over [`RoundInto`], and prefer using
/// [`RoundInto`] when specifying trait bounds on a generic function. There's also a blanket
/// implementation of `RoundFrom<T> for T`, and `RoundFrom<T> for U` implies `RoundInto<U> for T`.
///
/// # Examples
///
/// ```
/// # use prec_ctrl::*;
/// assert_eq!(FixedPoint::<8, -4>::round_from(3.0625_f64).significand(), 0x31);
/// assert_eq!(FixedPoint::<8, -4>::round_from(3.03_f32).significand(), 0x30);
/// assert_eq!(FixedPoint::<8, -4>::round_from(1e9_f64), FixedPoint::<8, -4>::max_value());
/// assert!(FixedPoint::<8, -4>::round_from(f64::NAN).is_zero());
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding according to the ambient rounding mode
  /// if necessary.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundFrom`]; see there for details.
///
/// # Examples
///
/// ```
/// # use prec_ctrl::*;
/// let x: FixedPoint<8, -4> = 2.5_f64.round_into();
/// assert_eq!(x.to_f64(), 2.5);
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding according to the
  /// ambient rounding mode if necessary.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

impl<
  const W: u32,
  const P: i32,
> FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// Convert an `f64`, rounding to a multiple of `2^P` according to the ambient
  /// [rounding mode](crate::rounding_mode()), and saturating at
  /// [`±max_value`](Self::max_value). A NaN converts to 0.
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// assert_eq!(FixedPoint::<8, -4>::from_f64(3.0625).significand(), 0x31);
  /// assert_eq!(FixedPoint::<8, -4>::from_f64(3.03125).significand(), 0x30);  // tie to even
  /// assert_eq!(FixedPoint::<8, 0>::from_f64(-1e100).significand(), -127);
  /// ```
  #[inline]
  pub fn from_f64(value: f64) -> Self {
    Self::from_f64_with(value, rounding_mode())
  }

  /// As [`Self::from_f64`], but rounding according to `mode` instead of the ambient rounding mode.
  #[inline]
  pub fn from_f64_with(value: f64, mode: RoundingMode) -> Self {
    Self { significand: to_significand_with::<W, P>(value, mode) }
  }

  /// Assign an `f64` to `self`, as in [`Self::from_f64`].
  #[inline]
  pub fn set_f64(&mut self, value: f64) -> &mut Self {
    *self = Self::from_f64(value);
    self
  }
}

impl<
  const W: u32,
  const P: i32,
> RoundFrom<f64> for FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// As [`FixedPoint::from_f64`].
  #[inline]
  fn round_from(value: f64) -> Self {
    Self::from_f64(value)
  }
}

impl<
  const W: u32,
  const P: i32,
> RoundFrom<f32> for FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// As [`FixedPoint::from_f64`]; every `f32` is exactly an `f64`.
  #[inline]
  fn round_from(value: f32) -> Self {
    Self::from_f64(value.into())
  }
}

impl<
  const W: u32,
  const P: i32,
> From<FixedPoint<W, P>> for f64 where Width<W>: SupportedWidth {
  /// As [`FixedPoint::to_f64`]; this is always exact.
  #[inline]
  fn from(value: FixedPoint<W, P>) -> Self {
    value.to_f64()
  }
}

impl<
  const W: u32,
  const P: i32,
> From<FixedPoint<W, P>> for bool where Width<W>: SupportedWidth {
  /// `true` iff `value` is non-zero.
  #[inline]
  fn from(value: FixedPoint<W, P>) -> Self {
    !value.is_zero()
  }
}

impl<
  const W: u32,
  const P: i32,
> RoundFrom<FixedPoint<W, P>> for f32 where Width<W>: SupportedWidth {
  /// Round to the nearest `f32` (ties to even), via [`FixedPoint::to_f64`]. Values beyond the
  /// range of `f32` become infinities. The conversion to `f64` is exact, so this only rounds once.
  #[inline]
  fn round_from(value: FixedPoint<W, P>) -> Self {
    value.to_f64() as f32
  }
}
