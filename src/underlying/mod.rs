//! This module contains the significand domain: which machine integer holds the significand of a
//! [`FixedPoint`](crate::FixedPoint) of a given width, and the handful of integer operations the
//! rest of the crate needs on it. These are hidden from the end-user, which only sees the sealed
//! [`Int`] trait (implemented for `i32` and `i64`) and the [`SupportedWidth`] mapping.

/// The trait for the underlying machine integer types that can hold a significand (only
/// satisfied by `i32` and `i64`).
///
/// This is a *sealed* type.
pub trait Int: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug + core::fmt::Display + core::fmt::Binary +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  Into<i64> + Into<i128>
{
  /// The unsigned counterpart, used to print the raw bit pattern.
  type Unsigned: core::fmt::Binary + Copy;

  const ZERO: Self;
  const BITS: u32;

  /// Truncate an `i64` into `Self`, keeping the lowest [`Self::BITS`] bits. Callers guarantee
  /// the value fits, this is checked in debug builds only.
  fn of_i64(x: i64) -> Self;

  /// Set all bits more significant than `n` to 0.
  ///
  /// ```ignore
  /// assert_eq!((-1_i32).mask_lsb(4), 0xf)
  /// ```
  fn mask_lsb(self, n: u32) -> Self::Unsigned;
}

/// A marker type standing for the bit width `W`; see [`SupportedWidth`].
pub struct Width<const W: u32>;

/// Maps a [`Width`] to the storage type of a significand of that width: `i32` for widths up to
/// 32 bits, `i64` above that.
///
/// It is implemented exactly for [`Width<2>`](Width) through [`Width<54>`](Width), so naming a
/// fixed-point type of any other width is a compile-time error:
///
/// ```compile_fail
/// use prec_ctrl::FixedPoint;
/// let _ = FixedPoint::<55, 0>::default();
/// ```
///
/// ```compile_fail
/// use prec_ctrl::FixedPoint;
/// let _ = FixedPoint::<1, 0>::default();
/// ```
pub trait SupportedWidth {
  type Significand: Int;
}

/// The signed integer type holding a significand of `W` bits.
pub type Significand<const W: u32> = <Width<W> as SupportedWidth>::Significand;

/// The fewest bits a significand can have: the sign bit and one more.
pub const MIN_WIDTH: u32 = 2;

/// The most bits a significand can have: the 53 significant digits of an `f64` plus the sign, so
/// that every value converts to `f64` exactly.
pub const MAX_WIDTH: u32 = f64::MANTISSA_DIGITS + 1;

/// The lowest place an LSB can have. `f64::MIN_EXP - 1` is the exponent of the smallest normal
/// `f64`.
pub const MIN_LSB_PLACE: i32 = f64::MIN_EXP - 1;

/// The highest place (exclusive) the MSB can reach, so that `WIDTH + PLACE ≤ MAX_MSB_PLACE`.
pub const MAX_MSB_PLACE: i32 = f64::MAX_EXP;

/// The biggest significand of a `width`-bit type, `2^(width-1) - 1`. The most negative two's
/// complement value is never used, so the smallest significand is `-max_significand(width)`.
#[inline]
pub const fn max_significand(width: u32) -> i64 {
  debug_assert!(width >= 1 && width <= 63);
  (1_i64 << (width - 1)) - 1
}

/// Clamp `value` into `[-max_significand(width), max_significand(width)]`.
#[inline]
pub const fn clamp_i128(width: u32, value: i128) -> i64 {
  let max = max_significand(width);
  if value > max as i128 {
    max
  } else if value < -(max as i128) {
    -max
  } else {
    value as i64
  }
}

/// Sign-extend the lowest `width` bits of `x`, i.e. wrap `x` around as a `width`-bit two's
/// complement integer.
#[inline]
pub const fn wrap(width: u32, x: i64) -> i64 {
  debug_assert!(width >= 1 && width <= 64);
  let junk = 64 - width;
  (x << junk) >> junk
}

mod int;
mod width;
mod float;

pub(crate) use float::{nearby_int, pow2};
