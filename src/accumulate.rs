//! Adders for folding a sequence of [`FixedPoint`] increments into a raw significand.
//!
//! The sum of two `FixedPoint`s has a wider type than either operand, so they can't be summed
//! with [`Iterator::fold`] directly. Instead, these functions take an accumulator that is a plain
//! integer (the significand of the eventual result, at the same place as the increments) and
//! differ only in what happens when the sum doesn't fit:
//!
//! - [`significand_adder`]: nothing, it's the caller's problem (for any [`Accumulator`] type).
//! - [`int_adder`]: wraps around, as a `W1`-bit two's complement integer.
//! - [`exact_adder`]: returns [`Overflow`].
//! - [`clamp_adder`]: saturates at `±(2^(W1-1) - 1)`.
//!
//! ```
//! # use prec_ctrl::*;
//! let xs = [1.5, -0.25, 3.0, 2.75].map(FixedPoint::<16, -8>::from_f64);
//! let total = xs.iter().fold(0, |acc, &x| int_adder::<20, 16, -8>(acc, x));
//! let sum = FixedPoint::<20, -8>::from_significand(total);
//! assert_eq!(sum.to_f64(), 7.0);
//! ```
//!
//! Note that the result of `int_adder` may be `-2^(W1-1)`, which is not a valid significand;
//! [`FixedPoint::from_significand`] clamps it.

use crate::fixed::FixedPoint;
use crate::error::Overflow;
use crate::underlying::{Sealed, Significand, SupportedWidth, Width, clamp_i128, wrap};

/// A type that can accumulate significands with [`significand_adder`]: the primitive integers,
/// signed or unsigned (wrapping around on overflow), and floats (rounding to nearest).
pub trait Accumulator: Copy {
  /// `self + significand`.
  #[must_use]
  fn add_significand(self, significand: i64) -> Self;
}

macro_rules! impl_accumulator_int {
  ($($t:ty),*) => {$(
    impl Accumulator for $t {
      #[inline]
      fn add_significand(self, significand: i64) -> Self {
        self.wrapping_add(significand as $t)
      }
    }
  )*}
}

macro_rules! impl_accumulator_uint {
  ($($t:ty: $s:ty),*) => {$(
    impl Accumulator for $t {
      #[inline]
      fn add_significand(self, significand: i64) -> Self {
        self.wrapping_add_signed(significand as $s)
      }
    }
  )*}
}

macro_rules! impl_accumulator_float {
  ($($t:ty),*) => {$(
    impl Accumulator for $t {
      #[inline]
      fn add_significand(self, significand: i64) -> Self {
        self + significand as $t
      }
    }
  )*}
}

impl_accumulator_int!{i8, i16, i32, i64, i128, isize}
impl_accumulator_uint!{u8: i8, u16: i16, u32: i32, u64: i64, u128: i128, usize: isize}
impl_accumulator_float!{f32, f64}

/// Add the significand of `increment` to `accumulator`, with the plain `+` of `T` (which wraps
/// around for integers and rounds for floats). No range is enforced.
///
/// ```
/// # use prec_ctrl::*;
/// let x = FixedPoint::<8, -4>::from_f64(2.5);
/// assert_eq!(significand_adder(100_i64, x), 140);
/// assert_eq!(significand_adder(100.5_f64, x), 140.5);
/// assert_eq!(significand_adder(i8::MAX, x), i8::MIN + 39);
/// ```
#[inline]
pub fn significand_adder<
  T: Accumulator,
  const W: u32,
  const P: i32,
>(accumulator: T, increment: FixedPoint<W, P>) -> T
where Width<W>: SupportedWidth {
  accumulator.add_significand(increment.raw())
}

/// Add the significand of `increment` to `accumulator`, and wrap around as a `W1`-bit two's
/// complement integer. `W1` must be at least the width of `increment`.
///
/// ```
/// # use prec_ctrl::*;
/// let x = FixedPoint::<8, 0>::from_f64(50.0);
/// assert_eq!(int_adder::<12, 8, 0>(2000, x), -2046);
/// ```
///
/// ```compile_fail
/// # use prec_ctrl::*;
/// let x = FixedPoint::<8, 0>::from_f64(50.0);
/// let _ = int_adder::<6, 8, 0>(0, x);  // accumulator narrower than the increment
/// ```
#[inline]
pub fn int_adder<
  const W1: u32,
  const W2: u32,
  const P: i32,
>(accumulator: Significand<W1>, increment: FixedPoint<W2, P>) -> Significand<W1>
where Width<W1>: SupportedWidth, Width<W2>: SupportedWidth {
  const { assert!(W1 >= W2, "The accumulator must be at least as wide as the increment") };
  let sum = Into::<i64>::into(accumulator).wrapping_add(increment.raw());
  Sealed::of_i64(wrap(W1, sum))
}

/// Add the significand of `increment` to `accumulator`, exactly. If the sum doesn't fit in a
/// `W1`-bit two's complement integer, return [`Overflow`] instead. `W1` must be at least the width
/// of `increment`.
///
/// ```
/// # use prec_ctrl::*;
/// let x = FixedPoint::<8, 0>::from_f64(50.0);
/// assert_eq!(exact_adder::<12, 8, 0>(1990, x), Ok(2040));
/// assert_eq!(exact_adder::<12, 8, 0>(2000, x), Err(Overflow { width: 12 }));
/// ```
#[inline]
pub fn exact_adder<
  const W1: u32,
  const W2: u32,
  const P: i32,
>(accumulator: Significand<W1>, increment: FixedPoint<W2, P>) -> Result<Significand<W1>, Overflow>
where Width<W1>: SupportedWidth, Width<W2>: SupportedWidth {
  const { assert!(W1 >= W2, "The accumulator must be at least as wide as the increment") };
  let sum = Into::<i128>::into(accumulator) + i128::from(increment.raw());
  let bound = 1_i128 << (W1 - 1);
  if sum < -bound || sum >= bound {
    log::trace!("{sum} overflows a {W1}-bit accumulator");
    return Err(Overflow { width: W1 });
  }
  Ok(Sealed::of_i64(sum as i64))
}

/// Add the significand of `increment` to `accumulator`, and clamp the sum to
/// `±(2^(W1-1) - 1)`. `W1` must be at least the width of `increment`.
///
/// Once the running sum has been clamped, it's no longer the sum of the inputs, unless they all
/// have the same sign.
///
/// ```
/// # use prec_ctrl::*;
/// let x = FixedPoint::<8, 0>::from_f64(50.0);
/// assert_eq!(clamp_adder::<12, 8, 0>(2000, x), 2047);
/// assert_eq!(clamp_adder::<12, 8, 0>(-2040, -x), -2047);
/// ```
#[inline]
pub fn clamp_adder<
  const W1: u32,
  const W2: u32,
  const P: i32,
>(accumulator: Significand<W1>, increment: FixedPoint<W2, P>) -> Significand<W1>
where Width<W1>: SupportedWidth, Width<W2>: SupportedWidth {
  const { assert!(W1 >= W2, "The accumulator must be at least as wide as the increment") };
  let sum = Into::<i128>::into(accumulator) + i128::from(increment.raw());
  Sealed::of_i64(clamp_i128(W1, sum))
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn int_adder_wraps() {
    let x = FixedPoint::<8, 0>::from_f64(50.0);
    assert_eq!(int_adder::<12, 8, 0>(2000, x), -2046);
    assert_eq!(int_adder::<12, 8, 0>(-2000, -x), 2046);
    assert_eq!(int_adder::<12, 8, 0>(1990, x), 2040);
    assert_eq!(int_adder::<12, 8, 0>(1998, x), -2048);
    assert_eq!(int_adder::<32, 8, 0>(i32::MAX, x), i32::MIN + 49);
    assert_eq!(int_adder::<54, 54, 0>((1 << 53) - 1, FixedPoint::<54, 0>::max_value()), -2);
  }

  #[test]
  fn exact_adder_checks() {
    let x = FixedPoint::<8, 0>::from_f64(50.0);
    assert_eq!(exact_adder::<12, 8, 0>(2000, x), Err(Overflow { width: 12 }));
    assert_eq!(exact_adder::<12, 8, 0>(-2000, -x), Err(Overflow { width: 12 }));
    assert_eq!(exact_adder::<12, 8, 0>(1997, x), Ok(2047));
    assert_eq!(exact_adder::<12, 8, 0>(-1998, -x), Ok(-2048));
    assert_eq!(exact_adder::<32, 8, 0>(i32::MAX, x), Err(Overflow { width: 32 }));
  }

  #[test]
  fn clamp_adder_saturates() {
    let x = FixedPoint::<8, 0>::from_f64(50.0);
    assert_eq!(clamp_adder::<12, 8, 0>(2000, x), 2047);
    assert_eq!(clamp_adder::<12, 8, 0>(-2000, -x), -2047);
    assert_eq!(clamp_adder::<12, 8, 0>(1990, x), 2040);
    assert_eq!(clamp_adder::<32, 8, 0>(i32::MAX, x), i32::MAX);
  }

  #[test]
  fn significand_adder_types() {
    let x = FixedPoint::<16, -8>::from_f64(0.5);
    assert_eq!(significand_adder(32700_i16, FixedPoint::<8, 0>::from_significand(69)), -32767);
    assert_eq!(significand_adder(0_i128, x), 128);
    assert_eq!(significand_adder(0.25_f32, x), 128.25);
    assert_eq!(significand_adder(-1.0_f64, -x), -129.0);
  }

  #[test]
  fn significand_adder_unsigned() {
    let x = FixedPoint::<16, -8>::from_f64(0.5);
    assert_eq!(significand_adder(200_u8, x), 72);
    assert_eq!(significand_adder(200_u8, -x), 72);
    assert_eq!(significand_adder(1000_u16, -x), 872);
    assert_eq!(significand_adder(0_u32, -x), u32::MAX - 127);
    assert_eq!(significand_adder(u64::MAX, x), 127);
    assert_eq!(significand_adder(5_u128, -x), 5_u128.wrapping_sub(128));
    assert_eq!(significand_adder(300_usize, -x), 172);
  }

  #[test]
  fn fold() {
    let xs = [7.5, 7.5, 7.5, -1.0].map(FixedPoint::<8, -4>::from_f64);
    let wrapped = xs.iter().fold(0, |acc, &x| int_adder::<9, 8, -4>(acc, x));
    assert_eq!(wrapped, 360 - 512 - 16);
    let clamped = xs.iter().fold(0, |acc, &x| clamp_adder::<9, 8, -4>(acc, x));
    assert_eq!(clamped, 255 - 16);
    let exact = xs.iter().try_fold(0, |acc, &x| exact_adder::<9, 8, -4>(acc, x));
    assert_eq!(exact, Err(Overflow { width: 9 }));
    let exact = xs.iter().try_fold(0, |acc, &x| exact_adder::<12, 8, -4>(acc, x));
    assert_eq!(exact, Ok(344));
  }

  /// The same dot product, computed once with `FixedPoint` and an integer accumulator, and once
  /// with `f64` and [`limit_precision`](crate::limit_precision), gives the same result as long
  /// as every intermediate `f64` is exact.
  #[cfg(feature = "std")]
  #[test]
  fn dot_product_matches_f64() {
    use crate::limit_precision;
    let n: Vec<f64> = (0 .. 64).map(|i| f64::from(i * 1000 - 30000) + 0.3).collect();
    let r: Vec<f64> = (0 .. 64).map(|i| f64::from(i - 32) * 0.001).collect();
    let fixed = n.iter().zip(&r).fold(0_i64, |acc, (&a, &b)| {
      let a = FixedPoint::<21, 0>::from_f64(a);
      let b = FixedPoint::<12, -16>::from_f64(b);
      let product: FixedPoint<32, -16> = a.mul(b);
      significand_adder(acc, product)
    });
    let float = n.iter().zip(&r).fold(0.0, |acc, (&a, &b)| {
      acc + limit_precision(a, 21, 0) * limit_precision(b, 12, -16)
    });
    assert_eq!(fixed as f64 * 2.0_f64.powi(-16), float);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn adders_vs_i128(
      accumulator in -(1_i64 << 29) .. 1 << 29,
      increment in FixedPoint::<30, -3>::cases_proptest(),
    ) {
      let accumulator = accumulator as i32;
      let sum = i128::from(accumulator) + i128::from(increment.raw());
      let bound = 1_i128 << 29;
      let fits = -bound <= sum && sum < bound;
      let wrapped = int_adder::<30, 30, -3>(accumulator, increment);
      let clamped = clamp_adder::<30, 30, -3>(accumulator, increment);
      let exact = exact_adder::<30, 30, -3>(accumulator, increment);
      assert_eq!(i128::from(wrapped).rem_euclid(1 << 30), sum.rem_euclid(1 << 30));
      assert!(-bound <= i128::from(wrapped) && i128::from(wrapped) < bound);
      assert_eq!(i128::from(clamped), sum.clamp(-bound + 1, bound - 1));
      assert_eq!(exact.ok().map(i128::from), fits.then_some(sum));
    }

    #[test]
    fn exact_fold_is_exact(xs in proptest::collection::vec(FixedPoint::<20, -8>::cases_proptest(), 0 .. 100)) {
      let exact = xs.iter().try_fold(0, |acc, &x| exact_adder::<30, 20, -8>(acc, x));
      let sum: i64 = xs.iter().map(|x| x.raw()).sum();
      assert_eq!(exact.map(i64::from), Ok(sum));
    }
  }
}
