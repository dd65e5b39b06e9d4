//! Clamping and converting raw significands, plus [`limit_precision`], the same rounding and
//! clamping done on plain `f64`s.
//!
//! In this crate a binary place `n` has the weight `2^n`. For example, for width 8 and place -3:
//!
//! ```text
//!   Place    4   3   2   1   0  -1  -2  -3
//!   Weight  16   8   4   2   1  1/2 1/4 1/8
//!          +---+---+---+---+---+---+---+---+
//!          | S |   |   |   |   |   |   |   |
//!          +---+---+---+---+---+---+---+---+
//!                              ^ binary point
//!
//!   Maximum: +15.875, minimum: -15.875, resolution: 0.125
//! ```

use crate::RoundingMode;
use crate::fixed::Format;
use crate::rounding_mode::rounding_mode;
use crate::underlying::{Sealed, Significand, SupportedWidth, Width, clamp_i128, nearby_int};
#[cfg(feature = "std")]
use crate::underlying::{max_significand, pow2};

/// Clamp `value` into the range of a `W`-bit significand, `±(2^(W-1) - 1)`.
///
/// ```
/// # use prec_ctrl::clamp;
/// assert_eq!(clamp::<8>(127), 127);
/// assert_eq!(clamp::<8>(128), 127);
/// assert_eq!(clamp::<8>(-128), -127);
/// assert_eq!(clamp::<40>(-1_i64 << 45), -(1 << 39) + 1);
/// ```
#[inline]
pub fn clamp<const W: u32>(value: impl Into<i128>) -> Significand<W>
where Width<W>: SupportedWidth {
  Sealed::of_i64(clamp_i128(W, value.into()))
}

/// Convert `value` to the significand of a `FixedPoint<W, P>`: scale by `2^-P`, round to an
/// integer according to the ambient [rounding mode](crate::rounding_mode()), and
/// [clamp](clamp). A NaN converts to 0.
///
/// ```
/// # use prec_ctrl::to_significand;
/// assert_eq!(to_significand::<8, -4>(3.0625), 0x31);
/// assert_eq!(to_significand::<8, 0>(-1e10), -127);
/// ```
#[inline]
pub fn to_significand<const W: u32, const P: i32>(value: f64) -> Significand<W>
where Width<W>: SupportedWidth {
  to_significand_with::<W, P>(value, rounding_mode())
}

/// As [`to_significand`], but rounding according to `mode` instead of the ambient rounding mode.
pub fn to_significand_with<const W: u32, const P: i32>(value: f64, mode: RoundingMode) -> Significand<W>
where Width<W>: SupportedWidth {
  const {
    assert!(
      Format::new(W, P).is_valid(),
      "The place of a significand must be within the range of normal f64",
    )
  };
  let rounded = nearby_int(value, -P, mode);
  let clamped = clamp_i128(W, rounded.into());
  if clamped != rounded {
    log::trace!("{value} saturated to significand {clamped} of {}", Format::new(W, P));
  }
  Sealed::of_i64(clamped)
}

/// Limit the precision of `value` to `width` bits at place `place`, staying in `f64`: round to a
/// multiple of `2^place` according to the ambient [rounding mode](crate::rounding_mode()), then
/// clamp to `±(2^(width-1) - 1) × 2^place`.
///
/// This is what [`FixedPoint::from_f64`](crate::FixedPoint::from_f64) followed by
/// [`to_f64`](crate::FixedPoint::to_f64) computes, but on the `f64` directly. It lets one
/// simulate a fixed-point computation with plain floating point, as long as every intermediate
/// result is exact in `f64`; unlike `FixedPoint`, a NaN stays NaN.
///
/// ```
/// # use prec_ctrl::limit_precision;
/// assert_eq!(limit_precision(3.1, 8, -3), 3.125);
/// assert_eq!(limit_precision(100.0, 8, -3), 15.875);
/// assert_eq!(limit_precision(-100.0, 8, -3), -15.875);
/// ```
///
/// # Panics
///
/// In debug builds, if `(width, place)` is not a valid [`Format`].
#[cfg(feature = "std")]
pub fn limit_precision(value: f64, width: u32, place: i32) -> f64 {
  debug_assert!(
    Format::new(width, place).is_valid(),
    "{} is not a valid fixed-point format", Format::new(width, place),
  );
  let mut scaled = value * pow2(-place);
  if value != 0.0 && scaled.abs() < f64::MIN_POSITIVE {
    // The scaling underflowed (and may have rounded to 0). The exact scaled value is still far
    // below 1/2, so any tiny value of the same sign rounds to the same integer in every mode.
    scaled = f64::MIN_POSITIVE.copysign(value);
  }
  let rounded = rounding_mode().round_f64(scaled);
  let max = max_significand(width) as f64;
  let clamped =
    if rounded > max { max }
    else if rounded < -max { -max }
    else { rounded };
  clamped * pow2(place)
}
