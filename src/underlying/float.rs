//! Bit-level operations on `f64`, done in integer arithmetic so that they are exact and do not
//! depend on the floating-point environment.

use crate::rounding_mode::{Fraction, RoundingMode};

const MANTISSA_DIGITS_EXPLICIT: u32 = f64::MANTISSA_DIGITS - 1;
const EXP_BIAS: i32 = f64::MAX_EXP - 1;
const EXP_FIELD_MAX: i32 = 0x7ff;

/// Magnitudes at or above this are saturated by [`nearby_int`]. It's far above the biggest
/// significand, so clamping the result afterwards is always correct.
pub(crate) const SATURATED: i64 = 1 << 62;

/// `2^exp` as an `f64`, for `exp` in the normal range `-1022 ..= 1023`.
#[inline]
pub(crate) const fn pow2(exp: i32) -> f64 {
  debug_assert!(exp > -EXP_BIAS && exp <= EXP_BIAS);
  f64::from_bits(((exp + EXP_BIAS) as u64) << MANTISSA_DIGITS_EXPLICIT)
}

/// Split the magnitude `mantissa × 2^-shift` into its integral part and a classification of its
/// fractional part. `shift` must be at least 1.
#[inline]
fn split(mantissa: u64, shift: u32) -> (u64, Fraction) {
  debug_assert!(shift >= 1);
  // `mantissa` has at most 53 bits, so for these shifts it's all fraction, and less than half.
  if shift >= u64::BITS {
    let fraction = if mantissa == 0 { Fraction::Zero } else { Fraction::BelowHalf };
    return (0, fraction)
  }
  let integral = mantissa >> shift;
  let rest = mantissa & ((1 << shift) - 1);
  let half = 1 << (shift - 1);
  let fraction =
    if rest == 0 { Fraction::Zero }
    else if rest < half { Fraction::BelowHalf }
    else if rest == half { Fraction::Half }
    else { Fraction::AboveHalf };
  (integral, fraction)
}

/// Round `x × 2^exp` to an integer according to `mode`, exactly.
///
/// Results whose magnitude is at least [`SATURATED`] (including infinities) are saturated to
/// `±SATURATED`. A NaN gives 0.
pub(crate) fn nearby_int(x: f64, exp: i32, mode: RoundingMode) -> i64 {
  // Extract sign, mantissa, and exponent.
  let bits = x.to_bits();
  let negative = bits >> 63 != 0;
  let exp_field = ((bits >> MANTISSA_DIGITS_EXPLICIT) as i32) & EXP_FIELD_MAX;
  let mantissa_field = bits & ((1 << MANTISSA_DIGITS_EXPLICIT) - 1);

  if exp_field == EXP_FIELD_MAX {
    if mantissa_field != 0 {
      log::trace!("NaN converted to a zero significand");
      return 0
    }
    return if negative { -SATURATED } else { SATURATED }
  }

  // An exponent field of 0 marks a subnormal number. Normals have an implicit unit (`1.xxx`) and
  // a bias of 1 less in the exponent; subnormals don't. Either way, `|x| = mantissa × 2^exponent`.
  let (mantissa, exponent) =
    if exp_field == 0 {
      (mantissa_field, 1 - EXP_BIAS - MANTISSA_DIGITS_EXPLICIT as i32)
    } else {
      (mantissa_field | 1 << MANTISSA_DIGITS_EXPLICIT, exp_field - EXP_BIAS - MANTISSA_DIGITS_EXPLICIT as i32)
    };
  let exponent = exponent + exp;

  let magnitude =
    if mantissa == 0 {
      0
    } else if exponent >= 0 {
      // `mantissa < 2^53`, so shifting by up to 9 stays below `2^62`.
      if exponent > (SATURATED.ilog2() - f64::MANTISSA_DIGITS) as i32 {
        return if negative { -SATURATED } else { SATURATED }
      }
      mantissa << exponent
    } else {
      let (integral, fraction) = split(mantissa, exponent.unsigned_abs());
      let odd = integral & 1 == 1;
      integral + u64::from(mode.increments_magnitude(negative, odd, fraction))
    };

  let magnitude = magnitude as i64;
  if negative { -magnitude } else { magnitude }
}
