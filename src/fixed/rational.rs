use super::*;
use crate::RoundingMode;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{PowerOf2, RoundToMultiple};
use malachite::base::rounding_modes::RoundingMode as RationalRounding;

impl<
  const W: u32,
  const P: i32,
> FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// The exact value of `self` as a [Rational], `significand × 2^P`.
  ///
  /// This is what we check every arithmetic operation against.
  pub(crate) fn to_rational(self) -> Rational {
    Rational::from(self.raw()) * Rational::power_of_2(i64::from(P))
  }
}

/// Round `value` to an integer in `mode`. This is a **super-explicit** rendition of each rounding
/// mode, since it's what the optimised integer kernels are checked against.
pub(crate) fn round_rational(value: Rational, mode: RoundingMode) -> Rational {
  let one = Rational::from(1);
  let floor = value.clone().round_to_multiple(one.clone(), RationalRounding::Floor).0;
  if floor == value {
    return floor
  }
  let ceil = floor.clone() + one;
  let negative = value < Rational::from(0);
  let (toward_zero, away_from_zero) =
    if negative { (ceil.clone(), floor.clone()) } else { (floor.clone(), ceil.clone()) };

  let fraction = value.clone() - floor.clone();
  let half = Rational::from_signeds(1, 2);
  if mode == RoundingMode::TowardPositive { return ceil }
  if mode == RoundingMode::TowardNegative { return floor }
  if mode == RoundingMode::TowardZero { return toward_zero }
  if fraction < half { return floor }
  if fraction > half { return ceil }

  // It's a tie.
  match mode {
    RoundingMode::NearestTiesToEven => value.round_to_multiple(Rational::from(1), RationalRounding::Nearest).0,
    RoundingMode::NearestTiesAwayFromZero => away_from_zero,
    RoundingMode::NearestTiesTowardZero => toward_zero,
    RoundingMode::NearestTiesUp => ceil,
    RoundingMode::NearestTiesDown => floor,
    RoundingMode::TowardPositive | RoundingMode::TowardNegative | RoundingMode::TowardZero => unreachable!(),
  }
}

/// Round `significand × 2^-shift` to an integer in `mode`, via [`round_rational`].
pub(crate) fn round_significand_exact(significand: i64, shift: u32, mode: RoundingMode) -> i64 {
  let value = Rational::from(significand) * Rational::power_of_2(-i64::from(shift));
  let rounded = round_rational(value, mode);
  i64::try_from(&rounded).expect("Rounded value out of range")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_rational() {
    assert_eq!(FixedPoint::<8, -4>::from_significand(0x31).to_rational(), Rational::from_signeds(49, 16));
    assert_eq!(FixedPoint::<8, 3>::from_significand(-5).to_rational(), Rational::from(-40));
    assert_eq!(FixedPoint::<8, 3>::ZERO.to_rational(), Rational::from(0));
  }

  #[test]
  fn round_rational_ties() {
    let tie = || Rational::from_signeds(-5, 2);
    assert_eq!(round_rational(tie(), RoundingMode::NearestTiesToEven), Rational::from(-2));
    assert_eq!(round_rational(tie(), RoundingMode::NearestTiesAwayFromZero), Rational::from(-3));
    assert_eq!(round_rational(tie(), RoundingMode::NearestTiesTowardZero), Rational::from(-2));
    assert_eq!(round_rational(tie(), RoundingMode::NearestTiesUp), Rational::from(-2));
    assert_eq!(round_rational(tie(), RoundingMode::NearestTiesDown), Rational::from(-3));
    assert_eq!(round_rational(Rational::from_signeds(7, 2), RoundingMode::NearestTiesToEven), Rational::from(4));
  }

  #[test]
  fn round_significand_exact_directed() {
    assert_eq!(round_significand_exact(-5, 1, RoundingMode::TowardPositive), -2);
    assert_eq!(round_significand_exact(-5, 1, RoundingMode::TowardNegative), -3);
    assert_eq!(round_significand_exact(-5, 1, RoundingMode::TowardZero), -2);
    assert_eq!(round_significand_exact(1, 100, RoundingMode::TowardPositive), 1);
    assert_eq!(round_significand_exact(-4, 2, RoundingMode::TowardPositive), -1);
  }
}
