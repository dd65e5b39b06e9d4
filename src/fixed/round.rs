use super::*;
use crate::RoundingMode;

/// Round `significand × 2^-shift` to an integer, by adding a bias that depends on `mode` and then
/// shifting right arithmetically (i.e. flooring).
///
/// `|significand|` must be below `2^54` and `shift` at least 1.
pub(crate) fn round_significand(significand: i64, shift: u32, mode: RoundingMode) -> i64 {
  debug_assert!(shift >= 1);
  debug_assert!(significand.unsigned_abs() < 1 << 54);
  // If every bit is more than 2 places below the target LSB, the magnitude is below a quarter, so
  // all that matters is whether it's 0 and its sign.
  let (s, n) = if shift > 56 { (significand.signum(), 56) } else { (significand, shift) };
  let one = 1_i64 << n;
  let half = one >> 1;
  let biased = match mode {
    RoundingMode::TowardNegative => s,
    RoundingMode::TowardPositive => s + (one - 1),
    RoundingMode::TowardZero => if s >= 0 { s } else { s + (one - 1) },
    RoundingMode::NearestTiesToEven => s + (half - 1) + ((s >> n) & 1),
    RoundingMode::NearestTiesAwayFromZero => s + half - i64::from(s < 0),
    RoundingMode::NearestTiesTowardZero => s + half - i64::from(s >= 0),
    RoundingMode::NearestTiesUp => s + half,
    RoundingMode::NearestTiesDown => s + (half - 1),
  };
  biased >> n
}

/// Helper macro for the rounding functions, which only differ in the mode and in whether they can
/// carry into an extra bit.
macro_rules! mk_round {
  ($(#[$doc:meta])* $name:ident, $mode:ident, $extra:literal) => {
    $(#[$doc])*
    #[inline]
    pub fn $name<const WR: u32, const PR: i32>(self) -> FixedPoint<WR, PR>
    where Width<WR>: SupportedWidth {
      self.round_to::<$extra, WR, PR>(RoundingMode::$mode)
    }
  }
}

impl<
  const W: u32,
  const P: i32,
> FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// Round to a multiple of `2^PR`. The result's format must be [`Format::rounded`] of `Self`'s,
  /// which means `PR == P` if `P` is already at or above the requested place (`self` is then
  /// returned as it is).
  #[inline]
  fn round_to<const EXTRA: u32, const WR: u32, const PR: i32>(self, mode: RoundingMode) -> FixedPoint<WR, PR>
  where Width<WR>: SupportedWidth {
    const {
      assert!(
        Format::new(W, P).rounded(EXTRA, PR).same_as(Format::new(WR, PR)),
        "The format of a rounded value must be Format::rounded of the source format, at the \
        target place (or the source place, if it's already coarser)",
      )
    };
    if PR == P {
      FixedPoint::from_raw(self.raw())
    } else {
      FixedPoint::from_raw(round_significand(self.raw(), (PR - P) as u32, mode))
    }
  }

  mk_round!{
    /// Round toward +∞, to a multiple of `2^PR`. See [`Format::rounded`] for the format of the
    /// result, which has room for the carry.
    ///
    /// ```
    /// # use prec_ctrl::FixedPoint;
    /// let x = FixedPoint::<8, -4>::from_f64(-2.5);
    /// let y: FixedPoint<5, 0> = x.ceil();
    /// assert_eq!(y.to_f64(), -2.0);
    /// let z: FixedPoint<5, 0> = FixedPoint::<8, -4>::max_value().ceil();
    /// assert_eq!(z.to_f64(), 8.0);
    /// ```
    ceil, TowardPositive, 1
  }

  mk_round!{
    /// Round toward −∞, to a multiple of `2^PR`.
    ///
    /// ```
    /// # use prec_ctrl::FixedPoint;
    /// let x = FixedPoint::<8, -4>::from_f64(-2.25);
    /// let y: FixedPoint<5, 0> = x.floor();
    /// assert_eq!(y.to_f64(), -3.0);
    /// ```
    floor, TowardNegative, 1
  }

  mk_round!{
    /// Round toward 0, to a multiple of `2^PR`. This never increases the magnitude, so unlike the
    /// other rounding functions, the result needs no extra bit.
    ///
    /// ```
    /// # use prec_ctrl::FixedPoint;
    /// let x = FixedPoint::<8, -4>::from_f64(-2.75);
    /// let y: FixedPoint<4, 0> = x.trunc();
    /// assert_eq!(y.to_f64(), -2.0);
    /// ```
    trunc, TowardZero, 0
  }

  mk_round!{
    /// Round to the nearest multiple of `2^PR`; on a tie, to the even one.
    ///
    /// ```
    /// # use prec_ctrl::FixedPoint;
    /// let x = FixedPoint::<8, -4>::from_f64(2.5);
    /// let y: FixedPoint<5, 0> = x.round_half_to_even();
    /// assert_eq!(y.to_f64(), 2.0);
    /// ```
    round_half_to_even, NearestTiesToEven, 1
  }

  mk_round!{
    /// Round to the nearest multiple of `2^PR`; on a tie, away from 0.
    round_half_away_from_zero, NearestTiesAwayFromZero, 1
  }

  mk_round!{
    /// Round to the nearest multiple of `2^PR`; on a tie, toward 0.
    round_half_toward_zero, NearestTiesTowardZero, 1
  }

  mk_round!{
    /// Round to the nearest multiple of `2^PR`; on a tie, toward +∞.
    round_half_up, NearestTiesUp, 1
  }

  mk_round!{
    /// Round to the nearest multiple of `2^PR`; on a tie, toward −∞.
    round_half_down, NearestTiesDown, 1
  }
}
