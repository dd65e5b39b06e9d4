//! The ambient rounding mode, consulted whenever a floating-point value is converted into a
//! significand (and nowhere else: the arithmetic and the rounding functions of
//! [`FixedPoint`](crate::FixedPoint) are exact or round by their own, fixed policy).
//!
//! With the `std` feature the ambient mode is thread-local, so that independent threads can pick
//! different modes. Without it, it is a single process-wide value.

/// How to round a value that falls between two representable significands.
///
/// The default, [`RoundingMode::NearestTiesToEven`], is the default rounding of IEEE754.
///
/// # Example
///
/// ```
/// # use prec_ctrl::*;
/// assert_eq!(FixedPoint::<8, 0>::from_f64_with(2.5, RoundingMode::NearestTiesToEven).to_f64(), 2.0);
/// assert_eq!(FixedPoint::<8, 0>::from_f64_with(2.5, RoundingMode::NearestTiesUp).to_f64(), 3.0);
/// assert_eq!(FixedPoint::<8, 0>::from_f64_with(2.1, RoundingMode::TowardPositive).to_f64(), 3.0);
/// ```
#[derive(Debug, Default)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
  /// Nearest; on a tie, the one whose LSB is 0.
  #[default]
  NearestTiesToEven = 0,
  /// Nearest; on a tie, away from 0.
  NearestTiesAwayFromZero = 1,
  /// Nearest; on a tie, toward 0.
  NearestTiesTowardZero = 2,
  /// Nearest; on a tie, toward +∞.
  NearestTiesUp = 3,
  /// Nearest; on a tie, toward −∞.
  NearestTiesDown = 4,
  /// Toward +∞ (ceiling).
  TowardPositive = 5,
  /// Toward −∞ (floor).
  TowardNegative = 6,
  /// Toward 0 (truncation).
  TowardZero = 7,
}

/// Where the discarded fraction of a magnitude lies, relative to half an LSB.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub(crate) enum Fraction {
  Zero,
  BelowHalf,
  Half,
  AboveHalf,
}

impl RoundingMode {
  /// All the modes, in declaration order.
  pub const ALL: [RoundingMode; 8] = [
    RoundingMode::NearestTiesToEven,
    RoundingMode::NearestTiesAwayFromZero,
    RoundingMode::NearestTiesTowardZero,
    RoundingMode::NearestTiesUp,
    RoundingMode::NearestTiesDown,
    RoundingMode::TowardPositive,
    RoundingMode::TowardNegative,
    RoundingMode::TowardZero,
  ];

  /// Given a number in sign-magnitude form, whose magnitude has been truncated to an integer
  /// with LSB `odd` and a discarded `fraction`, decide whether the magnitude must be incremented.
  #[inline]
  pub(crate) fn increments_magnitude(self, negative: bool, odd: bool, fraction: Fraction) -> bool {
    use Fraction::*;
    match self {
      RoundingMode::NearestTiesToEven => fraction == AboveHalf || (fraction == Half && odd),
      RoundingMode::NearestTiesAwayFromZero => fraction == AboveHalf || fraction == Half,
      RoundingMode::NearestTiesTowardZero => fraction == AboveHalf,
      RoundingMode::NearestTiesUp => fraction == AboveHalf || (fraction == Half && !negative),
      RoundingMode::NearestTiesDown => fraction == AboveHalf || (fraction == Half && negative),
      RoundingMode::TowardPositive => fraction != Zero && !negative,
      RoundingMode::TowardNegative => fraction != Zero && negative,
      RoundingMode::TowardZero => false,
    }
  }

  /// Round `x` to an integer in this mode, using the floating-point rounding functions of `std`.
  /// The result is exact, but may be `-0.0`.
  #[cfg(feature = "std")]
  pub(crate) fn round_f64(self, x: f64) -> f64 {
    match self {
      RoundingMode::NearestTiesToEven => x.round_ties_even(),
      RoundingMode::NearestTiesAwayFromZero => x.round(),
      RoundingMode::TowardPositive => x.ceil(),
      RoundingMode::TowardNegative => x.floor(),
      RoundingMode::TowardZero => x.trunc(),
      RoundingMode::NearestTiesTowardZero | RoundingMode::NearestTiesUp | RoundingMode::NearestTiesDown => {
        // `x - trunc(x)` is always exact.
        let integral = x.trunc();
        let fraction = (x - integral).abs();
        let away = integral + x.signum();
        if fraction < 0.5 {
          integral
        } else if fraction > 0.5 {
          away
        } else {
          match self {
            RoundingMode::NearestTiesUp if x > 0.0 => away,
            RoundingMode::NearestTiesDown if x < 0.0 => away,
            _ => integral,
          }
        }
      }
    }
  }

  #[cfg(not(feature = "std"))]
  const fn of_u8(x: u8) -> Self {
    match x {
      1 => RoundingMode::NearestTiesAwayFromZero,
      2 => RoundingMode::NearestTiesTowardZero,
      3 => RoundingMode::NearestTiesUp,
      4 => RoundingMode::NearestTiesDown,
      5 => RoundingMode::TowardPositive,
      6 => RoundingMode::TowardNegative,
      7 => RoundingMode::TowardZero,
      _ => RoundingMode::NearestTiesToEven,
    }
  }
}

#[cfg(feature = "std")]
std::thread_local! {
  static AMBIENT: core::cell::Cell<RoundingMode> = const {
    core::cell::Cell::new(RoundingMode::NearestTiesToEven)
  };
}

#[cfg(not(feature = "std"))]
static AMBIENT: core::sync::atomic::AtomicU8 =
  core::sync::atomic::AtomicU8::new(RoundingMode::NearestTiesToEven as u8);

/// The current ambient rounding mode.
#[inline]
pub fn rounding_mode() -> RoundingMode {
  #[cfg(feature = "std")]
  { AMBIENT.with(|mode| mode.get()) }
  #[cfg(not(feature = "std"))]
  { RoundingMode::of_u8(AMBIENT.load(core::sync::atomic::Ordering::Relaxed)) }
}

/// Set the ambient rounding mode, returning the previous one.
pub fn set_rounding_mode(mode: RoundingMode) -> RoundingMode {
  #[cfg(feature = "std")]
  let previous = AMBIENT.with(|ambient| ambient.replace(mode));
  #[cfg(not(feature = "std"))]
  let previous = RoundingMode::of_u8(
    AMBIENT.swap(mode as u8, core::sync::atomic::Ordering::Relaxed)
  );
  if previous != mode {
    log::debug!("ambient rounding mode changed from {previous:?} to {mode:?}");
  }
  previous
}

/// Run `f` with `mode` as the ambient rounding mode, then restore the previous mode (also if `f`
/// unwinds).
///
/// # Example
///
/// ```
/// # use prec_ctrl::*;
/// let x: FixedPoint<8, 0> = with_rounding_mode(RoundingMode::TowardZero, || {
///   FixedPoint::from_f64(-2.9)
/// });
/// assert_eq!(x.to_f64(), -2.0);
/// assert_eq!(rounding_mode(), RoundingMode::NearestTiesToEven);
/// ```
pub fn with_rounding_mode<T>(mode: RoundingMode, f: impl FnOnce() -> T) -> T {
  struct Restore(RoundingMode);

  impl Drop for Restore {
    fn drop(&mut self) {
      set_rounding_mode(self.0);
    }
  }

  let _restore = Restore(set_rounding_mode(mode));
  f()
}

#[cfg(test)]
mod tests {
  use super::*;
  use Fraction::*;

  #[test]
  fn default_is_ties_to_even() {
    assert_eq!(RoundingMode::default(), RoundingMode::NearestTiesToEven);
    assert_eq!(rounding_mode(), RoundingMode::NearestTiesToEven);
  }

  #[test]
  fn scoped_mode_is_restored() {
    let inner = with_rounding_mode(RoundingMode::TowardNegative, rounding_mode);
    assert_eq!(inner, RoundingMode::TowardNegative);
    assert_eq!(rounding_mode(), RoundingMode::NearestTiesToEven);
  }

  #[test]
  fn set_returns_previous() {
    let previous = set_rounding_mode(RoundingMode::TowardZero);
    assert_eq!(previous, RoundingMode::NearestTiesToEven);
    assert_eq!(set_rounding_mode(previous), RoundingMode::TowardZero);
    assert_eq!(rounding_mode(), RoundingMode::NearestTiesToEven);
  }

  #[test]
  fn ties() {
    let up = |mode: RoundingMode, negative, odd| mode.increments_magnitude(negative, odd, Half);
    assert!(!up(RoundingMode::NearestTiesToEven, false, false));
    assert!(up(RoundingMode::NearestTiesToEven, false, true));
    assert!(up(RoundingMode::NearestTiesAwayFromZero, true, false));
    assert!(!up(RoundingMode::NearestTiesTowardZero, false, true));
    assert!(up(RoundingMode::NearestTiesUp, false, false));
    assert!(!up(RoundingMode::NearestTiesUp, true, false));
    assert!(up(RoundingMode::NearestTiesDown, true, false));
    assert!(!up(RoundingMode::NearestTiesDown, false, false));
  }

  #[cfg(feature = "std")]
  #[test]
  fn round_f64() {
    let cases = [
      (RoundingMode::NearestTiesTowardZero, [2.0, -2.0, 3.0, -3.0]),
      (RoundingMode::NearestTiesUp, [3.0, -2.0, 3.0, -3.0]),
      (RoundingMode::NearestTiesDown, [2.0, -3.0, 3.0, -3.0]),
    ];
    for (mode, [tie, negative_tie, above, negative_above]) in cases {
      assert_eq!(mode.round_f64(2.5), tie, "{mode:?}");
      assert_eq!(mode.round_f64(-2.5), negative_tie, "{mode:?}");
      assert_eq!(mode.round_f64(2.75), above, "{mode:?}");
      assert_eq!(mode.round_f64(-2.75), negative_above, "{mode:?}");
      assert_eq!(mode.round_f64(-0.25), 0.0, "{mode:?}");
    }
    // Just above -0.5, where `x - floor(x)` would round to 0.5.
    let x = -0.5 + f64::EPSILON / 4.0;
    assert_eq!(RoundingMode::NearestTiesDown.round_f64(x), 0.0);
  }

  #[test]
  fn directed() {
    for fraction in [BelowHalf, Half, AboveHalf] {
      assert!(RoundingMode::TowardPositive.increments_magnitude(false, false, fraction));
      assert!(!RoundingMode::TowardPositive.increments_magnitude(true, false, fraction));
      assert!(RoundingMode::TowardNegative.increments_magnitude(true, false, fraction));
      assert!(!RoundingMode::TowardNegative.increments_magnitude(false, false, fraction));
      assert!(!RoundingMode::TowardZero.increments_magnitude(true, true, fraction));
    }
    for mode in RoundingMode::ALL {
      assert!(!mode.increments_magnitude(false, true, Zero));
      assert!(!mode.increments_magnitude(true, true, Zero));
    }
  }
}
