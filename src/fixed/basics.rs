use super::*;
use crate::RoundingMode;
use crate::limit::to_significand_with;
use crate::underlying::{MAX_MSB_PLACE, MIN_LSB_PLACE, clamp_i128, max_significand, pow2};

impl<
  const W: u32,
  const P: i32,
> FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// The width of the significand in bits (i.e. parameter `W`), sign bit included.
  ///
  /// Note: this is the logical width, not necessarily the size of the underlying type.
  pub const WIDTH: u32 = W;

  /// The place of the least significant bit (i.e. parameter `P`).
  pub const PLACE: i32 = {
    assert!(
      P >= MIN_LSB_PLACE,
      "The LSB of a fixed-point number cannot be below the smallest normal f64 (place -1022)",
    );
    assert!(
      W as i32 + P <= MAX_MSB_PLACE,
      "The MSB of a fixed-point number cannot be above the biggest finite f64 (width + place \
      must be at most 1024)",
    );
    P
  };

  /// The [`Format`] of this type, `(W, P)`.
  pub const FORMAT: Format = Format::new(W, Self::PLACE);

  /// The biggest significand, `2^(W-1) - 1`. The smallest is its negation.
  pub const MAX_SIGNIFICAND: i64 = max_significand(W);

  /// Zero.
  ///
  /// Like every other value, it only exists for a valid place:
  ///
  /// ```compile_fail
  /// # use prec_ctrl::FixedPoint;
  /// let x = FixedPoint::<8, 5000>::default();
  /// ```
  pub const ZERO: Self = {
    let _: i32 = Self::PLACE;
    Self { significand: <Significand<W> as Sealed>::ZERO }
  };

  /// Construct a value from a significand that is known to be in range. Every value of every
  /// `FixedPoint` type is built here, which is where a bad place is caught at compile time.
  #[inline]
  pub(crate) fn from_raw(significand: i64) -> Self {
    let _: i32 = const { Self::PLACE };
    debug_assert!(
      significand.unsigned_abs() <= Self::MAX_SIGNIFICAND as u64,
      "significand {significand} out of range for {}", Self::FORMAT,
    );
    Self { significand: Sealed::of_i64(significand) }
  }

  /// The significand widened to `i64`, which holds every width.
  #[inline]
  pub(crate) fn raw(self) -> i64 {
    self.significand.into()
  }

  /// The biggest value of this type, `(2^(W-1) - 1) × 2^P`.
  #[inline]
  pub fn max_value() -> Self {
    Self::from_raw(Self::MAX_SIGNIFICAND)
  }

  /// The smallest (most negative) value of this type, `-(2^(W-1) - 1) × 2^P`.
  #[inline]
  pub fn min_value() -> Self {
    Self::from_raw(-Self::MAX_SIGNIFICAND)
  }

  /// The value `significand × 2^P`, with `significand` clamped to
  /// [`±MAX_SIGNIFICAND`](Self::MAX_SIGNIFICAND).
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// assert_eq!(FixedPoint::<8, -4>::from_significand(0x31).to_f64(), 3.0625);
  /// assert_eq!(FixedPoint::<8, -4>::from_significand(1000).significand(), 127);
  /// assert_eq!(FixedPoint::<8, -4>::from_significand(-128).significand(), -127);
  /// ```
  #[inline]
  pub fn from_significand(significand: impl Into<i128>) -> Self {
    Self::from_raw(clamp_i128(W, significand.into()))
  }

  /// The significand, as the underlying machine integer (`i32` for widths up to 32, `i64`
  /// otherwise).
  #[inline]
  pub fn significand(self) -> Significand<W> {
    self.significand
  }

  /// Replace the significand, clamping as in [`Self::from_significand`].
  #[inline]
  pub fn set_significand(&mut self, significand: impl Into<i128>) -> &mut Self {
    *self = Self::from_significand(significand);
    self
  }

  /// Replace the significand with `significand` truncated to an integer, clamping as in
  /// [`Self::from_significand`]. For significands kept in an `f64` (e.g. a sum accumulated with
  /// [`significand_adder`](crate::significand_adder)), which may exceed any integer width. A NaN
  /// sets 0.
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// let mut x = FixedPoint::<8, -4>::ZERO;
  /// assert_eq!(x.set_significand_f64(49.0).to_f64(), 3.0625);
  /// assert_eq!(x.set_significand_f64(-1e300).significand(), -127);
  /// ```
  #[inline]
  pub fn set_significand_f64(&mut self, significand: f64) -> &mut Self {
    *self = Self::from_raw(to_significand_with::<W, 0>(significand, RoundingMode::TowardZero).into());
    self
  }

  /// Whether `self` is zero.
  #[inline]
  pub fn is_zero(self) -> bool {
    self.significand == <Significand<W> as Sealed>::ZERO
  }

  /// Convert to `f64`, exactly: `significand × 2^P`.
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// assert_eq!(FixedPoint::<2, -1022>::from_significand(1).to_f64(), f64::MIN_POSITIVE);
  /// assert_eq!(FixedPoint::<10, 1014>::max_value().to_f64(), 511.0 * 2.0_f64.powi(1014));
  /// ```
  #[inline]
  pub fn to_f64(self) -> f64 {
    // A significand has at most 53 magnitude bits, so the conversion and the scaling by a power of
    // two are both exact.
    self.raw() as f64 * pow2(Self::PLACE)
  }

  /// Convert to a format that holds every value of `Self`, exactly. `self`'s format must be
  /// [narrower](Format::is_narrower_than) than the target's, or this doesn't compile.
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// let x = FixedPoint::<8, -4>::from_f64(3.0625);
  /// let y: FixedPoint<12, -6> = x.widen();
  /// assert_eq!(x, y);
  /// ```
  ///
  /// ```compile_fail
  /// # use prec_ctrl::FixedPoint;
  /// let x = FixedPoint::<8, -4>::from_f64(3.0625);
  /// let y: FixedPoint<8, -3> = x.widen();  // would lose the LSB
  /// ```
  #[inline]
  pub fn widen<const W2: u32, const P2: i32>(self) -> FixedPoint<W2, P2>
  where Width<W2>: SupportedWidth {
    const {
      assert!(
        Format::new(W, P).is_narrower_than(Format::new(W2, P2)),
        "Can only widen into a format that holds every value of the source format",
      )
    };
    FixedPoint::from_raw(self.raw() << (P - P2))
  }

  /// As [`FixedPoint::widen`], the other way around: construct `Self` from a value of a narrower
  /// format.
  #[inline]
  pub fn from_narrower<const W2: u32, const P2: i32>(source: FixedPoint<W2, P2>) -> Self
  where Width<W2>: SupportedWidth {
    source.widen()
  }

  /// Assign a value of a narrower format to `self`, exactly.
  #[inline]
  pub fn assign_narrower<const W2: u32, const P2: i32>(&mut self, source: FixedPoint<W2, P2>) -> &mut Self
  where Width<W2>: SupportedWidth {
    *self = source.widen();
    self
  }

  /// Keep the place but narrow the width to `DW` bits, clamping the significand to
  /// `±(2^(DW-1) - 1)`. Any `DW` (narrower or wider) is allowed.
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// let x = FixedPoint::<34, 0>::from_significand(0x1_0000_0001_i64);
  /// let y: FixedPoint<16, 0> = x.reduce_dynamic_range();
  /// assert_eq!(y.significand(), 0x7fff);
  /// ```
  #[inline]
  pub fn reduce_dynamic_range<const DW: u32>(self) -> FixedPoint<DW, P>
  where Width<DW>: SupportedWidth {
    let significand = clamp_i128(DW, self.raw().into());
    if significand != self.raw() {
      log::trace!("clamped {} from {} to {DW} bits", self.raw(), Self::FORMAT);
    }
    FixedPoint::from_raw(significand)
  }

  /// Multiply by a power of two, exactly, by moving the place from `P` to `PR` (the significand
  /// stays the same). The result is `self × 2^(PR - P)`.
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// let x = FixedPoint::<8, -4>::from_f64(3.0625);
  /// let y: FixedPoint<8, -1> = x.exp2();
  /// assert_eq!(y.to_f64(), 3.0625 * 8.0);
  /// ```
  ///
  /// The target place is still bounded by the range of `f64`:
  ///
  /// ```compile_fail
  /// # use prec_ctrl::FixedPoint;
  /// let x = FixedPoint::<10, 1014>::max_value();
  /// let y: FixedPoint<10, 1015> = x.exp2();  // MSB above place 1024
  /// ```
  #[inline]
  pub fn exp2<const PR: i32>(self) -> FixedPoint<W, PR> {
    FixedPoint::from_raw(self.raw())
  }
}
