use super::*;
use crate::RoundingMode;
use crate::rounding_mode::rounding_mode;

impl<
  const W: u32,
  const P: i32,
> Complex<W, P> where Width<W>: SupportedWidth {
  /// Zero.
  ///
  /// ```compile_fail
  /// # use prec_ctrl::Complex;
  /// let z = Complex::<8, 5000>::ZERO;  // place out of range
  /// ```
  pub const ZERO: Self = Self { re: FixedPoint::ZERO, im: FixedPoint::ZERO };

  /// The complex number `re + im·i`.
  #[inline]
  pub const fn new(re: FixedPoint<W, P>, im: FixedPoint<W, P>) -> Self {
    Self { re, im }
  }

  /// The complex number `re + 0·i`.
  #[inline]
  pub const fn from_real(re: FixedPoint<W, P>) -> Self {
    Self { re, im: FixedPoint::ZERO }
  }

  /// The complex number `re + im·i`, from parts of (possibly different) narrower formats; see
  /// [`FixedPoint::widen`].
  ///
  /// ```
  /// # use prec_ctrl::{Complex, FixedPoint};
  /// let z = Complex::<12, -6>::from_narrower_parts(
  ///   FixedPoint::<8, -4>::from_f64(1.5),
  ///   FixedPoint::<10, -6>::from_f64(-0.25),
  /// );
  /// assert_eq!(z.to_f64(), (1.5, -0.25));
  /// ```
  #[inline]
  pub fn from_narrower_parts<
    const W1: u32,
    const P1: i32,
    const W2: u32,
    const P2: i32,
  >(re: FixedPoint<W1, P1>, im: FixedPoint<W2, P2>) -> Self
  where Width<W1>: SupportedWidth, Width<W2>: SupportedWidth {
    Self { re: re.widen(), im: im.widen() }
  }

  /// Convert to a format that holds every value of `Self`, exactly; see [`FixedPoint::widen`].
  #[inline]
  pub fn widen<const W2: u32, const P2: i32>(self) -> Complex<W2, P2>
  where Width<W2>: SupportedWidth {
    Complex { re: self.re.widen(), im: self.im.widen() }
  }

  /// As [`Complex::widen`], the other way around.
  #[inline]
  pub fn from_narrower<const W2: u32, const P2: i32>(source: Complex<W2, P2>) -> Self
  where Width<W2>: SupportedWidth {
    source.widen()
  }

  /// Assign a value of a narrower format to `self`, exactly.
  #[inline]
  pub fn assign_narrower<const W2: u32, const P2: i32>(&mut self, source: Complex<W2, P2>) -> &mut Self
  where Width<W2>: SupportedWidth {
    *self = source.widen();
    self
  }

  /// Convert each part from `f64` as in [`FixedPoint::from_f64`] (rounding according to the
  /// ambient rounding mode, and saturating).
  #[inline]
  pub fn from_f64(re: f64, im: f64) -> Self {
    Self::from_f64_with(re, im, rounding_mode())
  }

  /// As [`Complex::from_f64`], but rounding according to `mode`.
  #[inline]
  pub fn from_f64_with(re: f64, im: f64, mode: RoundingMode) -> Self {
    Self {
      re: FixedPoint::from_f64_with(re, mode),
      im: FixedPoint::from_f64_with(im, mode),
    }
  }

  /// The real and imaginary parts as `f64`, exactly.
  #[inline]
  pub fn to_f64(self) -> (f64, f64) {
    (self.re.to_f64(), self.im.to_f64())
  }

  /// The real part.
  #[inline]
  pub const fn real(self) -> FixedPoint<W, P> {
    self.re
  }

  /// The imaginary part.
  #[inline]
  pub const fn imag(self) -> FixedPoint<W, P> {
    self.im
  }

  /// Replace the real part with a value of the same or a narrower format.
  #[inline]
  pub fn set_real<const W2: u32, const P2: i32>(&mut self, re: FixedPoint<W2, P2>) -> &mut Self
  where Width<W2>: SupportedWidth {
    self.re = re.widen();
    self
  }

  /// Replace the imaginary part with a value of the same or a narrower format.
  #[inline]
  pub fn set_imag<const W2: u32, const P2: i32>(&mut self, im: FixedPoint<W2, P2>) -> &mut Self
  where Width<W2>: SupportedWidth {
    self.im = im.widen();
    self
  }

  /// Replace the real part with an `f64`, as in [`FixedPoint::from_f64`].
  #[inline]
  pub fn set_real_f64(&mut self, re: f64) -> &mut Self {
    self.re = FixedPoint::from_f64(re);
    self
  }

  /// Replace the imaginary part with an `f64`, as in [`FixedPoint::from_f64`].
  #[inline]
  pub fn set_imag_f64(&mut self, im: f64) -> &mut Self {
    self.im = FixedPoint::from_f64(im);
    self
  }

  /// Whether both parts are zero.
  #[inline]
  pub fn is_zero(self) -> bool {
    self.re.is_zero() && self.im.is_zero()
  }

  /// Apply `f` to both parts. This is how every part-wise operation is lifted from
  /// [`FixedPoint`] to `Complex`.
  ///
  /// ```
  /// # use prec_ctrl::{Complex, FixedPoint};
  /// let z = Complex::<8, -4>::from_f64(1.5, -2.25);
  /// let w: Complex<8, -3> = z.map(|x| x.exp2());
  /// assert_eq!(w.to_f64(), (3.0, -4.5));
  /// ```
  #[inline]
  pub fn map<const W2: u32, const P2: i32>(self, f: impl Fn(FixedPoint<W, P>) -> FixedPoint<W2, P2>) -> Complex<W2, P2>
  where Width<W2>: SupportedWidth {
    Complex { re: f(self.re), im: f(self.im) }
  }
}

impl<
  const W: u32,
  const P: i32,
> From<FixedPoint<W, P>> for Complex<W, P> where Width<W>: SupportedWidth {
  /// As [`Complex::from_real`].
  #[inline]
  fn from(re: FixedPoint<W, P>) -> Self {
    Self::from_real(re)
  }
}

impl<
  const W: u32,
  const P: i32,
> From<Complex<W, P>> for bool where Width<W>: SupportedWidth {
  /// `true` iff either part is non-zero.
  #[inline]
  fn from(value: Complex<W, P>) -> Self {
    !value.is_zero()
  }
}

impl<
  const W: u32,
  const P: i32,
> crate::RoundFrom<(f64, f64)> for Complex<W, P> where Width<W>: SupportedWidth {
  /// As [`Complex::from_f64`].
  #[inline]
  fn round_from((re, im): (f64, f64)) -> Self {
    Self::from_f64(re, im)
  }
}
