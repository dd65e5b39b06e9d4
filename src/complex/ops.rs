use super::*;
use core::ops::Neg;

/// `a·b + sign·c·d`, for significands that are all already at the same place.
#[inline]
fn dot(a: i64, b: i64, c: i64, d: i64, sign: i64) -> i64 {
  a * b + sign * (c * d)
}

/// Checks, at compile time, that `<WR, PR>` is the format of a sum of two products of a
/// `<W1, P1>` by a `<W2, P2>`: the format of the parts of a complex product, a norm, an inphase
/// or a quadrature.
const fn is_sum_of_products(w1: u32, p1: i32, w2: u32, p2: i32, wr: u32, pr: i32) -> bool {
  let product = Format::new(w1, p1).product(Format::new(w2, p2));
  product.sum(product).same_as(Format::new(wr, pr))
}

impl<
  const W: u32,
  const P: i32,
> Complex<W, P> where Width<W>: SupportedWidth {
  /// Exact sum, part by part. The format of the result must be [`Format::sum`] of the operands'
  /// formats, as for [`FixedPoint::add`].
  ///
  /// ```
  /// # use prec_ctrl::Complex;
  /// let a = Complex::<8, -4>::from_f64(1.5, -2.25);
  /// let b = Complex::<7, -5>::from_f64(0.5, 0.75);
  /// let c: Complex<10, -5> = a.add(b);
  /// assert_eq!(c.to_f64(), (2.0, -1.5));
  /// ```
  #[allow(clippy::should_implement_trait)]
  #[inline]
  pub fn add<
    const W2: u32,
    const P2: i32,
    const WR: u32,
    const PR: i32,
  >(self, rhs: Complex<W2, P2>) -> Complex<WR, PR>
  where Width<W2>: SupportedWidth, Width<WR>: SupportedWidth {
    Complex { re: self.re.add(rhs.re), im: self.im.add(rhs.im) }
  }

  /// Exact difference, part by part, with the same result format as [`Complex::add`].
  #[allow(clippy::should_implement_trait)]
  #[inline]
  pub fn sub<
    const W2: u32,
    const P2: i32,
    const WR: u32,
    const PR: i32,
  >(self, rhs: Complex<W2, P2>) -> Complex<WR, PR>
  where Width<W2>: SupportedWidth, Width<WR>: SupportedWidth {
    Complex { re: self.re.sub(rhs.re), im: self.im.sub(rhs.im) }
  }

  /// Exact complex product, `(ac - bd) + (ad + bc)i`. Each part is a sum of two products, so the
  /// format of the result must be `<W + W2, P + P2>` (checked at compile time).
  ///
  /// ```compile_fail
  /// # use prec_ctrl::Complex;
  /// let a = Complex::<8, -4>::from_f64(1.5, -2.25);
  /// let b = Complex::<7, -5>::from_f64(0.5, 0.75);
  /// let c: Complex<14, -9> = a.mul(b);  // the format of the scalar product, one bit short
  /// ```
  #[allow(clippy::should_implement_trait)]
  #[inline]
  pub fn mul<
    const W2: u32,
    const P2: i32,
    const WR: u32,
    const PR: i32,
  >(self, rhs: Complex<W2, P2>) -> Complex<WR, PR>
  where Width<W2>: SupportedWidth, Width<WR>: SupportedWidth {
    const {
      assert!(
        is_sum_of_products(W, P, W2, P2, WR, PR),
        "The format of a complex product must be <W + W2, P + P2>",
      )
    };
    let (a, b) = (self.re.raw(), self.im.raw());
    let (c, d) = (rhs.re.raw(), rhs.im.raw());
    Complex {
      re: FixedPoint::from_raw(dot(a, c, b, d, -1)),
      im: FixedPoint::from_raw(dot(a, d, b, c, 1)),
    }
  }

  /// The squared magnitude, `re² + im²`, exactly. The result's format must be `<2W, 2P>`.
  ///
  /// ```
  /// # use prec_ctrl::{Complex, FixedPoint};
  /// let z = Complex::<8, -4>::from_f64(3.0, -4.0);
  /// let n: FixedPoint<16, -8> = z.norm();
  /// assert_eq!(n.to_f64(), 25.0);
  /// ```
  #[inline]
  pub fn norm<const WR: u32, const PR: i32>(self) -> FixedPoint<WR, PR>
  where Width<WR>: SupportedWidth {
    const {
      assert!(
        is_sum_of_products(W, P, W, P, WR, PR),
        "The format of a norm must be <2W, 2P>",
      )
    };
    let (a, b) = (self.re.raw(), self.im.raw());
    FixedPoint::from_raw(dot(a, a, b, b, 1))
  }

  /// The complex conjugate, `re - im·i`.
  #[inline]
  pub fn conj(self) -> Self {
    Self { re: self.re, im: -self.im }
  }

  /// The component of `self` along `reference`, scaled by the magnitude of `reference`:
  /// `re·ref.re + im·ref.im`, i.e. the real part of `self × conj(reference)`. The format of the
  /// result is that of the parts of [`Complex::mul`].
  ///
  /// ```
  /// # use prec_ctrl::{Complex, FixedPoint};
  /// let z = Complex::<8, -4>::from_f64(1.5, -2.25);
  /// let reference = Complex::<7, -5>::from_f64(0.5, 0.75);
  /// let i: FixedPoint<15, -9> = z.inphase(reference);
  /// let q: FixedPoint<15, -9> = z.quadrature(reference);
  /// assert_eq!(i.to_f64(), 1.5 * 0.5 - 2.25 * 0.75);
  /// assert_eq!(q.to_f64(), -2.25 * 0.5 - 1.5 * 0.75);
  /// ```
  #[inline]
  pub fn inphase<
    const W2: u32,
    const P2: i32,
    const WR: u32,
    const PR: i32,
  >(self, reference: Complex<W2, P2>) -> FixedPoint<WR, PR>
  where Width<W2>: SupportedWidth, Width<WR>: SupportedWidth {
    const {
      assert!(
        is_sum_of_products(W, P, W2, P2, WR, PR),
        "The format of an inphase component must be <W + W2, P + P2>",
      )
    };
    let (a, b) = (self.re.raw(), self.im.raw());
    let (c, d) = (reference.re.raw(), reference.im.raw());
    FixedPoint::from_raw(dot(a, c, b, d, 1))
  }

  /// The component of `self` perpendicular to `reference`, scaled by the magnitude of
  /// `reference`: `im·ref.re - re·ref.im`, i.e. the imaginary part of `self × conj(reference)`.
  /// See [`Complex::inphase`].
  #[inline]
  pub fn quadrature<
    const W2: u32,
    const P2: i32,
    const WR: u32,
    const PR: i32,
  >(self, reference: Complex<W2, P2>) -> FixedPoint<WR, PR>
  where Width<W2>: SupportedWidth, Width<WR>: SupportedWidth {
    const {
      assert!(
        is_sum_of_products(W, P, W2, P2, WR, PR),
        "The format of a quadrature component must be <W + W2, P + P2>",
      )
    };
    let (a, b) = (self.re.raw(), self.im.raw());
    let (c, d) = (reference.re.raw(), reference.im.raw());
    FixedPoint::from_raw(dot(b, c, a, d, -1))
  }

  /// Multiply by `i`, exactly: a rotation by 90°, `(re, im) ↦ (-im, re)`.
  #[inline]
  pub fn mul_i(self) -> Self {
    Self { re: -self.im, im: self.re }
  }
}

/// As [`Complex::norm`].
#[inline]
pub fn norm<
  const W: u32,
  const P: i32,
  const WR: u32,
  const PR: i32,
>(z: Complex<W, P>) -> FixedPoint<WR, PR>
where Width<W>: SupportedWidth, Width<WR>: SupportedWidth {
  z.norm()
}

impl<
  const W: u32,
  const P: i32,
> Neg for Complex<W, P> where Width<W>: SupportedWidth {
  type Output = Self;

  #[inline]
  fn neg(self) -> Self::Output {
    Self { re: -self.re, im: -self.im }
  }
}

impl<
  const W: u32,
  const P: i32,
> Neg for &Complex<W, P> where Width<W>: SupportedWidth {
  type Output = Complex<W, P>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}
