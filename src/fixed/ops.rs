use super::*;
use core::ops::Neg;

/// The significands of `a` and `b`, shifted left to place `place`, which must be at or below both.
#[inline]
pub(crate) fn align<
  const W1: u32,
  const P1: i32,
  const W2: u32,
  const P2: i32,
>(a: FixedPoint<W1, P1>, b: FixedPoint<W2, P2>, place: i32) -> (i64, i64)
where Width<W1>: SupportedWidth, Width<W2>: SupportedWidth {
  debug_assert!(place <= P1 && place <= P2);
  (a.raw() << (P1 - place), b.raw() << (P2 - place))
}

impl<
  const W: u32,
  const P: i32,
> FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// Exact sum. The result's format must be [`Format::sum`] of the operands' formats (this is
  /// checked at compile time), which always holds the result.
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// let a = FixedPoint::<10, -10>::from_f64(0.25);
  /// let b = FixedPoint::<7, 4>::from_f64(-512.0);
  /// let c: FixedPoint<21, -10> = a.add(b);
  /// assert_eq!(c.to_f64(), -511.75);
  /// ```
  ///
  /// ```compile_fail
  /// # use prec_ctrl::FixedPoint;
  /// let a = FixedPoint::<8, -4>::from_f64(1.0);
  /// let b = FixedPoint::<7, -5>::from_f64(1.0);
  /// let c: FixedPoint<9, -5> = a.add(b);  // too narrow, could overflow
  /// ```
  #[allow(clippy::should_implement_trait)]
  #[inline]
  pub fn add<
    const W2: u32,
    const P2: i32,
    const WR: u32,
    const PR: i32,
  >(self, rhs: FixedPoint<W2, P2>) -> FixedPoint<WR, PR>
  where Width<W2>: SupportedWidth, Width<WR>: SupportedWidth {
    const {
      assert!(
        Format::new(W, P).sum(Format::new(W2, P2)).same_as(Format::new(WR, PR)),
        "The format of a sum must be Format::sum of the formats of the operands",
      )
    };
    let (a, b) = align(self, rhs, PR);
    FixedPoint::from_raw(a + b)
  }

  /// Exact difference. The result's format is [`Format::sum`] of the operands' formats, as for
  /// [`FixedPoint::add`].
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// let a = FixedPoint::<8, -4>::from_f64(-7.9375);
  /// let b = FixedPoint::<7, -5>::from_f64(1.96875);
  /// let c: FixedPoint<10, -5> = a.sub(b);
  /// assert_eq!(c.to_f64(), -9.90625);
  /// ```
  #[allow(clippy::should_implement_trait)]
  #[inline]
  pub fn sub<
    const W2: u32,
    const P2: i32,
    const WR: u32,
    const PR: i32,
  >(self, rhs: FixedPoint<W2, P2>) -> FixedPoint<WR, PR>
  where Width<W2>: SupportedWidth, Width<WR>: SupportedWidth {
    self.add(-rhs)
  }

  /// Exact product. The result's format must be [`Format::product`] of the operands' formats
  /// (this is checked at compile time), which always holds the result.
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// let a = FixedPoint::<8, 1>::from_f64(-1000.0);
  /// let b = FixedPoint::<8, 2>::from_f64(1000.0);
  /// let c: FixedPoint<15, 3> = a.mul(b);
  /// assert_eq!(c.to_f64(), -129032.0);
  /// ```
  #[allow(clippy::should_implement_trait)]
  #[inline]
  pub fn mul<
    const W2: u32,
    const P2: i32,
    const WR: u32,
    const PR: i32,
  >(self, rhs: FixedPoint<W2, P2>) -> FixedPoint<WR, PR>
  where Width<W2>: SupportedWidth, Width<WR>: SupportedWidth {
    const {
      assert!(
        Format::new(W, P).product(Format::new(W2, P2)).same_as(Format::new(WR, PR)),
        "The format of a product must be Format::product of the formats of the operands",
      )
    };
    FixedPoint::from_raw(self.raw() * rhs.raw())
  }
}

impl<
  const W: u32,
  const P: i32,
> Neg for FixedPoint<W, P> where Width<W>: SupportedWidth {
  type Output = Self;

  /// Exact negation, in the same format (significands are symmetric around 0).
  #[inline]
  fn neg(self) -> Self::Output {
    Self::from_raw(-self.raw())
  }
}

impl<
  const W: u32,
  const P: i32,
> Neg for &FixedPoint<W, P> where Width<W>: SupportedWidth {
  type Output = FixedPoint<W, P>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn add_formats() {
    let a = FixedPoint::<10, -10>::from_f64(0.25);
    let b = FixedPoint::<7, -1>::from_f64(-0.5);
    let c: FixedPoint<16, -10> = a.add(b);
    assert_eq!(c.to_f64(), -0.25);
    let d = FixedPoint::<13, -10>::from_f64(3.5);
    let e = FixedPoint::<7, 1>::from_f64(-60.0);
    let f: FixedPoint<19, -10> = d.add(e);
    assert_eq!(f.to_f64(), -56.5);
    let g = FixedPoint::<10, -8>::max_value();
    let h = FixedPoint::<5, -4>::max_value();
    let i: FixedPoint<11, -8> = g.add(h);
    assert_eq!(i.to_f64(), g.to_f64() + h.to_f64());
  }

  #[test]
  fn add_extremes() {
    let a = FixedPoint::<8, -4>::max_value();
    let b = FixedPoint::<7, -5>::max_value();
    let c: FixedPoint<10, -5> = a.add(b);
    assert_eq!(c.to_f64(), 7.9375 + 1.96875);
    let d: FixedPoint<10, -5> = (-a).sub(b);
    assert_eq!(d.to_f64(), -7.9375 - 1.96875);
    let e: FixedPoint<10, -5> = b.add(a);
    assert_eq!(c, e);
  }

  #[test]
  fn mul_extremes() {
    let a = FixedPoint::<53, 0>::max_value();
    let b = FixedPoint::<2, 0>::min_value();
    let c: FixedPoint<54, 0> = b.mul(a);
    assert_eq!(c.to_f64(), -a.to_f64());
    let d = FixedPoint::<27, -3>::min_value();
    let e = FixedPoint::<28, -1>::min_value();
    let f: FixedPoint<54, -4> = d.mul(e);
    assert_eq!(f.to_f64(), d.to_f64() * e.to_f64());
  }

  #[test]
  fn neg() {
    let a = FixedPoint::<8, -4>::min_value();
    assert_eq!(-a, FixedPoint::<8, -4>::max_value());
    assert_eq!(-&a, FixedPoint::<8, -4>::max_value());
    assert!((-FixedPoint::<8, -4>::ZERO).is_zero());
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn add_is_exact(a in FixedPoint::<20, -7>::cases_proptest(), b in FixedPoint::<15, 3>::cases_proptest()) {
      let c: FixedPoint<26, -7> = a.add(b);
      assert_eq!(c.to_rational(), a.to_rational() + b.to_rational());
    }

    #[test]
    fn sub_is_exact(a in FixedPoint::<40, -30>::cases_proptest(), b in FixedPoint::<10, -35>::cases_proptest()) {
      let c: FixedPoint<46, -35> = a.sub(b);
      assert_eq!(c.to_rational(), a.to_rational() - b.to_rational());
    }

    #[test]
    fn mul_is_exact(a in FixedPoint::<30, -20>::cases_proptest(), b in FixedPoint::<24, 10>::cases_proptest()) {
      let c: FixedPoint<53, -10> = a.mul(b);
      assert_eq!(c.to_rational(), a.to_rational() * b.to_rational());
    }

    #[test]
    fn neg_is_involution(
      a in FixedPoint::<2, 0>::cases_proptest(),
      b in FixedPoint::<32, -16>::cases_proptest(),
      c in FixedPoint::<54, -30>::cases_proptest(),
    ) {
      assert_eq!(-(-a), a);
      assert_eq!(-(-b), b);
      assert_eq!(-(-c), c);
      assert!(i64::from((-a).significand()).unsigned_abs() <= FixedPoint::<2, 0>::MAX_SIGNIFICAND as u64);
      assert!(i64::from((-b).significand()).unsigned_abs() <= FixedPoint::<32, -16>::MAX_SIGNIFICAND as u64);
      assert!((-c).significand().unsigned_abs() <= FixedPoint::<54, -30>::MAX_SIGNIFICAND as u64);
      assert_eq!((-c).to_rational(), -c.to_rational());
    }

    #[test]
    fn add_commutes(a in FixedPoint::<12, -2>::cases_proptest(), b in FixedPoint::<9, -6>::cases_proptest()) {
      let c: FixedPoint<17, -6> = a.add(b);
      let d: FixedPoint<17, -6> = b.add(a);
      assert_eq!(c, d);
    }
  }
}
