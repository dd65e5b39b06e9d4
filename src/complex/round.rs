use super::*;

/// Lifts a rounding function of [`FixedPoint`] over both parts, via [`Complex::map`].
macro_rules! lift_round {
  ($($name:ident),* $(,)?) => {$(
    #[doc = concat!("[`FixedPoint::", stringify!($name), "`] applied to both parts.")]
    #[inline]
    pub fn $name<const WR: u32, const PR: i32>(self) -> Complex<WR, PR>
    where Width<WR>: SupportedWidth {
      self.map(|x| x.$name())
    }
  )*}
}

impl<
  const W: u32,
  const P: i32,
> Complex<W, P> where Width<W>: SupportedWidth {
  lift_round!{
    ceil,
    floor,
    trunc,
    round_half_to_even,
    round_half_away_from_zero,
    round_half_toward_zero,
    round_half_up,
    round_half_down,
  }

  /// [`FixedPoint::reduce_dynamic_range`] applied to both parts.
  ///
  /// ```
  /// # use prec_ctrl::Complex;
  /// let z = Complex::<16, -4>::from_f64(100.0, -1.5);
  /// let w: Complex<8, -4> = z.reduce_dynamic_range();
  /// assert_eq!(w.to_f64(), (7.9375, -1.5));
  /// ```
  #[inline]
  pub fn reduce_dynamic_range<const DW: u32>(self) -> Complex<DW, P>
  where Width<DW>: SupportedWidth {
    self.map(|x| x.reduce_dynamic_range())
  }

  /// [`FixedPoint::exp2`] applied to both parts.
  #[inline]
  pub fn exp2<const PR: i32>(self) -> Complex<W, PR> {
    self.map(|x| x.exp2())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn each_part_independently() {
    let z = Complex::<8, -4>::from_f64(2.5, -2.5);
    let c: Complex<5, 0> = z.ceil();
    assert_eq!(c.to_f64(), (3.0, -2.0));
    let f: Complex<5, 0> = z.floor();
    assert_eq!(f.to_f64(), (2.0, -3.0));
    let t: Complex<4, 0> = z.trunc();
    assert_eq!(t.to_f64(), (2.0, -2.0));
    let e: Complex<5, 0> = z.round_half_to_even();
    assert_eq!(e.to_f64(), (2.0, -2.0));
    let a: Complex<5, 0> = z.round_half_away_from_zero();
    assert_eq!(a.to_f64(), (3.0, -3.0));
    let tz: Complex<5, 0> = z.round_half_toward_zero();
    assert_eq!(tz.to_f64(), (2.0, -2.0));
    let u: Complex<5, 0> = z.round_half_up();
    assert_eq!(u.to_f64(), (3.0, -2.0));
    let d: Complex<5, 0> = z.round_half_down();
    assert_eq!(d.to_f64(), (2.0, -3.0));
  }

  #[test]
  fn already_coarse() {
    let z = Complex::<8, 2>::from_f64(20.0, -12.0);
    let y: Complex<8, 2> = z.round_half_to_even();
    assert_eq!(y, z);
  }

  #[test]
  fn exp2() {
    let z = Complex::<8, -4>::from_f64(1.5, -0.25);
    let y: Complex<8, 0> = z.exp2();
    assert_eq!(y.to_f64(), (24.0, -4.0));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn floor_matches_parts(z in Complex::<20, -9>::cases_proptest()) {
      let y: Complex<15, -3> = z.floor();
      let re: FixedPoint<15, -3> = z.real().floor();
      let im: FixedPoint<15, -3> = z.imag().floor();
      assert_eq!(y.real(), re);
      assert_eq!(y.imag(), im);
    }
  }
}
