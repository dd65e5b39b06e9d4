use super::*;
use super::ops::align;
use core::cmp::Ordering;

// `FixedPoint` carries a `where Width<W>: SupportedWidth` bound, and the derive macros would also
// require the bounds of the significand type (which we know already hold, via `Sealed`), so we
// implement the basic traits explicitly here.

impl<const W: u32, const P: i32>
Clone for FixedPoint<W, P> where Width<W>: SupportedWidth {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<const W: u32, const P: i32>
Copy for FixedPoint<W, P> where Width<W>: SupportedWidth {}

impl<const W: u32, const P: i32>
Default for FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// Zero.
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl<const W: u32, const P: i32>
core::hash::Hash for FixedPoint<W, P> where Width<W>: SupportedWidth {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.significand.hash(state);
  }
}

impl<const W: u32, const P: i32>
Eq for FixedPoint<W, P> where Width<W>: SupportedWidth {}

impl<const W: u32, const P: i32>
Ord for FixedPoint<W, P> where Width<W>: SupportedWidth {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.significand.cmp(&other.significand)
  }
}

/// Compare values of any two formats, by aligning both to the place of the finer one. The
/// [superset](Format::superset) of both formats must itself be a valid format (at most 54 bits
/// wide), or this doesn't compile.
#[inline]
fn compare<
  const W1: u32,
  const P1: i32,
  const W2: u32,
  const P2: i32,
>(a: FixedPoint<W1, P1>, b: FixedPoint<W2, P2>) -> Ordering
where Width<W1>: SupportedWidth, Width<W2>: SupportedWidth {
  let common = const {
    let common = Format::new(W1, P1).superset(Format::new(W2, P2));
    assert!(
      common.is_valid(),
      "Can only compare fixed-point numbers whose common format is at most 54 bits wide",
    );
    common
  };
  let (a, b) = align(a, b, common.place);
  a.cmp(&b)
}

impl<
  const W: u32,
  const P: i32,
  const W2: u32,
  const P2: i32,
> PartialEq<FixedPoint<W2, P2>> for FixedPoint<W, P>
where Width<W>: SupportedWidth, Width<W2>: SupportedWidth {
  /// Exact comparison of the values (which may be of different formats).
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// let a = FixedPoint::<8, -4>::from_f64(2.5);
  /// let b = FixedPoint::<20, -1>::from_f64(2.5);
  /// assert!(a == b);
  /// assert!(a != FixedPoint::<8, -2>::from_f64(2.25));
  /// ```
  #[inline]
  fn eq(&self, other: &FixedPoint<W2, P2>) -> bool {
    compare(*self, *other) == Ordering::Equal
  }
}

impl<
  const W: u32,
  const P: i32,
  const W2: u32,
  const P2: i32,
> PartialOrd<FixedPoint<W2, P2>> for FixedPoint<W, P>
where Width<W>: SupportedWidth, Width<W2>: SupportedWidth {
  /// Exact comparison of the values (which may be of different formats).
  ///
  /// ```
  /// # use prec_ctrl::FixedPoint;
  /// let a = FixedPoint::<8, -4>::from_f64(2.5);
  /// let b = FixedPoint::<20, -1>::from_f64(-3.5);
  /// assert!(a > b);
  /// assert!(b < FixedPoint::<8, -2>::ZERO);
  /// ```
  #[inline]
  fn partial_cmp(&self, other: &FixedPoint<W2, P2>) -> Option<Ordering> {
    Some(compare(*self, *other))
  }
}

impl<const W: u32, const P: i32>
PartialEq<f64> for FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// Compare with an `f64`, exactly (the value of `self` is always exactly an `f64`). Never equal
  /// to NaN.
  #[inline]
  fn eq(&self, other: &f64) -> bool {
    self.to_f64() == *other
  }
}

impl<const W: u32, const P: i32>
PartialOrd<f64> for FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// Compare with an `f64`, exactly. Unordered with respect to NaN.
  #[inline]
  fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
    self.to_f64().partial_cmp(other)
  }
}

impl<const W: u32, const P: i32>
PartialEq<FixedPoint<W, P>> for f64 where Width<W>: SupportedWidth {
  #[inline]
  fn eq(&self, other: &FixedPoint<W, P>) -> bool {
    *self == other.to_f64()
  }
}

impl<const W: u32, const P: i32>
PartialOrd<FixedPoint<W, P>> for f64 where Width<W>: SupportedWidth {
  #[inline]
  fn partial_cmp(&self, other: &FixedPoint<W, P>) -> Option<Ordering> {
    self.partial_cmp(&other.to_f64())
  }
}
