use crate::underlying::{MAX_MSB_PLACE, MAX_WIDTH, MIN_LSB_PLACE, MIN_WIDTH};

/// The format of a [`FixedPoint`](crate::FixedPoint): its bit `width` and the `place` of its LSB.
///
/// All functions here are `const`, since their main use is deriving the format of the result of
/// an operation *at compile time*. For example, the sum of a `FixedPoint<8, -4>` and a
/// `FixedPoint<7, -5>` is a `FixedPoint<10, -5>`:
///
/// ```
/// # use prec_ctrl::Format;
/// const SUM: Format = Format::new(8, -4).sum(Format::new(7, -5));
/// assert_eq!(SUM, Format::new(10, -5));
/// ```
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct Format {
  pub width: u32,
  pub place: i32,
}

const fn max(a: i32, b: i32) -> i32 { if a > b { a } else { b } }
const fn min(a: i32, b: i32) -> i32 { if a < b { a } else { b } }

impl Format {
  #[inline]
  pub const fn new(width: u32, place: i32) -> Self {
    Self { width, place }
  }

  /// One past the place of the most significant bit, `width + place`.
  #[inline]
  pub const fn msb(self) -> i32 {
    self.width as i32 + self.place
  }

  /// Whether a [`FixedPoint`](crate::FixedPoint) can have this format: width within
  /// `2 ..= 54`, place at least `-1022`, and `width + place` at most `1024`.
  pub const fn is_valid(self) -> bool {
    self.width >= MIN_WIDTH
      && self.width <= MAX_WIDTH
      && self.place >= MIN_LSB_PLACE
      && self.msb() <= MAX_MSB_PLACE
  }

  /// `==`, but usable in `const` contexts.
  #[inline]
  pub const fn same_as(self, other: Self) -> bool {
    self.width == other.width && self.place == other.place
  }

  /// Whether every value of `self` is exactly representable in `other`, that is, whether `self`
  /// starts no lower and ends no higher than `other`.
  ///
  /// ```
  /// # use prec_ctrl::Format;
  /// assert!(Format::new(8, -4).is_narrower_than(Format::new(9, -5)));
  /// assert!(Format::new(8, -4).is_narrower_than(Format::new(8, -4)));
  /// assert!(!Format::new(8, -4).is_narrower_than(Format::new(9, -4)));
  /// ```
  #[inline]
  pub const fn is_narrower_than(self, other: Self) -> bool {
    self.place >= other.place && self.msb() <= other.msb()
  }

  /// The smallest format containing both `self` and `other`, plus `extra` bits on top.
  const fn superset_with(self, other: Self, extra: u32) -> Self {
    let place = min(self.place, other.place);
    let width = (max(self.msb(), other.msb()) - place) as u32 + extra;
    Self::new(width, place)
  }

  /// The smallest format that holds every value of both `self` and `other`.
  #[inline]
  pub const fn superset(self, other: Self) -> Self {
    self.superset_with(other, 0)
  }

  /// The format of the sum (or difference) of values of formats `self` and `other`.
  ///
  /// This is the [superset](Self::superset) of both, plus one carry bit, except when the two
  /// don't overlap (the LSB of one is at or above the sign bit of the other): then the sum never
  /// carries out of the superset.
  pub const fn sum(self, other: Self) -> Self {
    let disjoint = self.place >= other.msb() - 1 || other.place >= self.msb() - 1;
    self.superset_with(other, if disjoint {0} else {1})
  }

  /// The format of the product of values of formats `self` and `other`: widths add (minus the
  /// duplicate sign bit), places add.
  #[inline]
  pub const fn product(self, other: Self) -> Self {
    Self::new(self.width + other.width - 1, self.place + other.place)
  }

  /// The format of a value of format `self` after rounding to integer multiples of `2^lsb`,
  /// where `extra` is the number of bits that rounding may carry into (1 for rounding up or to
  /// nearest, 0 for truncating toward 0).
  ///
  /// If `self` is already at place `lsb` or coarser, it is unchanged. If the whole of `self` is
  /// below `lsb`, the result only holds `0` and `±2^lsb`.
  pub const fn rounded(self, extra: u32, lsb: i32) -> Self {
    if self.place >= lsb {
      self
    } else if self.msb() <= 1 + lsb {
      Self::new(if 1 + extra > MIN_WIDTH { 1 + extra } else { MIN_WIDTH }, lsb)
    } else {
      Self::new((self.msb() - lsb) as u32 + extra, lsb)
    }
  }
}

impl core::fmt::Display for Format {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "<{}, {}>", self.width, self.place)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sum(a: (u32, i32), b: (u32, i32)) -> Format {
    Format::new(a.0, a.1).sum(Format::new(b.0, b.1))
  }

  #[test]
  fn sum_overlapping() {
    assert_eq!(sum((8, -4), (7, -5)), Format::new(10, -5));
    assert_eq!(sum((13, -10), (7, 1)), Format::new(19, -10));
    assert_eq!(sum((10, -8), (5, -4)), Format::new(11, -8));
  }

  #[test]
  fn sum_disjoint() {
    assert_eq!(sum((10, -10), (7, 4)), Format::new(21, -10));
    assert_eq!(sum((10, -10), (7, -1)), Format::new(16, -10));
    assert_eq!(sum((7, -1), (10, -10)), Format::new(16, -10));
  }

  #[test]
  fn sum_is_symmetric() {
    for (a, b) in [((8, -4), (7, -5)), ((10, -10), (7, 4)), ((3, 20), (40, -30))] {
      assert_eq!(sum(a, b), sum(b, a));
    }
  }

  #[test]
  fn product() {
    assert_eq!(Format::new(8, -4).product(Format::new(7, -5)), Format::new(14, -9));
    assert_eq!(Format::new(8, 1).product(Format::new(8, 2)), Format::new(15, 3));
  }

  #[test]
  fn rounded() {
    assert_eq!(Format::new(8, -4).rounded(1, 0), Format::new(5, 0));
    assert_eq!(Format::new(8, -4).rounded(0, 0), Format::new(4, 0));
    assert_eq!(Format::new(16, -8).rounded(1, 0), Format::new(9, 0));
    assert_eq!(Format::new(8, -10).rounded(1, 0), Format::new(2, 0));
    assert_eq!(Format::new(8, -10).rounded(0, 0), Format::new(2, 0));
    assert_eq!(Format::new(8, 3).rounded(1, 0), Format::new(8, 3));
    assert_eq!(Format::new(33, -1).rounded(1, 0), Format::new(33, 0));
  }

  #[test]
  fn narrower() {
    let f = Format::new(8, -4);
    assert!(f.is_narrower_than(f));
    assert!(f.is_narrower_than(Format::new(10, -4)));
    assert!(!f.is_narrower_than(Format::new(10, -3)));
    assert!(!Format::new(10, -4).is_narrower_than(f));
  }

  #[test]
  fn validity() {
    assert!(Format::new(2, -1022).is_valid());
    assert!(Format::new(2, 1022).is_valid());
    assert!(Format::new(10, 1014).is_valid());
    assert!(Format::new(54, 0).is_valid());
    assert!(!Format::new(2, -1023).is_valid());
    assert!(!Format::new(2, 1023).is_valid());
    assert!(!Format::new(55, 0).is_valid());
    assert!(!Format::new(1, 0).is_valid());
  }

  #[test]
  fn display() {
    assert_eq!(Format::new(8, -4).to_string(), "<8, -4>");
  }
}
