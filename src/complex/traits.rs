use super::*;
use core::fmt::{Debug, Display, Write};
use core::hash::Hash;

// Same as for `FixedPoint`: the derives would require bounds on the significand types that we
// can't express, so these are written out.

impl<const W: u32, const P: i32>
Clone for Complex<W, P> where Width<W>: SupportedWidth {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<const W: u32, const P: i32>
Copy for Complex<W, P> where Width<W>: SupportedWidth {}

impl<const W: u32, const P: i32>
Default for Complex<W, P> where Width<W>: SupportedWidth {
  /// Zero.
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl<const W: u32, const P: i32>
Hash for Complex<W, P> where Width<W>: SupportedWidth {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.re.hash(state);
    self.im.hash(state);
  }
}

impl<
  const W: u32,
  const P: i32,
  const W2: u32,
  const P2: i32,
> PartialEq<Complex<W2, P2>> for Complex<W, P>
where Width<W>: SupportedWidth, Width<W2>: SupportedWidth {
  /// Both parts are equal, as in the (exact, cross-format) comparison of [`FixedPoint`]s.
  #[inline]
  fn eq(&self, other: &Complex<W2, P2>) -> bool {
    self.re == other.re && self.im == other.im
  }
}

impl<const W: u32, const P: i32>
Eq for Complex<W, P> where Width<W>: SupportedWidth {}

impl<
  const W: u32,
  const P: i32,
> Debug for Complex<W, P> where Width<W>: SupportedWidth {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Complex")
      .field("re", &self.re)
      .field("im", &self.im)
      .finish()
  }
}

impl<
  const W: u32,
  const P: i32,
> Display for Complex<W, P> where Width<W>: SupportedWidth {
  /// `re+imi` or `re-imi`, each part printed as the equivalent `f64` (with the same formatting
  /// options).
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Display::fmt(&self.re, f)?;
    if self.im >= FixedPoint::<W, P>::ZERO {
      f.write_char('+')?;
    }
    Display::fmt(&self.im, f)?;
    f.write_char('i')
  }
}
