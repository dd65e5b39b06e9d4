use super::*;

use core::fmt::{Debug, Display};

impl<
  const W: u32,
  const P: i32,
> Debug for FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// The format and the `W`-bit two's complement pattern of the significand.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.significand.mask_lsb(W);
    f.debug_tuple("FixedPoint")
      .field(&format_args!("{}", Self::FORMAT))
      .field(&format_args!("0b{bits:0w$b}", w=W as usize))
      .finish()
  }
}

impl<
  const W: u32,
  const P: i32,
> Display for FixedPoint<W, P> where Width<W>: SupportedWidth {
  /// The value, as printed for the equivalent `f64` (with the same formatting options).
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Display::fmt(&self.to_f64(), f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn debug() {
    assert_eq!(
      format!("{:?}", FixedPoint::<8, -4>::from_significand(0x31)).as_str(),
      "FixedPoint(<8, -4>, 0b00110001)",
    );
    assert_eq!(
      format!("{:?}", FixedPoint::<8, -4>::from_significand(-0x31)).as_str(),
      "FixedPoint(<8, -4>, 0b11001111)",
    );
    assert_eq!(
      format!("{:?}", FixedPoint::<40, 2>::from_significand(-1)).as_str(),
      "FixedPoint(<40, 2>, 0b1111111111111111111111111111111111111111)",
    );
  }

  #[test]
  fn display() {
    assert_eq!(FixedPoint::<8, -4>::from_significand(0x31).to_string(), "3.0625");
    assert_eq!(FixedPoint::<8, 3>::from_significand(-5).to_string(), "-40");
    assert_eq!(format!("{:.2}", FixedPoint::<8, -4>::from_significand(0x31)), "3.06");
  }
}
