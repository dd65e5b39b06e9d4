use super::{SupportedWidth, Width};

macro_rules! impl_width {
  ($int:ty => $($w:literal)*) => {
    $(
      impl SupportedWidth for Width<$w> {
        type Significand = $int;
      }
    )*
  };
}

impl_width!{i32 =>
      2  3  4  5  6  7  8  9 10 11 12 13 14 15 16
  17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
}

impl_width!{i64 =>
  33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
  49 50 51 52 53 54
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::underlying::{MAX_WIDTH, Sealed};

  /// Every supported width fits in its storage type with room for the sign.
  #[test]
  fn storage_holds_width() {
    fn check<const W: u32>() where Width<W>: SupportedWidth {
      assert!(W <= <<Width<W> as SupportedWidth>::Significand as Sealed>::BITS);
      assert!(W <= MAX_WIDTH);
    }
    check::<2>();
    check::<31>();
    check::<32>();
    check::<33>();
    check::<53>();
    check::<54>();
  }
}
