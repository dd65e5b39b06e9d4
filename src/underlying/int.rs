use super::{Int, Sealed};

macro_rules! impl_common {
  ($int:ty, $uint:ty) => {
    type Unsigned = $uint;

    const ZERO: Self = 0;
    const BITS: u32 = <$int>::BITS;

    #[inline]
    fn of_i64(x: i64) -> Self {
      debug_assert!(Self::try_from(x).is_ok());
      x as $int
    }

    #[inline]
    fn mask_lsb(self, n: u32) -> $uint {
      let mask = (1 as $uint).checked_shl(n).unwrap_or(0).wrapping_sub(1);
      (self as $uint) & mask
    }
  }
}

impl Int for i32 {}
impl Sealed for i32 {
  impl_common!{i32, u32}
}

impl Int for i64 {}
impl Sealed for i64 {
  impl_common!{i64, u64}
}
