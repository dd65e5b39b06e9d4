//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::{FixedPoint, RoundingMode};

/// Round `x × 2^exp` to an integer according to `mode`, saturating at `±2^62`.
#[inline]
pub fn nearby_int(x: f64, exp: i32, mode: RoundingMode) -> i64 {
  crate::underlying::nearby_int(x, exp, mode)
}

/// Round `significand × 2^-shift` to an integer according to `mode`.
#[inline]
pub fn round_significand(significand: i64, shift: u32, mode: RoundingMode) -> i64 {
  crate::fixed::round_significand(significand, shift, mode)
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn from_f64_16(x: f64) -> FixedPoint<16, -8> {
  FixedPoint::from_f64_with(x, RoundingMode::NearestTiesToEven)
}

#[unsafe(no_mangle)]
pub fn from_f64_48(x: f64) -> FixedPoint<48, -24> {
  FixedPoint::from_f64_with(x, RoundingMode::NearestTiesToEven)
}

#[unsafe(no_mangle)]
pub fn mul_16(x: FixedPoint<16, -8>, y: FixedPoint<16, -8>) -> FixedPoint<31, -16> {
  x.mul(y)
}

#[unsafe(no_mangle)]
pub fn add_16(x: FixedPoint<16, -8>, y: FixedPoint<16, -8>) -> FixedPoint<17, -8> {
  x.add(y)
}

#[unsafe(no_mangle)]
pub fn round_31_to_24(x: FixedPoint<31, -16>) -> FixedPoint<24, -8> {
  x.round_half_to_even()
}

#[unsafe(no_mangle)]
pub fn int_adder_32(accumulator: i32, x: FixedPoint<16, -8>) -> i32 {
  crate::int_adder::<32, 16, -8>(accumulator, x)
}

#[unsafe(no_mangle)]
pub fn clamp_adder_32(accumulator: i32, x: FixedPoint<16, -8>) -> i32 {
  crate::clamp_adder::<32, 16, -8>(accumulator, x)
}
