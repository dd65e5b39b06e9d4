//! This module and its submodules contain [`FixedPoint`], an exact fixed-point number whose format
//! (bit width and place of the least significant bit) is part of its type.
//!
//! Some notation used in the comments:
//!
//!   - **Width `W`**: number of bits in the two's complement significand, sign included.
//!   - **Place `P`**: the power of two of the significand's LSB, so that the value of a number is
//!     `significand × 2^P`.
//!   - **MSB place**: `W + P`, one past the power of two of the most significant bit. Values of a
//!     format lie strictly between `-2^(W+P-1)` and `2^(W+P-1)`.
//!   - **Format**: a `(W, P)` pair, see [`Format`].
//!
//! Formats are checked at compile time: a type whose place is out of range, or an operation whose
//! result is annotated with a format other than the one derived from its operands, fails to
//! build. Every value also converts to `f64` exactly.

use crate::underlying::{Sealed, Significand, SupportedWidth, Width};

/// An exact fixed-point number, stored as a `W`-bit two's complement significand with its least
/// significant bit at place `P` (i.e. its value is `significand × 2^P`).
///
/// The significand is kept in `[-(2^(W-1) - 1), 2^(W-1) - 1]`; the most negative two's complement
/// value is never produced, so negation never overflows. `W` ranges over `2 ..= 54`, and formats
/// must satisfy `P ≥ -1022` and `W + P ≤ 1024`, so that every value is a normal (or zero) `f64`.
///
/// Examples:
///
/// ```
/// # use prec_ctrl::FixedPoint;
/// type Foo = FixedPoint<8, -4>;  // 8 bits, 4 of them after the binary point: -7.9375 ..= 7.9375
/// type Bar = FixedPoint<16, 2>;  // 16 bits, multiples of 4 only
///
/// let x = Foo::from_f64(3.0625);
/// assert_eq!(x.significand(), 0x31);
/// assert_eq!(x.to_f64(), 3.0625);
/// ```
///
/// Arithmetic never rounds; the result's format is derived from the operands', and the type of
/// the result must be written down (or inferred) as exactly that format:
///
/// ```
/// # use prec_ctrl::FixedPoint;
/// let a = FixedPoint::<8, -4>::from_f64(3.0625);
/// let b = FixedPoint::<7, -5>::from_f64(-1.5);
/// let c: FixedPoint<10, -5> = a.add(b);
/// let d: FixedPoint<14, -9> = a.mul(b);
/// assert_eq!(c.to_f64(), 1.5625);
/// assert_eq!(d.to_f64(), -4.59375);
/// ```
pub struct FixedPoint<
  const W: u32,
  const P: i32,
> where Width<W>: SupportedWidth {
  significand: Significand<W>,
}

/// Basics: constants, raw access, exact re-formatting.
mod basics;

/// The compile-time format algebra.
mod format;

/// Conversions from and to `f64`, `f32`, `bool`.
mod convert;

/// Addition, subtraction, multiplication, negation.
mod ops;

/// The rounding functions (`ceil`, `floor`, `trunc`, and the five round-to-nearest variants).
mod round;

/// Manual trait implementations, comparisons.
mod traits;

/// Debug and display.
mod fmt;


/// Rational oracle for tests.
#[cfg(test)]
pub(crate) mod rational;

pub use format::Format;
pub use convert::{RoundFrom, RoundInto};
#[cfg(feature = "bench")]
pub(crate) use round::round_significand;
