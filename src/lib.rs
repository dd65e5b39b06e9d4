#![cfg_attr(not(any(test, feature = "std")), no_std)]
//! This crate provides exact, precision-tracked fixed-point arithmetic, for modelling the
//! datapath of a hardware design (or any computation with an explicit bit budget) in software.
//!
//! # Introduction
//!
//! A [`FixedPoint<W, P>`](FixedPoint) is a `W`-bit signed integer significand `s`, standing for
//! the value `s × 2^P`. The *width* `W` counts the sign bit; the *place* `P` is the binary place
//! (the exponent of the weight) of the least significant bit. Both are compile-time parameters.
//!
//! Every format is bounded by IEEE754 double: at most 54 bits wide (the 53 significant bits of an
//! `f64` plus the sign), with all its bits in the range of normal `f64`s. So every value converts
//! to `f64` exactly, and an `f64` computation can be used to check a fixed-point one (see
//! [`limit_precision`]).
//!
//! Arithmetic is *exact*: the result of `+`, `-`, `×` has a format wide enough to hold any result
//! of the operands' formats, and that format is checked at compile time (see [`Format`] for the
//! rules). Precision is only ever dropped explicitly, by rounding to a coarser place with one of
//! the rounding functions, or clamping to a narrower width with
//! [`reduce_dynamic_range`](FixedPoint::reduce_dynamic_range).
//!
//! # Usage
//!
//! ```
//! use prec_ctrl::{FixedPoint, Complex, RoundingMode, with_rounding_mode};
//!
//! // Create values from f64s (rounding according to the ambient rounding mode, and saturating)
//! // or from raw significands.
//! let a = FixedPoint::<8, -4>::from_f64(3.0625);
//! let b = FixedPoint::<7, -5>::from_significand(-40);
//!
//! // Arithmetic is exact; the result type must be the one derived from the operand types.
//! let sum: FixedPoint<10, -5> = a.add(b);
//! let product: FixedPoint<14, -9> = a.mul(b);
//! assert_eq!(sum.to_f64(), 3.0625 - 1.25);
//! assert_eq!(product.to_f64(), 3.0625 * -1.25);
//!
//! // Drop precision explicitly, to a place given by the result type.
//! let rounded: FixedPoint<7, -1> = product.round_half_to_even();
//! assert_eq!(rounded.to_f64(), -4.0);
//!
//! // Comparisons work across formats, and with f64.
//! assert!(rounded < a);
//! assert!(a == 3.0625_f64);
//!
//! // The ambient rounding mode applies to conversions from f64.
//! let c = with_rounding_mode(RoundingMode::TowardNegative, || FixedPoint::<8, 0>::from_f64(2.9));
//! assert_eq!(c.to_f64(), 2.0);
//!
//! // Complex numbers follow the same rules.
//! let z = Complex::<8, -4>::from_f64(1.5, -2.0);
//! let w: Complex<16, -8> = z.mul(z.conj());
//! assert_eq!(w.to_f64(), (6.25, 0.0));
//! ```
//!
//! # Features
//!
//! - `std` (default): the ambient rounding mode is per thread (otherwise it's a single global),
//!   and [`limit_precision`] is available.
//! - `bench`: exposes some internals for the benchmarks; run them with `cargo bench -F bench`.

mod underlying;
mod rounding_mode;
mod limit;
mod fixed;
mod complex;
mod accumulate;
mod error;

pub use fixed::{FixedPoint, Format};
pub use complex::{Complex, norm};
pub use underlying::{Int, Significand, SupportedWidth, Width};
pub use underlying::{MAX_MSB_PLACE, MAX_WIDTH, MIN_LSB_PLACE, MIN_WIDTH};

pub use fixed::{RoundFrom, RoundInto};
pub use rounding_mode::{RoundingMode, rounding_mode, set_rounding_mode, with_rounding_mode};

pub use limit::{clamp, to_significand, to_significand_with};
#[cfg(feature = "std")]
pub use limit::limit_precision;

pub use accumulate::{Accumulator, clamp_adder, exact_adder, int_adder, significand_adder};
pub use error::Overflow;

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
pub mod bench;

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x4_0000};
