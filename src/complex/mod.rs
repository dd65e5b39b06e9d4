//! [`Complex`], a complex number made of two [`FixedPoint`] parts of the same format.
//!
//! Every operation is the scalar one applied to each part, or the usual complex algebra built from
//! the scalar operations; so the format of each result is derived by the same rules as for
//! `FixedPoint`, and is checked at compile time in the same way.

use crate::fixed::{FixedPoint, Format};
use crate::underlying::{SupportedWidth, Width};

/// A complex number whose real and imaginary parts are both `FixedPoint<W, P>`.
///
/// ```
/// # use prec_ctrl::{Complex, FixedPoint};
/// let a = Complex::<8, -4>::from_f64(1.5, -2.25);
/// let b = Complex::<7, -5>::from_f64(0.5, 0.75);
/// let c: Complex<15, -9> = a.mul(b);
/// assert_eq!(c.to_f64(), (1.5 * 0.5 + 2.25 * 0.75, 1.5 * 0.75 - 2.25 * 0.5));
/// ```
pub struct Complex<
  const W: u32,
  const P: i32,
> where Width<W>: SupportedWidth {
  re: FixedPoint<W, P>,
  im: FixedPoint<W, P>,
}

/// Construction, access, conversions.
mod basics;

/// Arithmetic and the complex-specific functions (`norm`, `conj`, etc).
mod ops;

/// The rounding family, lifted over both parts.
mod round;

/// Manual trait implementations, debug and display.
mod traits;

pub use ops::norm;
