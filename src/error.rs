/// The error returned by [`exact_adder`](crate::exact_adder) when the sum doesn't fit in the
/// accumulator.
///
/// ```
/// # use prec_ctrl::Overflow;
/// assert_eq!(
///   Overflow { width: 12 }.to_string(),
///   "accumulator overflow: sum does not fit in 12 bits",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("accumulator overflow: sum does not fit in {width} bits")]
pub struct Overflow {
  /// The width of the accumulator.
  pub width: u32,
}
