//! Polynomial evaluation.

// External dependencies
use num_traits::Float;

/// Evaluate a polynomial by Horner's rule.
///
/// `coeffs` is ordered from the highest-degree term down to the constant
/// term. An empty coefficient slice evaluates to zero.
#[inline]
pub fn horner<T: Float>(coeffs: &[T], x: T) -> T {
    let mut acc = T::zero();
    for &c in coeffs.iter() {
        acc = acc * x + c;
    }
    acc
}
