//! Fast base-2 exponential approximation.
//!
//! ## Purpose
//!
//! This module approximates `2^x` for `f64` inputs by splitting the
//! argument into an integer part and a residual in `[-0.5, 0.5]`, running a
//! minimax polynomial on the residual, and folding the integer part
//! straight into the IEEE-754 exponent field of the polynomial result.
//!
//! ## Design notes
//!
//! * **Range reduction**: `x = n + z` with `n` rounded ties-to-even, so the
//!   polynomial only ever sees `z` in `[-0.5, 0.5]` and its value stays
//!   inside `[~0.707, ~1.414]`.
//! * **Exponent injection**: adding `n << 52` to the result's bit pattern
//!   multiplies by `2^n` without a second floating-point operation. The
//!   underflow/overflow clamps keep the adjusted exponent inside the
//!   normal-double range.
//!
//! ## Invariants
//!
//! * Total over all `f64` inputs: NaN propagates, inputs below `-1022`
//!   return `0.0`, inputs at or above `1024` return `+inf`.

// Internal dependencies
use crate::math::poly::horner;

// ============================================================================
// Constants
// ============================================================================

/// Inputs below this underflow to zero; beneath it the exponent injection
/// would leave the normal-double range.
const UNDERFLOW_FLOOR: f64 = -1022.0;

/// Inputs at or above this overflow to +infinity.
const OVERFLOW_CEIL: f64 = 1024.0;

/// Minimax coefficients for `2^z` on `[-0.5, 0.5]`, highest degree first.
const EXP2_COEFFS: [f64; 12] = [
    4.457533149527563e-10,
    7.074194542204488e-09,
    1.0178045295522382e-07,
    1.321543253438167e-06,
    1.5252733871037077e-05,
    1.5403530463727703e-04,
    1.3333558146374227e-03,
    9.618129107587253e-03,
    5.550410866482177e-02,
    2.4022650695910158e-01,
    6.931471805599453e-01,
    1.0,
];

/// 1.5 * 2^52. Shifting a value of magnitude below 2^51 through the binade
/// where the unit in the last place is exactly one makes the hardware's
/// round-to-nearest-even produce the integer part.
const ROUND_SHIFT: f64 = 6_755_399_441_055_744.0;

// ============================================================================
// Evaluation
// ============================================================================

/// Round to the nearest integer, ties to even.
#[inline]
fn round_ties_even(x: f64) -> f64 {
    (x + ROUND_SHIFT) - ROUND_SHIFT
}

/// Approximate `2^x`.
///
/// Accuracy is within a few ULP of a correctly-rounded `exp2` across the
/// full `[-1022, 1024)` range. NaN inputs are returned unchanged; inputs
/// outside the representable exponent range saturate to `0.0` or `+inf`.
///
/// # Example
///
/// ```rust
/// use numkit::prelude::*;
///
/// assert_eq!(exp2_approx(10.0), 1024.0);
/// assert_eq!(exp2_approx(-1023.0), 0.0);
/// assert_eq!(exp2_approx(1024.0), f64::INFINITY);
/// ```
pub fn exp2_approx(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x < UNDERFLOW_FLOOR {
        return 0.0;
    }
    if x >= OVERFLOW_CEIL {
        return f64::INFINITY;
    }

    let n = round_ties_even(x);
    let z = x - n;

    // 2^z for z in [-0.5, 0.5].
    let v = horner(&EXP2_COEFFS, z);

    // Fold n into the exponent field instead of multiplying by 2^n.
    let bits = (v.to_bits() as i64) + ((n as i64) << 52);
    f64::from_bits(bits as u64)
}
