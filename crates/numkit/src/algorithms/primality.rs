//! Deterministic Miller-Rabin primality testing for 32-bit integers.
//!
//! ## Purpose
//!
//! This module classifies any `u32` as prime or composite. The test is the
//! probabilistic Miller-Rabin construction, made deterministic by a fixed
//! witness set.
//!
//! ## Design notes
//!
//! * **Witness set**: {2, 7, 61} is exact for every modulus below
//!   3,215,031,751, and no strong pseudoprime to all three bases exists in
//!   the remainder of the 32-bit range, so the classification is exact for
//!   every `u32` input.
//! * **Witness equal to modulus**: such a witness would always power to
//!   zero; it counts as an automatic pass. Only trivially small moduli can
//!   hit this case with the fixed bases.
//!
//! ## Invariants
//!
//! * Total over all `u32` inputs; no error path.

// Internal dependencies
use crate::math::modular::mod_pow;

/// Witness bases that make the test deterministic over the `u32` range.
const WITNESSES: [u32; 3] = [2, 7, 61];

// ============================================================================
// Witness Check
// ============================================================================

/// Check whether `witness` leaves `modulus` looking like a probable prime.
///
/// `odd_part` and `doublings` factor `modulus - 1` as
/// `odd_part * 2^doublings` with `odd_part` odd. The witness passes if
/// `witness^odd_part = 1 (mod modulus)` or if any of the repeated
/// squarings reaches `modulus - 1`.
fn witness_passes(witness: u64, odd_part: u64, doublings: u32, modulus: u64) -> bool {
    if witness == modulus {
        return true;
    }

    let mut k = mod_pow(witness, odd_part, modulus);
    if k == 1 || k == modulus - 1 {
        return true;
    }
    for _ in 1..doublings {
        k = k * k % modulus;
        if k == modulus - 1 {
            return true;
        }
    }
    false
}

// ============================================================================
// Classification
// ============================================================================

/// Classify `n` as prime (`true`) or composite (`false`).
///
/// Deterministic for the full `u32` range; `0` and `1` are composite.
///
/// # Example
///
/// ```rust
/// use numkit::prelude::*;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(3_215_031_751));
/// ```
pub fn is_prime(n: u32) -> bool {
    if n == 2 {
        return true;
    }
    if n & 1 == 0 || n == 1 {
        return false;
    }

    let modulus = u64::from(n);

    // Factor n - 1 as odd_part * 2^doublings with odd_part odd.
    let mut odd_part = modulus - 1;
    let mut doublings = 0;
    while odd_part & 1 == 0 {
        odd_part >>= 1;
        doublings += 1;
    }

    WITNESSES
        .iter()
        .all(|&w| witness_passes(u64::from(w), odd_part, doublings, modulus))
}
