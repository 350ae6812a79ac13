//! Tests for the deterministic Miller-Rabin primality test.
//!
//! These tests verify the classification over the full `u32` range:
//! - Known primes and composites, including the largest prime below 2^32
//! - Agreement with trial division on an exhaustive small range
//! - Carmichael numbers and strong pseudoprimes that defeat weaker tests
//!
//! ## Test Organization
//!
//! 1. **Known Values** - fixed classifications
//! 2. **Exhaustive Small Range** - cross-check against trial division
//! 3. **Adversarial Composites** - pseudoprime families

use numkit::prelude::*;

/// Reference classification by trial division.
fn trial_division(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2_u32;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

// ============================================================================
// Known Value Tests
// ============================================================================

/// Test the smallest inputs, including the even-prime special case.
#[test]
fn test_small_inputs() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(is_prime(2));
    assert!(is_prime(3));
    assert!(!is_prime(4));
    assert!(is_prime(5));
    assert!(is_prime(97));
}

/// Test that every witness base is itself classified prime.
#[test]
fn test_witness_bases_are_prime() {
    assert!(is_prime(2));
    assert!(is_prime(7));
    assert!(is_prime(61));
}

/// Test well-known large primes.
#[test]
fn test_large_primes() {
    // Largest prime below 2^32.
    assert!(is_prime(4_294_967_291));
    // 2^31 - 1, the eighth Mersenne prime.
    assert!(is_prime(2_147_483_647));
    assert!(is_prime(1_000_000_007));
    assert!(is_prime(999_999_937));
    assert!(is_prime(15_485_863));
    assert!(is_prime(104_729));
}

/// Test well-known large composites.
#[test]
fn test_large_composites() {
    // 2^32 - 1 = 3 * 5 * 17 * 257 * 65537.
    assert!(!is_prime(4_294_967_295));
    // Squares of primes.
    assert!(!is_prime(65_521 * 65_521));
    assert!(!is_prime(46_337 * 46_337));
    // Product of two large primes.
    assert!(!is_prime(1_000_003 * 4_093));
}

/// Test the strong pseudoprime to bases {2, 3, 5, 7} that sits just above
/// the deterministic bound of smaller witness sets.
///
/// 3,215,031,751 = 151 * 751 * 28351 must be classified composite.
#[test]
fn test_spsp_2357_edge_case() {
    assert!(!is_prime(3_215_031_751));
}

// ============================================================================
// Exhaustive Small Range Tests
// ============================================================================

/// Test agreement with trial division over an exhaustive range.
#[test]
fn test_exhaustive_against_trial_division() {
    for n in 0..=10_000_u32 {
        assert_eq!(
            is_prime(n),
            trial_division(n),
            "classification mismatch at n = {n}"
        );
    }
}

/// Test agreement with trial division across a band of larger values.
#[test]
fn test_banded_against_trial_division() {
    for n in 1_000_000..=1_001_000_u32 {
        assert_eq!(
            is_prime(n),
            trial_division(n),
            "classification mismatch at n = {n}"
        );
    }
}

// ============================================================================
// Adversarial Composite Tests
// ============================================================================

/// Test that Carmichael numbers are classified composite.
///
/// These fool every Fermat test but not Miller-Rabin.
#[test]
fn test_carmichael_numbers() {
    for n in [561_u32, 1_105, 1_729, 2_465, 2_821, 6_601, 41_041, 825_265] {
        assert!(!is_prime(n), "Carmichael number {n} passed as prime");
    }
}

/// Test that strong pseudoprimes to base 2 alone are still rejected.
///
/// The additional witnesses 7 and 61 exist precisely for these.
#[test]
fn test_strong_pseudoprimes_base_2() {
    for n in [2_047_u32, 3_277, 4_033, 4_681, 8_321, 15_841, 29_341] {
        assert!(!is_prime(n), "base-2 strong pseudoprime {n} passed as prime");
    }
}
