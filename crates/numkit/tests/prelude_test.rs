//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for
//! ordinary use of the crate: the three sorting entry points, the
//! primality test, the fast exponential, and the error type.

use numkit::prelude::*;

/// Test that all prelude imports are accessible together.
#[test]
fn test_prelude_imports() {
    let mut unsigned = vec![2_u32, 1];
    sort(&mut unsigned).unwrap();

    let mut signed = vec![1_i32, -1];
    sort_signed(&mut signed).unwrap();

    let mut floats = vec![1.0_f32, -1.0];
    sort_float(&mut floats).unwrap();

    assert_eq!(unsigned, [1, 2]);
    assert_eq!(signed, [-1, 1]);
    assert_eq!(floats, [-1.0, 1.0]);
    assert!(is_prime(13));
    assert_eq!(exp2_approx(3.0), 8.0);
}

/// Test that the error type is usable from the prelude.
#[test]
fn test_prelude_error_type() {
    let err = SortError::ScratchAllocation { len: 64 };

    // Matchable and displayable without extra imports.
    match err {
        SortError::ScratchAllocation { len } => assert_eq!(len, 64),
    }
    assert!(err.to_string().contains("64"));
}
