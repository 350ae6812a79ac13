//! Modular exponentiation.

/// Compute `base ^ exp (mod modulus)`.
///
/// Fixed 32-round square-and-multiply: 31 squarings cover every exponent
/// that fits in 32 bits. Intermediate products are held in `u64`, which
/// cannot overflow as long as `modulus` (and an unreduced `base`) stay
/// within 32 bits.
///
/// `exp == 0` yields 1 for any base.
pub fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    debug_assert!(modulus != 0);
    debug_assert!(modulus <= 1 << 32);
    debug_assert!(base <= u64::from(u32::MAX));

    let mut result = 1;
    for _ in 0..31 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        exp >>= 1;
        base = base * base % modulus;
    }
    if exp & 1 == 1 {
        result = result * base % modulus;
    }
    result
}
