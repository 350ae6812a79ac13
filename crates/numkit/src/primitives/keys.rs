//! Order-preserving key transforms for radix sorting.
//!
//! ## Purpose
//!
//! This module provides bit-level re-encodings that map signed integers and
//! IEEE-754 single-precision floats onto `u32` keys whose unsigned order
//! matches the source type's natural order. The radix sorter only ever
//! compares unsigned digit slices, so these transforms are what extend it
//! to `i32` and `f32` buffers.
//!
//! ## Design notes
//!
//! * **Signed integers**: adding 2^31 (wrapping) flips the sign bit, which
//!   makes two's-complement order coincide with unsigned order. The
//!   transform is its own inverse.
//! * **Floats**: negative values have the whole word complemented, which
//!   reverses their magnitude order; non-negative values only get the sign
//!   bit set. The decode mask is derived from the complement of the
//!   *encoded* key's top bit, not from the original sign.
//!
//! ## Invariants
//!
//! * Both transforms are bijections on the 32-bit word; decoding an encoded
//!   key recovers the original bit pattern exactly.
//! * For non-NaN floats, `a < b` implies `float_to_key(a) < float_to_key(b)`.
//! * `-0.0` encodes strictly below `+0.0`.
//!
//! ## Non-goals
//!
//! * NaN payloads are not ordered to either end of the key space; where a
//!   NaN lands among the encoded keys is unspecified.

/// Sign bit of a 32-bit word.
pub const SIGN_BIT: u32 = 0x8000_0000;

// ============================================================================
// Signed Integer Keys
// ============================================================================

/// Map a signed integer onto a `u32` key with matching unsigned order.
#[inline]
pub fn signed_to_key(value: i32) -> u32 {
    (value as u32).wrapping_add(SIGN_BIT)
}

/// Invert [`signed_to_key`]. Adding 2^31 again undoes the shift mod 2^32.
#[inline]
pub fn key_to_signed(key: u32) -> i32 {
    key.wrapping_add(SIGN_BIT) as i32
}

// ============================================================================
// Float Keys
// ============================================================================

/// Map a float onto a `u32` key with matching unsigned order.
///
/// The arithmetic right shift smears the sign bit across the word, so
/// negative inputs complement every bit while non-negative inputs flip
/// only the sign.
#[inline]
pub fn float_to_key(value: f32) -> u32 {
    let bits = value.to_bits();
    let mask = (((bits as i32) >> 31) as u32) | SIGN_BIT;
    bits ^ mask
}

/// Invert [`float_to_key`].
///
/// The mask is recovered from the complement of the encoded key's top bit:
/// a clear top bit means the original was negative and every bit flips
/// back, a set top bit means only the sign flip is undone.
#[inline]
pub fn key_to_float(key: u32) -> f32 {
    let mask = (((!key as i32) >> 31) as u32) | SIGN_BIT;
    f32::from_bits(key ^ mask)
}
