//! Three-pass LSB radix sorting for 32-bit values.
//!
//! ## Purpose
//!
//! This module sorts buffers of `u32`, `i32`, and `f32` in linear time
//! using least-significant-digit radix passes with counting-sort buckets.
//! The signed and float entry points reduce to the unsigned core through
//! the order-preserving key transforms in the primitives layer.
//!
//! ## Design notes
//!
//! * **Digit split**: the 32-bit key is consumed as 11 + 11 + 10 bits, so
//!   the two low passes use 2048 buckets and the top pass uses 1024.
//! * **Single tally**: all three histograms are filled in one pass over
//!   the input before any scattering starts.
//! * **Stability**: each scatter walks its input back to front with
//!   pre-decremented bucket cursors, so elements with equal digits keep
//!   their relative order and later passes cannot disturb the order
//!   settled by earlier ones.
//! * **Ping-pong**: passes alternate between the caller's buffer and a
//!   scratch buffer. A flag tracks which buffer currently holds the data,
//!   and the result is copied back only when the final pass left it in
//!   scratch.
//!
//! ## Invariants
//!
//! * The output is a permutation of the input, non-decreasing under the
//!   element type's natural order.
//! * On error the caller's buffer has not been touched.
//!
//! ## Non-goals
//!
//! * NaN ordering: where NaN payloads land in a sorted `f32` buffer is
//!   unspecified.
//! * Payload sorting: only plain values are sorted; there is no key-value
//!   variant.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::keys::{float_to_key, key_to_float, key_to_signed, signed_to_key};

// ============================================================================
// Digit Geometry
// ============================================================================

/// Bits consumed by each of the two low passes.
const DIGIT_BITS: u32 = 11;

/// Bucket count for the two low passes.
const LOW_BUCKETS: usize = 1 << DIGIT_BITS;

/// Bucket count for the top pass (the remaining 10 bits).
const TOP_BUCKETS: usize = 1 << (32 - 2 * DIGIT_BITS);

// ============================================================================
// Unsigned Core
// ============================================================================

/// Sort a `u32` buffer ascending in place.
///
/// Allocates a transient scratch buffer of the same length; the only
/// failure mode is exhaustion of that allocation, reported before the
/// input is mutated. Empty and single-element buffers return immediately.
///
/// # Example
///
/// ```rust
/// use numkit::prelude::*;
///
/// let mut data = vec![3_u32, u32::MAX, 0, 7];
/// sort(&mut data)?;
/// assert_eq!(data, [0, 3, 7, u32::MAX]);
/// # Result::<(), SortError>::Ok(())
/// ```
pub fn sort(values: &mut [u32]) -> Result<(), SortError> {
    if values.len() <= 1 {
        return Ok(());
    }

    let mut scratch = alloc_words(values.len())?;
    scratch.resize(values.len(), 0);

    let mut low = [0_usize; LOW_BUCKETS];
    let mut mid = [0_usize; LOW_BUCKETS];
    let mut top = [0_usize; TOP_BUCKETS];

    // One pass over the input fills all three digit histograms.
    for &value in values.iter() {
        low[value as usize & (LOW_BUCKETS - 1)] += 1;
        mid[(value >> DIGIT_BITS) as usize & (LOW_BUCKETS - 1)] += 1;
        top[(value >> (2 * DIGIT_BITS)) as usize] += 1;
    }

    accumulate(&mut low);
    accumulate(&mut mid);
    accumulate(&mut top);

    // Alternate between the caller's buffer and scratch; `in_place` tracks
    // whether the data currently lives in the caller's buffer.
    let mut in_place = true;
    let passes: [(&mut [usize], u32); 3] = [
        (&mut low, 0),
        (&mut mid, DIGIT_BITS),
        (&mut top, 2 * DIGIT_BITS),
    ];
    for (cursors, shift) in passes {
        if in_place {
            scatter(values, &mut scratch, cursors, shift);
        } else {
            scatter(&scratch, values, cursors, shift);
        }
        in_place = !in_place;
    }

    // Odd pass count: the data ended up in scratch and must come home.
    if !in_place {
        values.copy_from_slice(&scratch);
    }
    Ok(())
}

/// Convert a histogram into cumulative counts (each bucket's end offset).
fn accumulate(counts: &mut [usize]) {
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }
}

/// Scatter one digit pass from `src` into `dst`.
///
/// Walking the input back to front with pre-decremented cursors places
/// equal digits in their original relative order.
fn scatter(src: &[u32], dst: &mut [u32], cursors: &mut [usize], shift: u32) {
    let mask = cursors.len() - 1;
    for &value in src.iter().rev() {
        let bucket = (value >> shift) as usize & mask;
        cursors[bucket] -= 1;
        dst[cursors[bucket]] = value;
    }
}

/// Reserve a transient `u32` buffer, surfacing allocation failure as an
/// error instead of aborting.
fn alloc_words(len: usize) -> Result<Vec<u32>, SortError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| SortError::ScratchAllocation { len })?;
    Ok(buf)
}

// ============================================================================
// Signed and Float Entry Points
// ============================================================================

/// Sort an `i32` buffer ascending in place.
///
/// Values are re-encoded as unsigned keys (sign bit flipped), sorted by
/// the unsigned core, and decoded back.
///
/// # Example
///
/// ```rust
/// use numkit::prelude::*;
///
/// let mut data = vec![3_i32, -1, i32::MIN, 2];
/// sort_signed(&mut data)?;
/// assert_eq!(data, [i32::MIN, -1, 2, 3]);
/// # Result::<(), SortError>::Ok(())
/// ```
pub fn sort_signed(values: &mut [i32]) -> Result<(), SortError> {
    if values.len() <= 1 {
        return Ok(());
    }

    let mut keys = alloc_words(values.len())?;
    keys.extend(values.iter().map(|&v| signed_to_key(v)));
    sort(&mut keys)?;
    for (slot, &key) in values.iter_mut().zip(keys.iter()) {
        *slot = key_to_signed(key);
    }
    Ok(())
}

/// Sort an `f32` buffer ascending in place.
///
/// Non-NaN values are ordered by numeric value, with `-0.0` before `+0.0`
/// and the infinities at the ends. Buffers containing NaN are sorted
/// without error, but where the NaNs land is unspecified.
///
/// # Example
///
/// ```rust
/// use numkit::prelude::*;
///
/// let mut data = vec![1.5_f32, f32::NEG_INFINITY, -2.25, 0.0];
/// sort_float(&mut data)?;
/// assert_eq!(data, [f32::NEG_INFINITY, -2.25, 0.0, 1.5]);
/// # Result::<(), SortError>::Ok(())
/// ```
pub fn sort_float(values: &mut [f32]) -> Result<(), SortError> {
    if values.len() <= 1 {
        return Ok(());
    }

    let mut keys = alloc_words(values.len())?;
    keys.extend(values.iter().map(|&v| float_to_key(v)));
    sort(&mut keys)?;
    for (slot, &key) in values.iter_mut().zip(keys.iter()) {
        *slot = key_to_float(key);
    }
    Ok(())
}
