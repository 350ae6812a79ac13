//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the crate's two buffer/scalar-level algorithms:
//! radix sorting of 32-bit values and deterministic Miller-Rabin primality
//! testing. It builds on the math and primitives layers below it.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Three-pass LSB radix sorting.
pub mod radix;

/// Deterministic Miller-Rabin primality testing.
pub mod primality;
