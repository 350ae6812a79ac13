//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - Polynomial evaluation
//! - The fast base-2 exponential
//! - Modular exponentiation
//!
//! No sorting or classification logic lives here.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Polynomial evaluation.
pub mod poly;

/// Fast base-2 exponential approximation.
pub mod exp2;

/// Modular exponentiation.
pub mod modular;
