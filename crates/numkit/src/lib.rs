//! # numkit — fast numeric micro-kernels
//!
//! Three self-contained numeric routines with no shared state:
//!
//! * **Radix sorting** — a three-pass LSB radix sort for `u32` buffers,
//!   extended to `i32` and `f32` through order-preserving bit transforms.
//! * **Primality testing** — deterministic Miller-Rabin over the full
//!   `u32` range using the fixed witness set {2, 7, 61}.
//! * **Fast exp2** — a quick `2^x` approximation for `f64` combining a
//!   minimax polynomial with direct IEEE-754 exponent-field injection.
//!
//! Every routine is synchronous, allocation-light, and safe to call from
//! independent threads on independent inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! // Sort 32-bit values in place.
//! let mut data = vec![5_u32, 1, 1024, 42];
//! sort(&mut data)?;
//! assert_eq!(data, [1, 5, 42, 1024]);
//!
//! // Signed and float buffers sort by their natural order.
//! let mut temps = vec![3.5_f32, -7.25, 0.5, -0.0];
//! sort_float(&mut temps)?;
//! assert_eq!(temps, [-7.25, -0.0, 0.5, 3.5]);
//!
//! // Deterministic primality for any u32.
//! assert!(is_prime(4_294_967_291));
//! assert!(!is_prime(4_294_967_295));
//!
//! // Fast base-2 exponential.
//! assert_eq!(exp2_approx(10.0), 1024.0);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! The sorting entry points return `Result<(), SortError>`: the only
//! failure mode is scratch-buffer allocation exhaustion, and on failure the
//! input buffer is left untouched. The primality test and the exponential
//! are total functions and return plain values.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency (the sorter still needs `alloc`
//! for its scratch buffer):
//!
//! ```toml
//! [dependencies]
//! numkit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - key transforms and error types.
mod primitives;

// Layer 2: Math - pure mathematical building blocks.
mod math;

// Layer 3: Algorithms - sorting and primality.
mod algorithms;

// Standard numkit prelude.
pub mod prelude {
    pub use crate::algorithms::primality::is_prime;
    pub use crate::algorithms::radix::{sort, sort_float, sort_signed};
    pub use crate::math::exp2::exp2_approx;
    pub use crate::primitives::errors::SortError;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
}
