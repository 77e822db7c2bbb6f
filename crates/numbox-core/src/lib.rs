//! Core number type, batch operators and statistics.
//!
//! This crate provides an immutable boxed number, ordered sequences of
//! numbers, and the arithmetic, comparison and statistical operations
//! defined on both. Every operation works on the double-precision value
//! and returns a freshly created result.
//!
//! # Key Concepts
//!
//! - **Number**: an `f64` value tagged with the representation it came from
//! - **BoxedValue**: a number or a boolean; booleans only compare, never compute
//! - **NumberSequence**: an ordered list of numbers with element-wise operators
//! - **Fast-fail**: division by zero and inverted clamp bounds panic;
//!   `checked_*`/`try_*` forms return a [`NumberError`] instead
//!
//! # Modules
//!
//! - [`batch`]: Sequence type, element-wise operators and all-element comparisons
//! - [`config`]: Tolerance configuration for approximate equality
//! - [`core`]: Number and boxed value types, error types
//! - [`ops`]: Scalar arithmetic, comparison and approximate equality
//! - [`stats`]: Sum, average, extrema, powers, roots and clamping

pub mod batch;
pub mod config;
pub mod core;
pub mod ops;
pub mod stats;

// Re-export commonly used items at the crate root
pub use crate::batch::NumberSequence;
pub use crate::core::error::{NumberError, Result};
pub use crate::core::number::{Number, Repr};
pub use crate::core::value::BoxedValue;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use numbox_core::prelude::*;
///
/// let mut numbers = NumberSequence::from([1, 2, 3]);
/// numbers += 1;
/// assert!(numbers.all_gt(1));
/// ```
pub mod prelude {
    pub use crate::batch::{batch_modify, NumberSequence};
    pub use crate::config::{ToleranceConfig, ToleranceConfigBuilder};
    pub use crate::core::error::{NumberError, Result};
    pub use crate::core::number::{Number, Repr};
    pub use crate::core::value::BoxedValue;
    pub use crate::stats;
}
