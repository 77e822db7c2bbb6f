//! Arithmetic, comparison, batch and statistics operators for a boxed
//! number type.
//!
//! This crate re-exports [`numbox_core`] and adds nothing of its own.
//!
//! # Example
//! ```
//! use numbox::prelude::*;
//!
//! let prices = NumberSequence::from([2.0, 4.0, 6.5]);
//! assert_eq!(prices.sum(), 12.5);
//! assert_eq!((&prices * 2).to_string(), "[4, 8, 13]");
//! assert!(prices.all_lt(10));
//!
//! let n = Number::from(100).limit(0, 50);
//! assert_eq!(n.to_string(), "50");
//! ```

pub use numbox_core::*;

// Re-export key dependencies
pub use approx;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numbox_core::prelude::*;
    pub use approx::{assert_abs_diff_eq, assert_relative_eq};
}
