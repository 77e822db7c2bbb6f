//! Statistical helpers for single numbers and sequences.
//!
//! # Example
//! ```
//! use numbox_core::{stats, Number, NumberSequence};
//!
//! let numbers = NumberSequence::from([2, 4, -6]);
//! assert_eq!(numbers.maximum(), Some(Number::from(4)));
//! assert_eq!(stats::sum(&numbers), 0.0);
//! assert_eq!(numbers.limit(-1, 3).to_string(), "[2, 3, -1]");
//! ```

pub mod aggregate;
pub mod scalar;

pub use aggregate::*;
