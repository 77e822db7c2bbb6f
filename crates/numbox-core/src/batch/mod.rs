//! Batch operations over ordered number sequences.

pub mod comparison;
pub mod sequence;

pub use sequence::{batch_modify, NumberSequence};
