//! Operator implementations for [`Number`](crate::Number).
//!
//! This module only adds trait and inherent impls; there is nothing to
//! re-export.

pub mod approx_eq;
pub mod arithmetic;
pub mod comparison;
