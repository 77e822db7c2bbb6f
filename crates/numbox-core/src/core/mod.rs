//! Core value types and errors.

pub mod error;
pub mod number;
pub mod value;

// Re-export core types
pub use error::*;
pub use number::*;
pub use value::*;
