//! Boxed values that may hold either a number or a boolean.
//!
//! A boolean-tagged value takes part in ordering and equality (comparing as
//! 0 or 1) but exposes no arithmetic. Arithmetic is only defined on
//! [`Number`], so a boolean operand is rejected by the compiler rather than
//! at runtime.

use super::number::Number;
use std::cmp::Ordering;
use std::fmt;

/// A boxed scalar tagged with its original kind.
#[derive(Debug, Clone, Copy)]
pub enum BoxedValue {
    /// A boolean-tagged value.
    Bool(bool),
    /// A numeric-tagged value.
    Number(Number),
}

impl BoxedValue {
    /// Returns true if this value is numeric-tagged.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns true if every value in `values` is numeric-tagged.
    pub fn all_numeric(values: &[Self]) -> bool {
        values.iter().all(Self::is_numeric)
    }

    /// The wrapped number, if this value is numeric-tagged.
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Bool(_) => None,
        }
    }

    /// The value used for ordering and equality.
    pub fn ordinal(&self) -> f64 {
        match self {
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Number(number) => number.value(),
        }
    }

    /// Three-way comparison of the ordinal values.
    pub fn compare(&self, other: &Self) -> Ordering {
        Number::new(self.ordinal()).compare(&Number::new(other.ordinal()))
    }
}

impl From<bool> for BoxedValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

macro_rules! impl_from_numeric {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BoxedValue {
                fn from(value: $t) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_numeric!(Number, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl PartialEq for BoxedValue {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BoxedValue {}

impl PartialOrd for BoxedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BoxedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for BoxedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => write!(f, "{}", u8::from(*flag)),
            Self::Number(number) => fmt::Display::fmt(number, f),
        }
    }
}
