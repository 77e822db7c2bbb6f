//! The boxed number value type.
//!
//! [`Number`] wraps a double-precision value together with a tag recording
//! the representation it was created from. All arithmetic goes through the
//! `f64` value and produces a fresh, float-tagged `Number`; the tag is kept
//! for inspection only and never changes how two numbers compare.

use num_traits::{One, ToPrimitive, Zero};
use std::fmt;
use std::iter::Sum;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The representation a [`Number`] was originally created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Repr {
    /// Created from a signed or unsigned integer.
    Integer,
    /// Created from a floating point value, or produced by arithmetic.
    #[default]
    Float,
}

/// An immutable numeric value.
///
/// Every operation on a `Number` returns a new value; compound assignment
/// rebinds the target to that new value rather than mutating shared state.
///
/// # Example
/// ```
/// use numbox_core::Number;
///
/// let n = Number::from(32) + 10.5;
/// assert_eq!(n.value(), 42.5);
/// assert_eq!(n.to_string(), "42.5");
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "f64", into = "f64")
)]
pub struct Number {
    value: f64,
    repr: Repr,
}

impl Number {
    /// Numeric zero.
    pub const ZERO: Self = Self::new(0.0);

    /// Numeric one.
    pub const ONE: Self = Self::new(1.0);

    /// Not-a-number.
    pub const NAN: Self = Self::new(f64::NAN);

    /// Create a float-tagged number.
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            repr: Repr::Float,
        }
    }

    /// Create an integer-tagged number.
    #[allow(clippy::cast_precision_loss)]
    pub const fn integer(value: i64) -> Self {
        Self {
            value: value as f64,
            repr: Repr::Integer,
        }
    }

    /// The double-precision value of this number.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The representation this number was created from.
    #[inline]
    pub const fn repr(self) -> Repr {
        self.repr
    }

    /// Returns true if the value is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.value.is_nan()
    }

    /// Returns true if the value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(value: $t) -> Self {
                    Self {
                        value: value as f64,
                        repr: Repr::Integer,
                    }
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.value
    }
}

/// Decimal exponents in `EXPONENT_FORM_MIN..EXPONENT_FORM_MAX` print in
/// positional notation; anything outside prints as `1e+21` or `1.5e-07`.
const EXPONENT_FORM_MIN: i32 = -4;
const EXPONENT_FORM_MAX: i32 = 17;

/// Splits the shortest round-tripping scientific form of `value` into its
/// mantissa and decimal exponent.
fn scientific_parts(value: f64) -> Option<(String, i32)> {
    let text = format!("{value:e}");
    let (mantissa, exponent) = text.split_once('e')?;
    Some((mantissa.to_owned(), exponent.parse().ok()?))
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // An explicit precision always asks for positional digits.
        if f.precision().is_none() && self.value.is_finite() && self.value != 0.0 {
            if let Some((mantissa, exponent)) = scientific_parts(self.value) {
                if !(EXPONENT_FORM_MIN..EXPONENT_FORM_MAX).contains(&exponent) {
                    let sign = if exponent < 0 { '-' } else { '+' };
                    return f.pad(&format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs()));
                }
            }
        }
        // f64's Display drops the fractional part of integral values and
        // prints the shortest round-tripping digits otherwise.
        fmt::Display::fmt(&self.value, f)
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl One for Number {
    fn one() -> Self {
        Self::ONE
    }
}

impl ToPrimitive for Number {
    fn to_i64(&self) -> Option<i64> {
        self.value.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.value)
    }
}

impl Sum for Number {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, number| total + number)
    }
}

impl<'a> Sum<&'a Number> for Number {
    fn sum<I: Iterator<Item = &'a Number>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
