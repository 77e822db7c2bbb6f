//! Ordered sequences of numbers and element-wise batch arithmetic.
//!
//! Every batch operator maps a scalar operator over the sequence and
//! collects the results into a new sequence of the same length and order.
//! Inputs are never modified; compound assignment rebinds the sequence.

use crate::core::error::{NumberError, Result};
use crate::core::number::Number;
use approx::{AbsDiffEq, RelativeEq};
use std::fmt;
use std::ops::{
    Add, AddAssign, Deref, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Apply `f` to every number in `numbers`, collecting fresh values in order.
pub fn batch_modify<F>(numbers: &[Number], f: F) -> NumberSequence
where
    F: FnMut(Number) -> Number,
{
    NumberSequence(numbers.iter().copied().map(f).collect())
}

/// An ordered sequence of [`Number`] values.
///
/// Order matters for display and equality but not for the aggregate
/// statistics.
///
/// # Example
/// ```
/// use numbox_core::NumberSequence;
///
/// let numbers = NumberSequence::from(vec![4.0, 8.0, 16.0]);
/// assert_eq!((numbers + 2).to_string(), "[6, 10, 18]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct NumberSequence(Vec<Number>);

impl NumberSequence {
    /// Create an empty sequence.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The numbers as a slice.
    pub fn as_slice(&self) -> &[Number] {
        &self.0
    }

    /// Consume the sequence, returning the underlying numbers.
    pub fn into_vec(self) -> Vec<Number> {
        self.0
    }

    /// Element-wise transformation into a new sequence.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(Number) -> Number,
    {
        batch_modify(&self.0, f)
    }

    /// Divide every element, returning an error if the divisor is zero.
    ///
    /// The divisor is checked once up front, so an empty sequence still
    /// rejects a zero divisor.
    pub fn checked_div<T: Into<Number>>(&self, divisor: T) -> Result<Self> {
        let divisor = divisor.into();
        if divisor.value() == 0.0 {
            return Err(NumberError::DivisionByZero);
        }
        Ok(self.map(|number| Number::new(number.value() / divisor.value())))
    }

    /// Rebind every element to itself plus one.
    pub fn increment(&mut self) -> &Self {
        *self = self.map(|mut number| number.increment());
        self
    }

    /// Rebind every element to itself minus one.
    pub fn decrement(&mut self) -> &Self {
        *self = self.map(|mut number| number.decrement());
        self
    }

    /// Element-wise approximate equality under the global tolerance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a.approx_eq(*b))
    }
}

impl Deref for NumberSequence {
    type Target = [Number];

    fn deref(&self) -> &[Number] {
        &self.0
    }
}

impl<T: Into<Number>> From<Vec<T>> for NumberSequence {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<Number>, const N: usize> From<[T; N]> for NumberSequence {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[Number]> for NumberSequence {
    fn from(numbers: &[Number]) -> Self {
        Self(numbers.to_vec())
    }
}

impl From<NumberSequence> for Vec<Number> {
    fn from(sequence: NumberSequence) -> Self {
        sequence.0
    }
}

impl<T: Into<Number>> FromIterator<T> for NumberSequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for NumberSequence {
    type Item = Number;
    type IntoIter = std::vec::IntoIter<Number>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NumberSequence {
    type Item = &'a Number;
    type IntoIter = std::slice::Iter<'a, Number>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for NumberSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, number) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{number}")?;
        }
        write!(f, "]")
    }
}

macro_rules! impl_batch_op {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt);* $(;)?) => {
        $(
            impl<T: Into<Number>> $trait<T> for &NumberSequence {
                type Output = NumberSequence;

                fn $method(self, rhs: T) -> NumberSequence {
                    let rhs = rhs.into();
                    self.map(|number| number $op rhs)
                }
            }

            impl<T: Into<Number>> $trait<T> for NumberSequence {
                type Output = Self;

                fn $method(self, rhs: T) -> Self {
                    &self $op rhs
                }
            }

            impl<T: Into<Number>> $assign_trait<T> for NumberSequence {
                fn $assign_method(&mut self, rhs: T) {
                    *self = &*self $op rhs;
                }
            }
        )*
    };
}

impl_batch_op! {
    Add, add, AddAssign, add_assign, +;
    Sub, sub, SubAssign, sub_assign, -;
    Mul, mul, MulAssign, mul_assign, *;
    Rem, rem, RemAssign, rem_assign, %;
}

impl<T: Into<Number>> Div<T> for &NumberSequence {
    type Output = NumberSequence;

    /// # Panics
    ///
    /// Panics if the divisor is zero.
    #[track_caller]
    fn div(self, rhs: T) -> NumberSequence {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => err.fail(),
        }
    }
}

impl<T: Into<Number>> Div<T> for NumberSequence {
    type Output = Self;

    #[track_caller]
    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

impl<T: Into<Number>> DivAssign<T> for NumberSequence {
    #[track_caller]
    fn div_assign(&mut self, rhs: T) {
        *self = &*self / rhs;
    }
}

impl Neg for &NumberSequence {
    type Output = NumberSequence;

    fn neg(self) -> NumberSequence {
        self.map(Neg::neg)
    }
}

impl Neg for NumberSequence {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl AbsDiffEq for NumberSequence {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        Number::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for NumberSequence {
    fn default_max_relative() -> f64 {
        Number::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mixed() -> NumberSequence {
        NumberSequence::from(vec![
            Number::new(4.0),
            Number::from(8.0f32),
            Number::new(16.0),
            Number::from(128),
            Number::from(256i64),
            Number::from(512u64),
        ])
    }

    #[test]
    fn test_display() {
        assert_eq!(mixed().to_string(), "[4, 8, 16, 128, 256, 512]");
        assert_eq!(NumberSequence::new().to_string(), "[]");
        assert_eq!(NumberSequence::from([5.5]).to_string(), "[5.5]");
    }

    #[test]
    fn test_batch_operators() {
        let array = mixed();

        assert_eq!((&array + 2.0).to_string(), "[6, 10, 18, 130, 258, 514]");
        assert_eq!((&array - 2.0).to_string(), "[2, 6, 14, 126, 254, 510]");
        assert_eq!((&array * 2.0).to_string(), "[8, 16, 32, 256, 512, 1024]");
        assert_eq!((&array / 2.0).to_string(), "[2, 4, 8, 64, 128, 256]");
        assert_eq!((&array % 2.0).to_string(), "[0, 0, 0, 0, 0, 0]");
        assert_eq!((&array % 10.5).to_string(), "[4, 8, 5.5, 2, 4, 8]");
        assert_eq!((-&array).to_string(), "[-4, -8, -16, -128, -256, -512]");

        // Borrowed operators leave the input alone.
        assert_eq!(array, mixed());
    }

    #[test]
    fn test_increment_does_not_alias() {
        let original = mixed();
        let mut plus_one = original.clone();
        let mut minus_one = original.clone();

        plus_one.increment();
        minus_one.decrement();

        assert_eq!(plus_one.to_string(), "[5, 9, 17, 129, 257, 513]");
        assert_eq!(minus_one.to_string(), "[3, 7, 15, 127, 255, 511]");
        assert_eq!(original.to_string(), "[4, 8, 16, 128, 256, 512]");
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(
            NumberSequence::new().checked_div(0),
            Err(NumberError::DivisionByZero)
        );
        assert_eq!(
            NumberSequence::from([9, 3]).checked_div(3),
            Ok(NumberSequence::from([3, 1]))
        );
    }

    #[test]
    #[should_panic(expected = "cannot divide by zero")]
    fn test_divide_empty_by_zero_fails_fast() {
        let _ = NumberSequence::new() / 0.0;
    }

    #[test]
    fn test_equality_is_ordered() {
        assert_eq!(NumberSequence::from([1, 2]), NumberSequence::from([1.0, 2.0]));
        assert_ne!(NumberSequence::from([1, 2]), NumberSequence::from([2, 1]));
    }

    #[test]
    fn test_approx() {
        let thirds = NumberSequence::from([1.0 / 3.0, 2.0 / 3.0]) * 3;
        assert_relative_eq!(thirds, NumberSequence::from([1, 2]));
        assert!(thirds.approx_eq(&NumberSequence::from([1, 2])));
        assert!(!thirds.approx_eq(&NumberSequence::from([1])));
    }

    #[test]
    fn test_conversions() {
        let sequence: NumberSequence = (1..=3).collect();
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence[2], 3.0);

        let numbers: Vec<Number> = sequence.clone().into();
        assert_eq!(NumberSequence::from(numbers.as_slice()), sequence);

        let total: f64 = sequence.into_iter().map(Number::value).sum();
        assert_eq!(total, 6.0);
    }
}
