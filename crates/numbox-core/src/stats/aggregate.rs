//! Aggregate statistics and element-wise sequence forms.
//!
//! `sum`, `average`, `maximum` and `minimum` collapse a sequence into one
//! number. The remaining functions map the scalar operation from
//! [`scalar`](super::scalar) over every element.

use super::scalar::validate_bounds;
use crate::batch::sequence::{batch_modify, NumberSequence};
use crate::core::error::Result;
use crate::core::number::Number;

/// Left-to-right sum, starting from zero.
pub fn sum(numbers: &[Number]) -> Number {
    numbers.iter().fold(Number::ZERO, |total, &number| total + number)
}

/// Arithmetic mean.
///
/// An empty slice yields NaN (`0 / 0`) rather than an error.
#[allow(clippy::cast_precision_loss)]
pub fn average(numbers: &[Number]) -> Number {
    if numbers.is_empty() {
        tracing::debug!("average of an empty sequence is NaN");
    }
    Number::new(sum(numbers).value() / numbers.len() as f64)
}

/// The largest element, or `None` for an empty slice.
///
/// The running maximum is seeded from the first element. Elements are
/// ordered by [`Number::compare`], so NaN is only the maximum of an
/// all-NaN slice.
pub fn maximum(numbers: &[Number]) -> Option<Number> {
    let (&first, rest) = numbers.split_first()?;
    Some(rest.iter().fold(first, |best, &number| best.max_with(number)))
}

/// The smallest element, or `None` for an empty slice.
///
/// The running minimum is seeded from the first element. Elements are
/// ordered by [`Number::compare`], so any NaN element is the minimum.
pub fn minimum(numbers: &[Number]) -> Option<Number> {
    let (&first, rest) = numbers.split_first()?;
    Some(rest.iter().fold(first, |best, &number| best.min_with(number)))
}

/// Element-wise [`Number::square_power`].
pub fn square_power(numbers: &[Number]) -> NumberSequence {
    batch_modify(numbers, Number::square_power)
}

/// Element-wise [`Number::square_root`].
pub fn square_root(numbers: &[Number]) -> NumberSequence {
    batch_modify(numbers, Number::square_root)
}

/// Element-wise [`Number::power_of`].
pub fn power_of<T: Into<Number>>(numbers: &[Number], power: T) -> NumberSequence {
    let power = power.into();
    batch_modify(numbers, |number| number.power_of(power))
}

/// Element-wise [`Number::root_of`].
pub fn root_of<T: Into<Number>>(numbers: &[Number], root: T) -> NumberSequence {
    let root = root.into();
    batch_modify(numbers, |number| number.root_of(root))
}

/// Element-wise [`Number::try_limit`].
///
/// The bounds are validated once, before any element is touched.
pub fn try_limit<A, B>(numbers: &[Number], minimum: A, maximum: B) -> Result<NumberSequence>
where
    A: Into<Number>,
    B: Into<Number>,
{
    let (minimum, maximum) = (minimum.into(), maximum.into());
    validate_bounds(minimum, maximum)?;
    Ok(batch_modify(numbers, |number| {
        number.clamp_unchecked(minimum, maximum)
    }))
}

/// Element-wise [`Number::limit`].
///
/// # Panics
///
/// Panics if `minimum > maximum` or either bound is NaN.
#[track_caller]
pub fn limit<A, B>(numbers: &[Number], minimum: A, maximum: B) -> NumberSequence
where
    A: Into<Number>,
    B: Into<Number>,
{
    match try_limit(numbers, minimum, maximum) {
        Ok(limited) => limited,
        Err(err) => err.fail(),
    }
}

impl NumberSequence {
    /// See [`sum`].
    pub fn sum(&self) -> Number {
        sum(self)
    }

    /// See [`average`].
    pub fn average(&self) -> Number {
        average(self)
    }

    /// See [`maximum`].
    pub fn maximum(&self) -> Option<Number> {
        maximum(self)
    }

    /// See [`minimum`].
    pub fn minimum(&self) -> Option<Number> {
        minimum(self)
    }

    /// See [`square_power`].
    pub fn square_power(&self) -> Self {
        square_power(self)
    }

    /// See [`square_root`].
    pub fn square_root(&self) -> Self {
        square_root(self)
    }

    /// See [`power_of`].
    pub fn power_of<T: Into<Number>>(&self, power: T) -> Self {
        power_of(self, power)
    }

    /// See [`root_of`].
    pub fn root_of<T: Into<Number>>(&self, root: T) -> Self {
        root_of(self, root)
    }

    /// See [`limit`].
    #[track_caller]
    pub fn limit<A: Into<Number>, B: Into<Number>>(&self, minimum: A, maximum: B) -> Self {
        limit(self, minimum, maximum)
    }

    /// See [`try_limit`].
    pub fn try_limit<A: Into<Number>, B: Into<Number>>(&self, minimum: A, maximum: B) -> Result<Self> {
        try_limit(self, minimum, maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::NumberError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sum() {
        let numbers = NumberSequence::from([2.0, 4.0, 6.5]);
        assert_eq!(numbers.sum(), 12.5);
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_average() {
        let numbers = NumberSequence::from([2, 4, 6]);
        assert_eq!(numbers.average(), 4.0);
        assert!(average(&[]).is_nan());
    }

    #[test]
    fn test_extrema() {
        let numbers = NumberSequence::from([2, 4, -6]);
        assert_eq!(numbers.maximum(), Some(Number::from(4)));
        assert_eq!(numbers.minimum(), Some(Number::from(-6)));
    }

    #[test]
    fn test_extrema_are_seeded_from_first_element() {
        let negatives = NumberSequence::from([-5, -3, -1]);
        assert_eq!(negatives.maximum(), Some(Number::from(-1)));

        let positives = NumberSequence::from([5, 3, 1]);
        assert_eq!(positives.minimum(), Some(Number::from(1)));

        assert_eq!(maximum(&[]), None);
        assert_eq!(minimum(&[]), None);
    }

    #[test]
    fn test_extrema_agree_with_ordering_when_nan_present() {
        let roots = NumberSequence::from([-4, 9]).square_root();
        assert!(roots[0].is_nan());

        let min = roots.minimum().unwrap();
        let max = roots.maximum().unwrap();
        assert!(min.is_nan());
        assert_eq!(max, 3.0);
        assert_eq!(Some(&min), roots.iter().min());
        assert_eq!(Some(&max), roots.iter().max());
        assert!(roots.all_ge(min));
        assert!(roots.all_le(max));

        let all_nan = NumberSequence::from([f64::NAN, f64::NAN]);
        assert!(all_nan.maximum().unwrap().is_nan());
    }

    #[test]
    fn test_element_wise_forms() {
        let numbers = NumberSequence::from([2, 4, 6]);
        assert_eq!(numbers.square_power().to_string(), "[4, 16, 36]");
        assert_eq!(numbers.power_of(2).to_string(), "[4, 16, 36]");
        assert_eq!(numbers.power_of(3).to_string(), "[8, 64, 216]");

        let squares = NumberSequence::from([4, 16, 36]);
        assert_eq!(squares.square_root().to_string(), "[2, 4, 6]");
    }

    #[test]
    fn test_root_of_sequence() {
        let numbers = NumberSequence::from([100, 4, 36]);
        assert_eq!(numbers.root_of(2).to_string(), "[10, 2, 6]");

        let cube_roots = numbers.root_of(3);
        assert_abs_diff_eq!(cube_roots[0].value(), 4.641588833612778, epsilon = 1e-7);
        assert_abs_diff_eq!(cube_roots[1].value(), 1.587401051968199, epsilon = 1e-7);
        assert_abs_diff_eq!(cube_roots[2].value(), 3.301927248894626, epsilon = 1e-7);
    }

    #[test]
    fn test_limit_sequence() {
        let numbers = NumberSequence::from([2, 4, -6]);
        assert_eq!(numbers.limit(-1, 3).to_string(), "[2, 3, -1]");
        assert_eq!(
            NumberSequence::new().try_limit(3, -1),
            Err(NumberError::invalid_bounds(3.0, -1.0))
        );
    }

    #[test]
    #[should_panic(expected = "cannot be greater than maximum")]
    fn test_limit_sequence_fails_fast() {
        let _ = NumberSequence::from([1, 2]).limit(10, 0);
    }
}
