//! Ordering and equality for [`Number`].
//!
//! Comparison looks only at the double-precision value, never at the
//! representation tag, so `Number::from(4)` equals `Number::new(4.0)`.
//! NaN is treated as equal to itself and below every other value, which
//! makes the ordering total: for any `a` and `b` exactly one of `a < b`,
//! `a == b`, `a > b` holds.

use crate::core::number::Number;
use std::cmp::Ordering;

impl Number {
    /// Three-way comparison of the double-precision values.
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.value().partial_cmp(&other.value()) {
            Some(ordering) => ordering,
            // At least one side is NaN.
            None => other.is_nan().cmp(&self.is_nan()),
        }
    }

    /// The larger of `self` and `other` under [`Number::compare`], as a new
    /// float-tagged number.
    ///
    /// NaN sorts lowest, so it is only returned when both sides are NaN.
    pub fn max_with<T: Into<Self>>(self, other: T) -> Self {
        Self::new(Ord::max(self, other.into()).value())
    }

    /// The smaller of `self` and `other` under [`Number::compare`], as a new
    /// float-tagged number.
    ///
    /// NaN sorts lowest, so a NaN on either side is returned.
    pub fn min_with<T: Into<Self>>(self, other: T) -> Self {
        Self::new(Ord::min(self, other.into()).value())
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Self::new(*other)
    }
}

impl PartialOrd<f64> for Number {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        Some(self.compare(&Self::new(*other)))
    }
}
