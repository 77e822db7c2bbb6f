//! Powers, roots and clamping for single numbers.
//!
//! Negative square roots and zero roots are not rejected; they produce NaN
//! or an infinite exponent like the underlying `f64` operations do.

use crate::core::error::{NumberError, Result};
use crate::core::number::Number;

/// Check that `minimum..=maximum` is a valid, non-empty range.
pub(crate) fn validate_bounds(minimum: Number, maximum: Number) -> Result<()> {
    // Also rejects NaN bounds.
    if minimum.value() <= maximum.value() {
        Ok(())
    } else {
        Err(NumberError::invalid_bounds(minimum.value(), maximum.value()))
    }
}

impl Number {
    /// `self * self`.
    pub fn square_power(self) -> Self {
        self * self
    }

    /// Square root; NaN for negative input.
    pub fn square_root(self) -> Self {
        if self.value() < 0.0 {
            tracing::debug!(value = self.value(), "square root of a negative number");
        }
        Self::new(self.value().sqrt())
    }

    /// `self` raised to `power`.
    pub fn power_of<T: Into<Self>>(self, power: T) -> Self {
        Self::new(self.value().powf(power.into().value()))
    }

    /// The `root`-th root of `self`, computed as `self^(1/root)`.
    pub fn root_of<T: Into<Self>>(self, root: T) -> Self {
        let root = root.into();
        if root.value() == 0.0 {
            tracing::debug!(value = self.value(), "zero root yields an infinite exponent");
        }
        Self::new(self.value().powf(1.0 / root.value()))
    }

    /// Clamp into `[minimum, maximum]`.
    ///
    /// # Panics
    ///
    /// Panics if `minimum > maximum` or either bound is NaN.
    #[track_caller]
    pub fn limit<A: Into<Self>, B: Into<Self>>(self, minimum: A, maximum: B) -> Self {
        match self.try_limit(minimum, maximum) {
            Ok(limited) => limited,
            Err(err) => err.fail(),
        }
    }

    /// Clamp into `[minimum, maximum]`, returning an error for invalid bounds.
    pub fn try_limit<A: Into<Self>, B: Into<Self>>(self, minimum: A, maximum: B) -> Result<Self> {
        let (minimum, maximum) = (minimum.into(), maximum.into());
        validate_bounds(minimum, maximum)?;
        Ok(self.clamp_unchecked(minimum, maximum))
    }

    /// `min(max(minimum, self), maximum)` without validating the bounds.
    pub(crate) fn clamp_unchecked(self, minimum: Self, maximum: Self) -> Self {
        Self::new(minimum.value().max(self.value()).min(maximum.value()))
    }
}
