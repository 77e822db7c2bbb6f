//! Scalar arithmetic and compound assignment for [`Number`].
//!
//! Every binary operator accepts anything convertible into a `Number` on
//! the right-hand side, so raw literals mix freely with boxed values:
//!
//! ```
//! use numbox_core::Number;
//!
//! let mut n = Number::from(32);
//! n += 10.5;
//! assert_eq!(n.value(), 42.5);
//! assert_eq!((Number::from(32) % 10.5).value(), 0.5);
//! ```
//!
//! Division by zero fails fast. Use [`Number::checked_div`] to get the
//! error back instead.

use crate::core::error::{NumberError, Result};
use crate::core::number::Number;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

impl Number {
    /// Divide, returning an error instead of failing fast on a zero divisor.
    pub fn checked_div<T: Into<Self>>(self, divisor: T) -> Result<Self> {
        let divisor = divisor.into();
        if divisor.value() == 0.0 {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self::new(self.value() / divisor.value()))
    }

    /// Rebind to `self + 1` and return the new value.
    pub fn increment(&mut self) -> Self {
        *self = *self + 1.0;
        *self
    }

    /// Rebind to `self - 1` and return the new value.
    pub fn decrement(&mut self) -> Self {
        *self = *self - 1.0;
        *self
    }
}

impl<T: Into<Number>> Add<T> for Number {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        Self::new(self.value() + rhs.into().value())
    }
}

impl<T: Into<Number>> Sub<T> for Number {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        Self::new(self.value() - rhs.into().value())
    }
}

impl<T: Into<Number>> Mul<T> for Number {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.value() * rhs.into().value())
    }
}

impl<T: Into<Number>> Div<T> for Number {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the divisor is zero.
    #[track_caller]
    fn div(self, rhs: T) -> Self {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => err.fail(),
        }
    }
}

impl<T: Into<Number>> Rem<T> for Number {
    type Output = Self;

    /// Floating point remainder; the sign follows the dividend.
    fn rem(self, rhs: T) -> Self {
        Self::new(self.value() % rhs.into().value())
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value())
    }
}

macro_rules! impl_assign_op {
    ($($trait:ident, $method:ident, $op:tt);* $(;)?) => {
        $(
            impl<T: Into<Number>> $trait<T> for Number {
                #[track_caller]
                fn $method(&mut self, rhs: T) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

impl_assign_op! {
    AddAssign, add_assign, +;
    SubAssign, sub_assign, -;
    MulAssign, mul_assign, *;
    DivAssign, div_assign, /;
    RemAssign, rem_assign, %;
}
