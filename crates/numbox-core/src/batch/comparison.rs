//! Sequence-to-scalar comparisons.
//!
//! Each comparison holds for a sequence when it holds for every element,
//! so an empty sequence satisfies all of them. These are plain methods
//! rather than `PartialEq`/`PartialOrd` impls because the reduction is not
//! an ordering: `all_ne` is not the negation of `all_eq`.

use super::sequence::NumberSequence;
use crate::core::number::Number;

impl NumberSequence {
    fn all_satisfy<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Number) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Every element is less than `scalar`.
    pub fn all_lt<T: Into<Number>>(&self, scalar: T) -> bool {
        let scalar = scalar.into();
        self.all_satisfy(|number| *number < scalar)
    }

    /// Every element is greater than `scalar`.
    pub fn all_gt<T: Into<Number>>(&self, scalar: T) -> bool {
        let scalar = scalar.into();
        self.all_satisfy(|number| *number > scalar)
    }

    /// Every element is less than or equal to `scalar`.
    pub fn all_le<T: Into<Number>>(&self, scalar: T) -> bool {
        let scalar = scalar.into();
        self.all_satisfy(|number| *number <= scalar)
    }

    /// Every element is greater than or equal to `scalar`.
    pub fn all_ge<T: Into<Number>>(&self, scalar: T) -> bool {
        let scalar = scalar.into();
        self.all_satisfy(|number| *number >= scalar)
    }

    /// Every element equals `scalar`.
    pub fn all_eq<T: Into<Number>>(&self, scalar: T) -> bool {
        let scalar = scalar.into();
        self.all_satisfy(|number| *number == scalar)
    }

    /// Every element differs from `scalar`.
    pub fn all_ne<T: Into<Number>>(&self, scalar: T) -> bool {
        let scalar = scalar.into();
        self.all_satisfy(|number| *number != scalar)
    }
}
