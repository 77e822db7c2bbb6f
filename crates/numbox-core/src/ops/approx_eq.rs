//! Tolerance-aware equality for [`Number`].

use crate::config::tolerance::global_tolerance;
use crate::core::number::Number;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

impl AbsDiffEq for Number {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.value().abs_diff_eq(&other.value(), epsilon)
    }
}

impl RelativeEq for Number {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.value()
            .relative_eq(&other.value(), epsilon, max_relative)
    }
}

impl UlpsEq for Number {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.value().ulps_eq(&other.value(), epsilon, max_ulps)
    }
}

impl Number {
    /// Approximate equality under the global [`ToleranceConfig`].
    ///
    /// [`ToleranceConfig`]: crate::config::ToleranceConfig
    pub fn approx_eq<T: Into<Self>>(&self, other: T) -> bool {
        let config = global_tolerance();
        self.relative_eq(&other.into(), config.epsilon, config.max_relative)
    }
}
