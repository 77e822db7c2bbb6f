//! Tolerances for approximate number comparison.
//!
//! A process-wide configuration is initialized lazily with the defaults on
//! first use. It can be replaced once, before anything reads it, with
//! [`set_global_tolerance`].

use crate::core::number::Number;
use approx::RelativeEq;
use std::sync::OnceLock;

/// Global tolerance configuration
static GLOBAL_CONFIG: OnceLock<ToleranceConfig> = OnceLock::new();

/// Tolerances used by approximate equality checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceConfig {
    /// Absolute difference below which two values are always equal
    pub epsilon: f64,

    /// Maximum difference relative to the larger magnitude
    pub max_relative: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            epsilon: f64::EPSILON,
            max_relative: f64::EPSILON,
        }
    }
}

impl ToleranceConfig {
    /// Relative equality of two numbers under this configuration.
    pub fn relative_eq(&self, a: Number, b: Number) -> bool {
        a.relative_eq(&b, self.epsilon, self.max_relative)
    }
}

/// Builder for customizing tolerances
#[derive(Debug, Default)]
pub struct ToleranceConfigBuilder {
    config: ToleranceConfig,
}

impl ToleranceConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute epsilon
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Set the maximum relative difference
    pub fn max_relative(mut self, max_relative: f64) -> Self {
        self.config.max_relative = max_relative;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ToleranceConfig {
        self.config
    }
}

/// Get the global tolerance configuration
pub fn global_tolerance() -> &'static ToleranceConfig {
    GLOBAL_CONFIG.get_or_init(ToleranceConfig::default)
}

/// Set the global tolerance configuration.
///
/// Only the first call succeeds, and only if nothing has read the global
/// configuration yet. On failure the rejected configuration is returned.
pub fn set_global_tolerance(config: ToleranceConfig) -> Result<(), ToleranceConfig> {
    GLOBAL_CONFIG.set(config).inspect(|_| {
        tracing::debug!(?config, "global tolerance configured");
    })
}
