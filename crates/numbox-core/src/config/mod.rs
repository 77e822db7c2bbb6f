//! Runtime configuration.

pub mod tolerance;

pub use tolerance::{
    global_tolerance, set_global_tolerance, ToleranceConfig, ToleranceConfigBuilder,
};
