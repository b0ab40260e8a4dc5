//! Configuration errors.
//!
//! The search itself cannot fail: every run either converges under its
//! stopping rule or is rejected up front because the instance or the
//! control parameter is invalid.

use thiserror::Error;

use crate::search::StrategyKind;

/// Error raised when an instance, a search configuration or a control
/// parameter is invalid. Always reported before the first iteration runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The instance has no machines.
    #[error("machine count must be positive")]
    NoMachines,

    /// The instance has no tasks.
    #[error("instance must contain at least one task")]
    NoTasks,

    /// The instance generator was given a task factor that yields no tasks.
    #[error("task factor must be positive and finite, got {0}")]
    InvalidTaskFactor(f64),

    /// The no-improvement threshold is zero.
    #[error("max_no_improve must be positive")]
    InvalidStopRule,

    /// A control parameter lies outside the strategy's domain.
    #[error("{strategy} parameter {value} is outside its domain {domain}")]
    InvalidParameter {
        /// Strategy that rejected the parameter.
        strategy: StrategyKind,
        /// Offending value.
        value: f64,
        /// Human-readable valid domain.
        domain: &'static str,
    },

    /// An experiment sweep has nothing to run.
    #[error("experiment grid is empty: {0}")]
    EmptyExperiment(&'static str),
}

/// Result alias for configuration-checked operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
