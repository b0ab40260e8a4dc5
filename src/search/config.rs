//! Search configuration shared by every strategy.

use crate::error::{ConfigError, Result};

/// Consecutive non-improving iterations after which every strategy stops.
pub const MAX_NO_IMPROVE: usize = 1000;

/// Configuration common to all search strategies.
///
/// # Examples
///
/// ```
/// use u_makespan::search::SearchConfig;
///
/// let config = SearchConfig::default().with_seed(7);
/// assert_eq!(config.max_no_improve, 1000);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Consecutive iterations without a new best before stopping.
    pub max_no_improve: usize,
    /// Random seed (None for a random seed).
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_no_improve: MAX_NO_IMPROVE,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the no-improvement threshold.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_no_improve == 0 {
            return Err(ConfigError::InvalidStopRule);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_no_improve, MAX_NO_IMPROVE);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_threshold() {
        let config = SearchConfig::default().with_max_no_improve(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidStopRule));
    }
}
