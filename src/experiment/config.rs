//! Experiment sweep configuration.

use crate::error::{ConfigError, Result};
use crate::search::{StrategyKind, MAX_NO_IMPROVE};

/// Configuration of an experiment sweep.
///
/// # Examples
///
/// ```
/// use u_makespan::experiment::ExperimentConfig;
/// use u_makespan::search::StrategyKind;
///
/// let config = ExperimentConfig::default()
///     .with_machine_counts(vec![5])
///     .with_task_factors(vec![2.0])
///     .with_replications(2)
///     .with_strategy(StrategyKind::TabuSearch, vec![0.05]);
/// assert_eq!(config.run_count(), 2 * 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Machine counts `m` to sweep.
    pub machine_counts: Vec<usize>,
    /// Task factors `r`; each instance has `floor(m * r)` tasks.
    pub task_factors: Vec<f64>,
    /// Replications per (m, r); replication ids run from 1.
    pub replications: usize,
    /// Strategies and the parameters each one is run with.
    pub strategies: Vec<(StrategyKind, Vec<f64>)>,
    /// No-improvement threshold passed to every run.
    pub max_no_improve: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            machine_counts: vec![10, 20, 50],
            task_factors: vec![1.5, 2.0],
            replications: 10,
            strategies: StrategyKind::ALL
                .iter()
                .map(|&kind| (kind, kind.default_parameters().to_vec()))
                .collect(),
            max_no_improve: MAX_NO_IMPROVE,
        }
    }
}

impl ExperimentConfig {
    /// Sets the machine counts to sweep.
    pub fn with_machine_counts(mut self, counts: Vec<usize>) -> Self {
        self.machine_counts = counts;
        self
    }

    /// Sets the task-per-machine factors to sweep.
    pub fn with_task_factors(mut self, factors: Vec<f64>) -> Self {
        self.task_factors = factors;
        self
    }

    /// Sets the number of replications per configuration.
    pub fn with_replications(mut self, n: usize) -> Self {
        self.replications = n;
        self
    }

    /// Replaces the strategy list with a single strategy.
    pub fn with_strategy(mut self, kind: StrategyKind, parameters: Vec<f64>) -> Self {
        self.strategies = vec![(kind, parameters)];
        self
    }

    /// Adds a strategy to the list.
    pub fn add_strategy(mut self, kind: StrategyKind, parameters: Vec<f64>) -> Self {
        self.strategies.push((kind, parameters));
        self
    }

    /// Sets the no-improvement threshold passed to every run.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Total number of strategy runs in the sweep.
    pub fn run_count(&self) -> usize {
        let per_instance: usize = self.strategies.iter().map(|(_, p)| p.len()).sum();
        self.machine_counts.len() * self.task_factors.len() * self.replications * per_instance
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.machine_counts.is_empty() {
            return Err(ConfigError::EmptyExperiment("no machine counts"));
        }
        if self.machine_counts.contains(&0) {
            return Err(ConfigError::NoMachines);
        }
        if self.task_factors.is_empty() {
            return Err(ConfigError::EmptyExperiment("no task factors"));
        }
        if let Some(&bad) = self
            .task_factors
            .iter()
            .find(|r| !r.is_finite() || **r <= 0.0)
        {
            return Err(ConfigError::InvalidTaskFactor(bad));
        }
        if self.replications == 0 {
            return Err(ConfigError::EmptyExperiment("no replications"));
        }
        if self.strategies.iter().all(|(_, p)| p.is_empty()) {
            return Err(ConfigError::EmptyExperiment("no strategy parameters"));
        }
        if self.max_no_improve == 0 {
            return Err(ConfigError::InvalidStopRule);
        }
        for (kind, parameters) in &self.strategies {
            for &p in parameters {
                kind.validate_parameter(p)?;
            }
        }
        Ok(())
    }
}
