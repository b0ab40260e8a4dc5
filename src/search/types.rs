//! Strategy identification and dispatch.

use std::fmt;

use super::config::SearchConfig;
use super::driver::SearchResult;
use crate::error::{ConfigError, Result};
use crate::ils::IlsRunner;
use crate::rms::RmsRunner;
use crate::sa::SaRunner;
use crate::solution::Solution;
use crate::tabu::TabuRunner;

/// The four search strategies, each driven by one real-valued control
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    /// Iterated Local Search; parameter = perturbation intensity `p`.
    IteratedLocalSearch,
    /// Randomized Monotonic Local Search; parameter = random-walk probability.
    RandomizedMonotonic,
    /// Tabu Search; parameter = tabu length factor (negative = randomized).
    TabuSearch,
    /// Simulated Annealing; parameter = cooling factor.
    SimulatedAnnealing,
}

impl StrategyKind {
    /// All strategies, in sweep order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::RandomizedMonotonic,
        StrategyKind::IteratedLocalSearch,
        StrategyKind::TabuSearch,
        StrategyKind::SimulatedAnnealing,
    ];

    /// Stable identifier used in logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::IteratedLocalSearch => "IteratedLocalSearch",
            StrategyKind::RandomizedMonotonic => "RandomizedMonotonic",
            StrategyKind::TabuSearch => "TabuSearch",
            StrategyKind::SimulatedAnnealing => "SimulatedAnnealing",
        }
    }

    /// Parameter grid used by the default experiment sweep.
    pub fn default_parameters(self) -> &'static [f64] {
        match self {
            StrategyKind::IteratedLocalSearch | StrategyKind::RandomizedMonotonic => {
                &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]
            }
            StrategyKind::TabuSearch => {
                &[-1.0, 0.01, 0.02, 0.03, 0.04, 0.05, 0.06, 0.07, 0.08, 0.09]
            }
            StrategyKind::SimulatedAnnealing => &[0.8, 0.85, 0.9, 0.95, 0.99],
        }
    }

    fn domain(self) -> &'static str {
        match self {
            StrategyKind::IteratedLocalSearch | StrategyKind::RandomizedMonotonic => "[0, 1)",
            StrategyKind::TabuSearch => "any finite value",
            StrategyKind::SimulatedAnnealing => "(0, inf)",
        }
    }

    /// Checks `value` against the strategy's parameter domain.
    ///
    /// Zero is valid for the randomized strategies and degenerates to a
    /// deterministic search. A cooling factor of 1 or more is valid.
    pub fn validate_parameter(self, value: f64) -> Result<()> {
        let ok = value.is_finite()
            && match self {
                StrategyKind::IteratedLocalSearch | StrategyKind::RandomizedMonotonic => {
                    (0.0..1.0).contains(&value)
                }
                StrategyKind::TabuSearch => true,
                StrategyKind::SimulatedAnnealing => value > 0.0,
            };

        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidParameter {
                strategy: self,
                value,
                domain: self.domain(),
            })
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs `kind` from `initial` with a freshly seeded runner.
///
/// # Examples
///
/// ```
/// use u_makespan::instance::Instance;
/// use u_makespan::search::{run_strategy, SearchConfig, StrategyKind};
/// use u_makespan::solution::Solution;
///
/// let instance = Instance::new(2, vec![6, 5, 4, 3, 2]).unwrap();
/// let initial = Solution::greedy(&instance);
/// let config = SearchConfig::default().with_max_no_improve(50).with_seed(1);
///
/// let result = run_strategy(StrategyKind::TabuSearch, &config, &initial, 0.2).unwrap();
/// assert!(result.best_makespan <= initial.makespan());
/// ```
pub fn run_strategy(
    kind: StrategyKind,
    config: &SearchConfig,
    initial: &Solution,
    parameter: f64,
) -> Result<SearchResult> {
    match kind {
        StrategyKind::IteratedLocalSearch => IlsRunner::new(config.clone()).run(initial, parameter),
        StrategyKind::RandomizedMonotonic => RmsRunner::new(config.clone()).run(initial, parameter),
        StrategyKind::TabuSearch => TabuRunner::new(config.clone()).run(initial, parameter),
        StrategyKind::SimulatedAnnealing => SaRunner::new(config.clone()).run(initial, parameter),
    }
}
