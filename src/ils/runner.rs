//! Iterated Local Search execution engine.
//!
//! # Algorithm
//!
//! 1. Descend from the initial solution to a local optimum
//! 2. At each iteration:
//!    a. Copy the current solution and reassign `round(n * p)` random tasks
//!    b. Descend from the perturbed copy
//!    c. Accept the refined copy only if its makespan is strictly lower
//! 3. Terminate after `max_no_improve` iterations without a new best

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::local_search::descend;
use crate::search::{create_rng, drive, SearchConfig, SearchResult, Step, StrategyKind};
use crate::solution::Solution;

/// Iterated Local Search runner. Owns its random generator.
#[derive(Debug, Clone)]
pub struct IlsRunner {
    config: SearchConfig,
    rng: StdRng,
}

impl IlsRunner {
    /// Creates a runner seeded from `config.seed`.
    pub fn new(config: SearchConfig) -> Self {
        let rng = create_rng(config.seed);
        Self { config, rng }
    }

    /// Restarts the random generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Runs ILS with perturbation intensity `intensity` in `[0, 1)`.
    pub fn run(&mut self, initial: &Solution, intensity: f64) -> Result<SearchResult> {
        self.run_with_cancel(initial, intensity, None)
    }

    /// Runs ILS with an optional cancellation token, checked at the top of
    /// every iteration.
    pub fn run_with_cancel(
        &mut self,
        initial: &Solution,
        intensity: f64,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult> {
        self.config.validate()?;
        StrategyKind::IteratedLocalSearch.validate_parameter(intensity)?;

        let started = Instant::now();
        let start = descend(initial.clone());
        let rng = &mut self.rng;

        Ok(drive(
            StrategyKind::IteratedLocalSearch,
            intensity,
            start,
            started,
            &self.config,
            cancel.as_deref(),
            |current, _| {
                let mut perturbed = current.clone();
                perturbed.perturb(intensity, rng);
                let refined = descend(perturbed);

                if refined.makespan() < current.makespan() {
                    *current = refined;
                }
                Step::Continue
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{Instance, InstanceGenerator};

    fn instance() -> Instance {
        InstanceGenerator::new(1_000 + 100 + 15)
            .generate(10, 1.5)
            .unwrap()
    }

    #[test]
    fn test_ils_improves_on_greedy() {
        let instance = instance();
        let initial = Solution::greedy(&instance);
        let mut runner = IlsRunner::new(SearchConfig::default().with_max_no_improve(100).with_seed(1));

        let result = runner.run(&initial, 0.3).unwrap();

        assert!(result.best_makespan <= initial.makespan());
        assert!(result.best_makespan >= instance.lower_bound());
        assert_eq!(result.best.makespan(), result.best_makespan);
        assert_eq!(result.strategy, StrategyKind::IteratedLocalSearch);
        assert!(result.iterations >= 100);
    }

    #[test]
    fn test_ils_best_is_local_optimum() {
        let instance = instance();
        let initial = Solution::greedy(&instance);
        let mut runner = IlsRunner::new(SearchConfig::default().with_max_no_improve(50).with_seed(5));

        let result = runner.run(&initial, 0.2).unwrap();
        let again = descend(result.best.clone());
        assert_eq!(again.assignment(), result.best.assignment());
    }

    #[test]
    fn test_ils_zero_intensity_stagnates() {
        let instance = instance();
        let initial = Solution::greedy(&instance);
        let mut runner = IlsRunner::new(SearchConfig::default().with_max_no_improve(40).with_seed(2));

        let result = runner.run(&initial, 0.0).unwrap();

        // No perturbation: every iteration reproduces the same local optimum.
        assert_eq!(result.iterations, 40);
        assert_eq!(result.best_makespan, descend(initial).makespan());
    }

    #[test]
    fn test_ils_deterministic_with_seed() {
        let instance = instance();
        let initial = Solution::greedy(&instance);
        let config = SearchConfig::default().with_max_no_improve(60).with_seed(42);

        let a = IlsRunner::new(config.clone()).run(&initial, 0.4).unwrap();
        let b = IlsRunner::new(config).run(&initial, 0.4).unwrap();

        assert_eq!(a.best_makespan, b.best_makespan);
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_ils_reseed_reproduces_run() {
        let instance = instance();
        let initial = Solution::greedy(&instance);
        let mut runner = IlsRunner::new(SearchConfig::default().with_max_no_improve(60).with_seed(8));

        let first = runner.run(&initial, 0.5).unwrap();
        runner.reseed(8);
        let second = runner.run(&initial, 0.5).unwrap();

        assert_eq!(first.best_makespan, second.best_makespan);
        assert_eq!(first.iterations, second.iterations);
    }

    #[test]
    fn test_ils_rejects_bad_intensity() {
        let instance = instance();
        let initial = Solution::greedy(&instance);
        let mut runner = IlsRunner::new(SearchConfig::default());

        assert!(runner.run(&initial, -0.1).is_err());
        assert!(runner.run(&initial, 1.0).is_err());
    }

    #[test]
    fn test_ils_cancellation() {
        let instance = instance();
        let initial = Solution::greedy(&instance);
        let mut runner = IlsRunner::new(SearchConfig::default().with_seed(4));

        let cancel = Arc::new(AtomicBool::new(true));
        let result = runner.run_with_cancel(&initial, 0.3, Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
    }
}
