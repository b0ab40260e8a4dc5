//! Randomized Monotonic Local Search execution engine.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::neighborhood::best_neighbor;
use crate::search::{create_rng, drive, SearchConfig, SearchResult, Step, StrategyKind};
use crate::solution::Solution;

/// Randomized Monotonic Local Search runner. Owns its random generator.
#[derive(Debug, Clone)]
pub struct RmsRunner {
    config: SearchConfig,
    rng: StdRng,
}

impl RmsRunner {
    /// Creates a runner seeded from `config.seed`.
    pub fn new(config: SearchConfig) -> Self {
        let rng = create_rng(config.seed);
        Self { config, rng }
    }

    /// Restarts the random generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Runs the search with random-walk probability `alpha` in `[0, 1)`.
    ///
    /// `alpha = 0` never walks and reduces to plain best-improvement
    /// descent followed by stagnation.
    pub fn run(&mut self, initial: &Solution, alpha: f64) -> Result<SearchResult> {
        self.run_with_cancel(initial, alpha, None)
    }

    /// Runs the search with an optional cancellation token.
    pub fn run_with_cancel(
        &mut self,
        initial: &Solution,
        alpha: f64,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult> {
        self.config.validate()?;
        StrategyKind::RandomizedMonotonic.validate_parameter(alpha)?;

        let started = Instant::now();
        let rng = &mut self.rng;

        Ok(drive(
            StrategyKind::RandomizedMonotonic,
            alpha,
            initial.clone(),
            started,
            &self.config,
            cancel.as_deref(),
            |current, _| {
                if rng.random::<f64>() < alpha {
                    // Random walk: may land on the same machine, always kept.
                    // Outside the stop rule and best tracking.
                    let task = rng.random_range(0..current.task_count());
                    let machine = rng.random_range(0..current.machine_count());
                    current.move_task(task, machine);
                    current.recompute_makespan();
                    return Step::Skip;
                }

                if let Some((_, neighbor)) = best_neighbor(current) {
                    if neighbor.makespan() < current.makespan() {
                        *current = neighbor;
                    }
                }
                Step::Continue
            },
        ))
    }
}
