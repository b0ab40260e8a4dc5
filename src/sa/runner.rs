//! SA execution loop.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealingSchedule;
use crate::error::Result;
use crate::neighborhood::random_neighbor;
use crate::search::{create_rng, drive, SearchConfig, SearchResult, Step, StrategyKind};
use crate::solution::Solution;

/// Executes Simulated Annealing. Owns its random generator.
#[derive(Debug, Clone)]
pub struct SaRunner {
    config: SearchConfig,
    rng: StdRng,
}

impl SaRunner {
    /// Creates a runner seeded from `config.seed`.
    pub fn new(config: SearchConfig) -> Self {
        let rng = create_rng(config.seed);
        Self { config, rng }
    }

    /// Restarts the random generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Runs SA with geometric cooling factor `cooling_factor`.
    pub fn run(&mut self, initial: &Solution, cooling_factor: f64) -> Result<SearchResult> {
        self.run_with_cancel(initial, cooling_factor, None)
    }

    /// Runs SA with an optional cancellation token.
    pub fn run_with_cancel(
        &mut self,
        initial: &Solution,
        cooling_factor: f64,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult> {
        self.config.validate()?;
        StrategyKind::SimulatedAnnealing.validate_parameter(cooling_factor)?;

        let started = Instant::now();
        let mut schedule = AnnealingSchedule::new(cooling_factor);
        let rng = &mut self.rng;

        Ok(drive(
            StrategyKind::SimulatedAnnealing,
            cooling_factor,
            initial.clone(),
            started,
            &self.config,
            cancel.as_deref(),
            |current, _| {
                if schedule.is_frozen() {
                    return Step::Halt;
                }

                // A single machine has no neighbor: counts as a rejection.
                if let Some((_, neighbor)) = random_neighbor(current, rng) {
                    let delta = neighbor.makespan() as f64 - current.makespan() as f64;

                    // Metropolis acceptance criterion
                    let accept = delta < 0.0
                        || rng.random::<f64>() < schedule.acceptance_probability(delta);
                    if accept {
                        *current = neighbor;
                    }
                }

                schedule.cool();
                Step::Continue
            },
        ))
    }
}
