//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the given solution with an empty tabu list
//! 2. At each iteration:
//!    a. Choose the tabu length (fixed or redrawn)
//!    b. Select the best non-tabu move, or tabu move satisfying aspiration
//!    c. If none qualifies, rescan the neighborhood ignoring tabu status
//!    d. Apply the move unconditionally and add it to the tabu list
//! 3. Terminate after `max_no_improve` iterations without a new best
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::TabuTenure;
use super::list::TabuList;
use crate::error::Result;
use crate::neighborhood::{best_neighbor, best_neighbor_where, Move};
use crate::search::{create_rng, drive, SearchConfig, SearchResult, Step, StrategyKind};
use crate::solution::Solution;

/// Tabu Search runner. Owns its random generator.
#[derive(Debug, Clone)]
pub struct TabuRunner {
    config: SearchConfig,
    rng: StdRng,
}

impl TabuRunner {
    /// Creates a runner seeded from `config.seed`.
    pub fn new(config: SearchConfig) -> Self {
        let rng = create_rng(config.seed);
        Self { config, rng }
    }

    /// Restarts the random generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Executes Tabu Search from `initial`.
    ///
    /// `alpha >= 0` fixes the tabu length at `floor(alpha * n)`; a negative
    /// `alpha` redraws it every iteration (see [`TabuTenure`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_makespan::instance::Instance;
    /// use u_makespan::search::SearchConfig;
    /// use u_makespan::solution::Solution;
    /// use u_makespan::tabu::TabuRunner;
    ///
    /// let instance = Instance::new(3, vec![9, 8, 7, 6, 5, 4]).unwrap();
    /// let initial = Solution::greedy(&instance);
    ///
    /// let mut runner = TabuRunner::new(SearchConfig::default().with_max_no_improve(100).with_seed(1));
    /// let result = runner.run(&initial, 0.2).unwrap();
    /// assert_eq!(result.best_makespan, 13);
    /// ```
    pub fn run(&mut self, initial: &Solution, alpha: f64) -> Result<SearchResult> {
        self.run_with_cancel(initial, alpha, None)
    }

    /// Executes Tabu Search with an optional cancellation token.
    pub fn run_with_cancel(
        &mut self,
        initial: &Solution,
        alpha: f64,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult> {
        self.config.validate()?;
        StrategyKind::TabuSearch.validate_parameter(alpha)?;

        let started = Instant::now();
        let tenure = TabuTenure::from_parameter(alpha);
        let mut tabu = TabuList::new();
        let rng = &mut self.rng;

        Ok(drive(
            StrategyKind::TabuSearch,
            alpha,
            initial.clone(),
            started,
            &self.config,
            cancel.as_deref(),
            |current, best| {
                advance(current, best.makespan(), &tenure, &mut tabu, rng);
                Step::Continue
            },
        ))
    }
}

/// One Tabu Search iteration: draws the tabu length, moves `current` to the
/// selected neighbor and records the move.
pub(crate) fn advance<R: Rng>(
    current: &mut Solution,
    best_makespan: u64,
    tenure: &TabuTenure,
    tabu: &mut TabuList,
    rng: &mut R,
) {
    let capacity = tenure.length(current.task_count(), rng);

    if let Some((mv, neighbor)) = select_move(current, best_makespan, tabu) {
        *current = neighbor;
        tabu.push(mv, capacity);
    }
}

/// Picks the next move from `current`.
///
/// Best candidate among non-tabu moves and tabu moves whose makespan beats
/// `best_makespan`. If no candidate qualifies, the whole neighborhood is
/// scanned again with tabu status ignored. `None` only when the
/// neighborhood is empty.
pub(crate) fn select_move(
    current: &Solution,
    best_makespan: u64,
    tabu: &TabuList,
) -> Option<(Move, Solution)> {
    match best_neighbor_where(current, |mv, makespan| {
        !tabu.contains(mv) || makespan < best_makespan
    }) {
        Some(found) => Some(found),
        None => best_neighbor(current),
    }
}
