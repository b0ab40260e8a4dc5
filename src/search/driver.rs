//! Shared driver loop and run result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use super::config::SearchConfig;
use super::types::StrategyKind;
use crate::solution::Solution;

/// Result of a single strategy run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Strategy that produced the result.
    pub strategy: StrategyKind,

    /// Best solution observed.
    pub best: Solution,

    /// Makespan of the best solution.
    pub best_makespan: u64,

    /// Wall-clock time of the run, including any initial descent.
    pub elapsed: Duration,

    /// Total loop iterations executed, accepted or not.
    pub iterations: usize,

    /// Control parameter the strategy ran with.
    pub parameter: f64,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl SearchResult {
    /// Wall-clock time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Outcome of one strategy step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The iteration ran; bookkeeping applies.
    Continue,
    /// The iteration ran but is excluded from best tracking and the
    /// no-improvement counter.
    Skip,
    /// The strategy's own stopping condition holds; the iteration did not run.
    Halt,
}

/// Seeded generator, or one seeded from entropy when `seed` is `None`.
pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// Runs the shared search loop from `start`.
///
/// `step` receives the current solution mutably and the best-so-far
/// snapshot. Every step that runs is counted as an iteration. After a
/// [`Step::Continue`] the current solution is also compared against the
/// best one; a [`Step::Skip`] leaves the best and the counter untouched.
pub(crate) fn drive<F>(
    strategy: StrategyKind,
    parameter: f64,
    start: Solution,
    started: Instant,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
    mut step: F,
) -> SearchResult
where
    F: FnMut(&mut Solution, &Solution) -> Step,
{
    debug!(
        %strategy,
        parameter,
        tasks = start.task_count(),
        machines = start.machine_count(),
        initial_makespan = start.makespan(),
        "search started"
    );

    let mut current = start;
    let mut best = current.clone();
    let mut iterations = 0usize;
    let mut no_improve = 0usize;
    let mut cancelled = false;

    while no_improve < config.max_no_improve {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            cancelled = true;
            break;
        }

        match step(&mut current, &best) {
            Step::Halt => break,
            Step::Skip => {
                iterations += 1;
                continue;
            }
            Step::Continue => iterations += 1,
        }

        if current.makespan() < best.makespan() {
            best.clone_from(&current);
            no_improve = 0;
            trace!(iteration = iterations, makespan = best.makespan(), "new best");
        } else {
            no_improve += 1;
        }
    }

    let elapsed = started.elapsed();
    debug!(
        %strategy,
        parameter,
        iterations,
        best_makespan = best.makespan(),
        cancelled,
        elapsed_ms = elapsed.as_millis() as u64,
        "search finished"
    );

    SearchResult {
        strategy,
        best_makespan: best.makespan(),
        best,
        elapsed,
        iterations,
        parameter,
        cancelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;

    fn start() -> Solution {
        let instance = Instance::new(2, vec![3, 3, 3]).unwrap();
        Solution::greedy(&instance)
    }

    #[test]
    fn test_stops_after_threshold_without_improvement() {
        let config = SearchConfig::default().with_max_no_improve(25);
        let result = drive(
            StrategyKind::RandomizedMonotonic,
            0.5,
            start(),
            Instant::now(),
            &config,
            None,
            |_, _| Step::Continue,
        );

        assert_eq!(result.iterations, 25);
        assert_eq!(result.best_makespan, 6);
        assert!(!result.cancelled);
        assert!((result.parameter - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_improvement_resets_counter() {
        let instance = Instance::new(2, vec![4, 4, 4, 4]).unwrap();
        let mut initial = Solution::new(&instance);
        initial.recompute_makespan(); // all on machine 0: 16

        let config = SearchConfig::default().with_max_no_improve(3);
        let mut next_task = 0;
        let result = drive(
            StrategyKind::TabuSearch,
            0.0,
            initial,
            Instant::now(),
            &config,
            None,
            |current, _| {
                if next_task < 2 {
                    current.move_task(next_task, 1);
                    current.recompute_makespan();
                    next_task += 1;
                }
                Step::Continue
            },
        );

        // 16 -> 12 -> 8, then three stagnant iterations.
        assert_eq!(result.best_makespan, 8);
        assert_eq!(result.iterations, 5);
        assert_eq!(result.best.makespan(), 8);
    }

    #[test]
    fn test_halt_does_not_count() {
        let config = SearchConfig::default();
        let mut calls = 0;
        let result = drive(
            StrategyKind::SimulatedAnnealing,
            0.9,
            start(),
            Instant::now(),
            &config,
            None,
            |_, _| {
                calls += 1;
                if calls > 3 {
                    Step::Halt
                } else {
                    Step::Continue
                }
            },
        );
        assert_eq!(result.iterations, 3);
    }

    #[test]
    fn test_skip_counts_iteration_only() {
        let instance = Instance::new(2, vec![4, 4, 4, 4]).unwrap();
        let mut initial = Solution::new(&instance);
        initial.recompute_makespan(); // all on machine 0: 16

        let config = SearchConfig::default().with_max_no_improve(2);
        let mut calls = 0;
        let result = drive(
            StrategyKind::RandomizedMonotonic,
            0.9,
            initial,
            Instant::now(),
            &config,
            None,
            |current, _| {
                calls += 1;
                if calls <= 4 {
                    // Improving, but skipped: not recorded as a new best.
                    if calls == 1 {
                        current.move_task(0, 1);
                        current.recompute_makespan();
                    }
                    Step::Skip
                } else {
                    Step::Continue
                }
            },
        );

        // Four skipped steps, then two compared steps; 12 < 16 is only seen
        // by the first compared step.
        assert_eq!(result.iterations, 7);
        assert_eq!(result.best_makespan, 12);
    }

    #[test]
    fn test_cancelled_before_first_iteration() {
        let flag = AtomicBool::new(true);
        let result = drive(
            StrategyKind::TabuSearch,
            0.05,
            start(),
            Instant::now(),
            &SearchConfig::default(),
            Some(&flag),
            |_, _| Step::Continue,
        );
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
    }
}
