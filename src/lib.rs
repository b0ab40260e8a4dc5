//! Metaheuristic search for minimum-makespan task assignment.
//!
//! Assigns `n` independent tasks to `m` identical parallel machines,
//! minimizing the makespan (the largest machine load). Provides:
//!
//! - **Solution**: mutable assignment with an explicitly recomputed
//!   makespan, greedy constructive and random initializers.
//! - **Neighborhood**: single-task reassignment moves, enumerated in a
//!   canonical order and evaluated from scratch.
//! - **Local search**: steepest-descent greedy local search.
//! - **Iterated Local Search (ILS)**: perturbation + descent, monotonic
//!   acceptance.
//! - **Randomized Monotonic Search (RMS)**: random walk with probability
//!   `alpha`, otherwise best-improvement.
//! - **Tabu Search (TS)**: FIFO move memory with aspiration.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with geometric
//!   cooling.
//! - **Experiment**: seeded instance sweeps and per-strategy summaries.
//!
//! All strategies share one driver loop that stops after a fixed number of
//! consecutive iterations without a new best makespan.
//!
//! # Example
//!
//! ```
//! use u_makespan::instance::InstanceGenerator;
//! use u_makespan::sa::SaRunner;
//! use u_makespan::search::SearchConfig;
//! use u_makespan::solution::Solution;
//!
//! let instance = InstanceGenerator::new(1115).generate(10, 1.5).unwrap();
//! let initial = Solution::greedy(&instance);
//!
//! let mut runner = SaRunner::new(SearchConfig::default().with_seed(1));
//! let result = runner.run(&initial, 0.95).unwrap();
//! assert!(result.best_makespan <= initial.makespan());
//! ```

pub mod error;
pub mod experiment;
pub mod ils;
pub mod instance;
pub mod local_search;
pub mod neighborhood;
pub mod rms;
pub mod sa;
pub mod search;
pub mod solution;
pub mod tabu;

pub use error::{ConfigError, Result};
