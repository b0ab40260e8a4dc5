//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses memory structures
//! (the tabu list) to forbid recently made moves, preventing cycling and
//! encouraging exploration of new regions of the search space.
//!
//! Every iteration moves to the best admissible neighbor, even when it is
//! worse than the current solution. A neighbor is admissible if its move is
//! not tabu, or if it beats the best makespan found so far (aspiration).
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;

pub use config::{fixed_tenure, TabuTenure, RANDOM_TENURE_FACTOR};
pub use list::TabuList;
pub use runner::TabuRunner;
