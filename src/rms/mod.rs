//! Randomized Monotonic Local Search (RMS).
//!
//! Each iteration either takes a random-walk step (with probability
//! `alpha`, always accepted) or a best-improvement step that is accepted
//! only when it strictly lowers the makespan.

mod runner;

pub use runner::RmsRunner;
