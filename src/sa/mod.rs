//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! Temperature starts at [`INITIAL_TEMPERATURE`] and is multiplied by the
//! cooling factor after every iteration. The run ends when the schedule
//! freezes at [`MIN_TEMPERATURE`] or the shared no-improvement rule fires.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{AnnealingSchedule, INITIAL_TEMPERATURE, MIN_TEMPERATURE};
pub use runner::SaRunner;
