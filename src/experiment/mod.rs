//! Experiment sweeps over instances, replications and strategy parameters.
//!
//! [`ExperimentRunner`] generates one seeded instance per (machine count,
//! task factor, replication), starts every configured strategy/parameter
//! pair from the greedy constructive solution, and collects one
//! [`RunRecord`] per run. [`summarize`] aggregates records per strategy.
//!
//! With the `parallel` feature the runs of a replication execute on the
//! rayon pool. Each run owns its solution copies and random generator, so
//! results are identical to the sequential sweep.

mod config;
mod runner;
mod summary;

pub use config::ExperimentConfig;
pub use runner::{ExperimentRunner, RunRecord};
pub use summary::{summarize, StrategySummary};
