//! Shared search framework.
//!
//! Every strategy runs on the same driver loop: it owns a current solution
//! and a best-so-far snapshot, executes one strategy-specific step per
//! iteration, and stops after `max_no_improve` consecutive iterations
//! without a strict improvement of the best makespan. The best snapshot is
//! replaced by a deep copy only on strict improvement, which also resets
//! the counter.
//!
//! Strategies are selected through [`StrategyKind`] and dispatched by
//! [`run_strategy`].

mod config;
mod driver;
mod types;

pub use config::{SearchConfig, MAX_NO_IMPROVE};
pub use driver::SearchResult;
pub use types::{run_strategy, StrategyKind};

pub(crate) use driver::{create_rng, drive, Step};
