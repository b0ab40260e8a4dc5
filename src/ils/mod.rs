//! Iterated Local Search (ILS).
//!
//! Descends to a local optimum, then repeatedly perturbs the current
//! solution (a fraction of tasks reassigned at random) and descends again.
//! The refined candidate replaces the current solution only if it is
//! strictly better.
//!
//! # References
//!
//! - Lourenço, H. R., Martin, O. C. & Stützle, T. (2003). "Iterated Local
//!   Search", *Handbook of Metaheuristics*, 321-353.

mod runner;

pub use runner::IlsRunner;
