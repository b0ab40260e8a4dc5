//! Tabu list length policy.

use rand::Rng;

/// Upper fraction of the task count used by the randomized tenure.
pub const RANDOM_TENURE_FACTOR: f64 = 0.09;

/// How the tabu list length is chosen each iteration.
///
/// # Examples
///
/// ```
/// use u_makespan::tabu::TabuTenure;
///
/// assert_eq!(TabuTenure::from_parameter(0.05), TabuTenure::Fixed { factor: 0.05 });
/// assert_eq!(TabuTenure::from_parameter(-1.0), TabuTenure::Randomized);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TabuTenure {
    /// `floor(factor * n)` every iteration.
    Fixed {
        /// Fraction of the task count. Values `>= 1` keep every recent
        /// move tabu, bounded in practice by the neighborhood size.
        factor: f64,
    },
    /// `floor(u * RANDOM_TENURE_FACTOR * n)` with `u` redrawn every iteration.
    Randomized,
}

impl TabuTenure {
    /// Negative parameters select the randomized policy.
    pub fn from_parameter(alpha: f64) -> Self {
        if alpha < 0.0 {
            TabuTenure::Randomized
        } else {
            TabuTenure::Fixed { factor: alpha }
        }
    }

    /// Tabu list length for this iteration. Only the randomized policy
    /// draws from `rng`.
    pub fn length<R: Rng>(&self, task_count: usize, rng: &mut R) -> usize {
        match *self {
            TabuTenure::Fixed { factor } => fixed_tenure(factor, task_count),
            TabuTenure::Randomized => {
                let u: f64 = rng.random();
                (u * RANDOM_TENURE_FACTOR * task_count as f64).floor() as usize
            }
        }
    }
}

/// `floor(factor * task_count)`.
pub fn fixed_tenure(factor: f64, task_count: usize) -> usize {
    (factor * task_count as f64).floor() as usize
}
