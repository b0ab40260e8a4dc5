//! Problem instances and the seeded instance source.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ConfigError, Result};

/// Smallest task duration produced by [`InstanceGenerator`].
pub const MIN_DURATION: u32 = 1;

/// Largest task duration produced by [`InstanceGenerator`].
pub const MAX_DURATION: u32 = 100;

/// An identical-parallel-machines instance: `n` task durations and `m`
/// machines.
///
/// Durations are stored behind an `Arc` so every [`Solution`] derived from
/// the instance shares one immutable copy.
///
/// [`Solution`]: crate::solution::Solution
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    machine_count: usize,
    durations: Arc<[u32]>,
}

impl Instance {
    /// Creates an instance, rejecting zero machines or an empty task list.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_makespan::instance::Instance;
    ///
    /// let instance = Instance::new(2, vec![3, 5, 4]).unwrap();
    /// assert_eq!(instance.task_count(), 3);
    /// assert_eq!(instance.lower_bound(), 6);
    /// ```
    pub fn new(machine_count: usize, durations: Vec<u32>) -> Result<Self> {
        if machine_count == 0 {
            return Err(ConfigError::NoMachines);
        }
        if durations.is_empty() {
            return Err(ConfigError::NoTasks);
        }
        Ok(Self {
            machine_count,
            durations: durations.into(),
        })
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.durations.len()
    }

    pub fn machine_count(&self) -> usize {
        self.machine_count
    }

    /// Task durations, in task order.
    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    pub(crate) fn shared_durations(&self) -> Arc<[u32]> {
        Arc::clone(&self.durations)
    }

    /// Sum of all task durations.
    pub fn total_duration(&self) -> u64 {
        self.durations.iter().map(|&d| u64::from(d)).sum()
    }

    /// Trivial makespan lower bound: `max(ceil(total / m), longest task)`.
    pub fn lower_bound(&self) -> u64 {
        let m = self.machine_count as u64;
        let average = self.total_duration().div_ceil(m);
        let longest = self.durations.iter().copied().max().unwrap_or(0);
        average.max(u64::from(longest))
    }
}

/// Seeded source of random instances.
///
/// Produces `floor(m * r)` tasks with durations drawn uniformly from
/// `[MIN_DURATION, MAX_DURATION]`. Two generators built from the same seed
/// yield the same sequence of instances.
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    rng: StdRng,
}

impl InstanceGenerator {
    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restarts the generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Generates an instance with `machine_count` machines and
    /// `floor(machine_count * task_factor)` tasks.
    pub fn generate(&mut self, machine_count: usize, task_factor: f64) -> Result<Instance> {
        if machine_count == 0 {
            return Err(ConfigError::NoMachines);
        }
        if !task_factor.is_finite() || task_factor <= 0.0 {
            return Err(ConfigError::InvalidTaskFactor(task_factor));
        }

        let task_count = (machine_count as f64 * task_factor).floor() as usize;
        let durations = (0..task_count)
            .map(|_| self.rng.random_range(MIN_DURATION..=MAX_DURATION))
            .collect();

        Instance::new(machine_count, durations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_rejects_empty() {
        assert_eq!(Instance::new(0, vec![1]), Err(ConfigError::NoMachines));
        assert_eq!(Instance::new(3, vec![]), Err(ConfigError::NoTasks));
    }

    #[test]
    fn test_lower_bound() {
        let instance = Instance::new(3, vec![10, 10, 10]).unwrap();
        assert_eq!(instance.lower_bound(), 10);

        // Longest task dominates the average.
        let instance = Instance::new(4, vec![50, 1, 1]).unwrap();
        assert_eq!(instance.lower_bound(), 50);

        let instance = Instance::new(2, vec![5, 5, 1]).unwrap();
        assert_eq!(instance.lower_bound(), 6);
    }

    #[test]
    fn test_generator_task_count_and_range() {
        let mut generator = InstanceGenerator::new(1_000 + 100 + 15);
        let instance = generator.generate(10, 1.5).unwrap();

        assert_eq!(instance.task_count(), 15);
        assert_eq!(instance.machine_count(), 10);
        assert!(instance
            .durations()
            .iter()
            .all(|d| (MIN_DURATION..=MAX_DURATION).contains(d)));
    }

    #[test]
    fn test_generator_deterministic() {
        let a = InstanceGenerator::new(42).generate(20, 2.0).unwrap();
        let b = InstanceGenerator::new(42).generate(20, 2.0).unwrap();
        assert_eq!(a, b);

        let mut generator = InstanceGenerator::new(42);
        let first = generator.generate(20, 2.0).unwrap();
        generator.reseed(42);
        let again = generator.generate(20, 2.0).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_generator_rejects_bad_factor() {
        let mut generator = InstanceGenerator::new(7);
        assert!(generator.generate(10, 0.0).is_err());
        assert!(generator.generate(10, f64::NAN).is_err());
        assert_eq!(generator.generate(0, 1.5), Err(ConfigError::NoMachines));
        // floor(3 * 0.2) == 0 tasks
        assert_eq!(generator.generate(3, 0.2), Err(ConfigError::NoTasks));
    }
}
