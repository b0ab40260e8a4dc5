//! Experiment sweep execution.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use super::config::ExperimentConfig;
use crate::error::Result;
use crate::instance::{Instance, InstanceGenerator};
use crate::search::{run_strategy, SearchConfig, SearchResult, StrategyKind};
use crate::solution::Solution;

/// One strategy run, tagged with the instance it ran on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    pub strategy: StrategyKind,
    pub task_count: usize,
    pub machine_count: usize,
    /// Replication id, starting at 1.
    pub replication: usize,
    pub elapsed_seconds: f64,
    pub iterations: usize,
    pub makespan: u64,
    pub parameter: f64,
}

impl RunRecord {
    /// Tags `result` with instance metadata.
    pub fn from_result(result: &SearchResult, instance: &Instance, replication: usize) -> Self {
        Self {
            strategy: result.strategy,
            task_count: instance.task_count(),
            machine_count: instance.machine_count(),
            replication,
            elapsed_seconds: result.elapsed_seconds(),
            iterations: result.iterations,
            makespan: result.best_makespan,
            parameter: result.parameter,
        }
    }
}

/// Runs experiment sweeps.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Seed of the instance for (`replication`, `machine_count`, `task_factor`):
    /// `replication * 1000 + m * 10 + floor(r * 10)`.
    pub fn instance_seed(replication: usize, machine_count: usize, task_factor: f64) -> u64 {
        (replication * 1000 + machine_count * 10) as u64 + (task_factor * 10.0).floor() as u64
    }

    /// Executes the whole sweep.
    ///
    /// Records come out grouped by machine count, task factor and
    /// replication, then in strategy/parameter order.
    pub fn run(config: &ExperimentConfig) -> Result<Vec<RunRecord>> {
        config.validate()?;

        let jobs: Vec<(StrategyKind, f64)> = config
            .strategies
            .iter()
            .flat_map(|(kind, parameters)| parameters.iter().map(move |&p| (*kind, p)))
            .collect();

        let total = config.run_count();
        let mut records = Vec::with_capacity(total);

        for &machine_count in &config.machine_counts {
            for &task_factor in &config.task_factors {
                for replication in 1..=config.replications {
                    let seed = Self::instance_seed(replication, machine_count, task_factor);
                    let instance =
                        InstanceGenerator::new(seed).generate(machine_count, task_factor)?;

                    info!(
                        machines = machine_count,
                        tasks = instance.task_count(),
                        task_factor,
                        replication,
                        done = records.len(),
                        total,
                        "running replication"
                    );

                    let batch = Self::run_replication(
                        &instance,
                        replication,
                        &jobs,
                        config.max_no_improve,
                    )?;
                    records.extend(batch);
                }
            }
        }

        info!(runs = records.len(), "experiment finished");
        Ok(records)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_replication(
        instance: &Instance,
        replication: usize,
        jobs: &[(StrategyKind, f64)],
        max_no_improve: usize,
    ) -> Result<Vec<RunRecord>> {
        jobs.iter()
            .map(|&(kind, p)| Self::run_job(instance, replication, kind, p, max_no_improve))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_replication(
        instance: &Instance,
        replication: usize,
        jobs: &[(StrategyKind, f64)],
        max_no_improve: usize,
    ) -> Result<Vec<RunRecord>> {
        jobs.par_iter()
            .map(|&(kind, p)| Self::run_job(instance, replication, kind, p, max_no_improve))
            .collect()
    }

    fn run_job(
        instance: &Instance,
        replication: usize,
        kind: StrategyKind,
        parameter: f64,
        max_no_improve: usize,
    ) -> Result<RunRecord> {
        let initial = Solution::greedy(instance);
        let search = SearchConfig::default()
            .with_max_no_improve(max_no_improve)
            .with_seed(replication as u64);

        let result = run_strategy(kind, &search, &initial, parameter)?;
        debug!(
            %kind,
            parameter,
            replication,
            makespan = result.best_makespan,
            iterations = result.iterations,
            "run complete"
        );
        Ok(RunRecord::from_result(&result, instance, replication))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ExperimentConfig {
        ExperimentConfig::default()
            .with_machine_counts(vec![4])
            .with_task_factors(vec![1.5, 2.0])
            .with_replications(2)
            .with_strategy(StrategyKind::IteratedLocalSearch, vec![0.2])
            .add_strategy(StrategyKind::TabuSearch, vec![-1.0, 0.1])
            .add_strategy(StrategyKind::SimulatedAnnealing, vec![0.9])
            .with_max_no_improve(30)
    }

    #[test]
    fn test_instance_seed() {
        assert_eq!(ExperimentRunner::instance_seed(1, 10, 1.5), 1115);
        assert_eq!(ExperimentRunner::instance_seed(10, 50, 2.0), 10520);
    }

    #[test]
    fn test_sweep_record_count_and_tags() {
        let config = small_config();
        let records = ExperimentRunner::run(&config).unwrap();

        assert_eq!(records.len(), config.run_count());
        assert_eq!(records.len(), 2 * 2 * 4);

        for record in &records {
            assert_eq!(record.machine_count, 4);
            assert!(record.task_count == 6 || record.task_count == 8);
            assert!((1..=2).contains(&record.replication));
            assert!(record.makespan > 0);
        }

        // First block: m=4, r=1.5, replication 1, in job order.
        let kinds: Vec<_> = records[..4].iter().map(|r| r.strategy).collect();
        assert_eq!(
            kinds,
            vec![
                StrategyKind::IteratedLocalSearch,
                StrategyKind::TabuSearch,
                StrategyKind::TabuSearch,
                StrategyKind::SimulatedAnnealing,
            ]
        );
    }

    #[test]
    fn test_sweep_is_reproducible() {
        let config = small_config();
        let a = ExperimentRunner::run(&config).unwrap();
        let b = ExperimentRunner::run(&config).unwrap();

        let key = |r: &RunRecord| (r.strategy, r.replication, r.task_count, r.makespan, r.iterations);
        assert_eq!(
            a.iter().map(key).collect::<Vec<_>>(),
            b.iter().map(key).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_sweep_rejects_invalid_config() {
        let config = small_config().with_replications(0);
        assert!(ExperimentRunner::run(&config).is_err());
    }
}
