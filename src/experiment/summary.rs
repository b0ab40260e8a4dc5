//! Per-strategy aggregation of run records.

use std::collections::BTreeMap;

use super::runner::RunRecord;
use crate::search::StrategyKind;

/// Aggregate statistics of one strategy over a set of runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategySummary {
    pub strategy: StrategyKind,
    pub runs: usize,
    pub mean_iterations: f64,
    pub mean_elapsed_seconds: f64,
    pub mean_makespan: f64,
    pub best_makespan: u64,
    /// Parameter with the lowest mean makespan (first one on ties).
    pub best_parameter: f64,
    /// Parameter with the lowest mean elapsed time (first one on ties).
    pub fastest_parameter: f64,
}

#[derive(Default)]
struct Totals {
    runs: usize,
    iterations: f64,
    elapsed: f64,
    makespan: f64,
}

impl Totals {
    fn add(&mut self, record: &RunRecord) {
        self.runs += 1;
        self.iterations += record.iterations as f64;
        self.elapsed += record.elapsed_seconds;
        self.makespan += record.makespan as f64;
    }

    fn mean(&self, sum: f64) -> f64 {
        sum / self.runs as f64
    }
}

/// Summarizes `records` per strategy, in [`StrategyKind`] order.
///
/// # Examples
///
/// ```
/// use u_makespan::experiment::{summarize, RunRecord};
/// use u_makespan::search::StrategyKind;
///
/// let record = |parameter, makespan| RunRecord {
///     strategy: StrategyKind::TabuSearch,
///     task_count: 20,
///     machine_count: 10,
///     replication: 1,
///     elapsed_seconds: 0.5,
///     iterations: 1200,
///     makespan,
///     parameter,
/// };
///
/// let summary = summarize(&[record(0.01, 110), record(0.05, 104)]);
/// assert_eq!(summary.len(), 1);
/// assert_eq!(summary[0].best_makespan, 104);
/// assert_eq!(summary[0].best_parameter, 0.05);
/// ```
pub fn summarize(records: &[RunRecord]) -> Vec<StrategySummary> {
    let mut by_strategy: BTreeMap<StrategyKind, (Totals, Vec<(f64, Totals)>, u64)> =
        BTreeMap::new();

    for record in records {
        let (totals, per_parameter, best) = by_strategy
            .entry(record.strategy)
            .or_insert_with(|| (Totals::default(), Vec::new(), u64::MAX));

        totals.add(record);
        *best = (*best).min(record.makespan);

        // Parameters are compared bitwise; grids reuse the same literals.
        match per_parameter
            .iter_mut()
            .find(|(p, _)| p.to_bits() == record.parameter.to_bits())
        {
            Some((_, t)) => t.add(record),
            None => {
                let mut t = Totals::default();
                t.add(record);
                per_parameter.push((record.parameter, t));
            }
        }
    }

    by_strategy
        .into_iter()
        .map(|(strategy, (totals, per_parameter, best_makespan))| {
            let best_parameter = argmin(&per_parameter, |t| t.mean(t.makespan));
            let fastest_parameter = argmin(&per_parameter, |t| t.mean(t.elapsed));

            StrategySummary {
                strategy,
                runs: totals.runs,
                mean_iterations: totals.mean(totals.iterations),
                mean_elapsed_seconds: totals.mean(totals.elapsed),
                mean_makespan: totals.mean(totals.makespan),
                best_makespan,
                best_parameter,
                fastest_parameter,
            }
        })
        .collect()
}

fn argmin<F>(groups: &[(f64, Totals)], key: F) -> f64
where
    F: Fn(&Totals) -> f64,
{
    let mut best: Option<(f64, f64)> = None;
    for (parameter, totals) in groups {
        let value = key(totals);
        if best.is_none_or(|(_, v)| value < v) {
            best = Some((*parameter, value));
        }
    }
    best.map_or(f64::NAN, |(p, _)| p)
}
