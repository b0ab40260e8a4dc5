//! Task-to-machine assignments.

use std::sync::Arc;

use rand::Rng;

use crate::instance::Instance;
use crate::neighborhood::Move;

/// A complete assignment of tasks to machines together with its cached
/// makespan.
///
/// The cached makespan is **not** kept in sync automatically. Any call to
/// [`move_task`](Self::move_task) must be followed by
/// [`recompute_makespan`](Self::recompute_makespan) before the makespan is
/// read again. All other mutating methods recompute on their own.
///
/// Cloning deep-copies the assignment and shares the duration array.
#[derive(Debug, Clone)]
pub struct Solution {
    durations: Arc<[u32]>,
    machine_count: usize,
    assignment: Vec<usize>,
    makespan: u64,
}

impl Solution {
    /// Creates an unassigned solution for `instance`.
    ///
    /// Every task starts on machine 0 and the makespan is 0 until an
    /// initializer or [`recompute_makespan`](Self::recompute_makespan) runs.
    pub fn new(instance: &Instance) -> Self {
        Self {
            durations: instance.shared_durations(),
            machine_count: instance.machine_count(),
            assignment: vec![0; instance.task_count()],
            makespan: 0,
        }
    }

    /// Builds a solution populated by the least-loaded constructive heuristic.
    pub fn greedy(instance: &Instance) -> Self {
        let mut solution = Self::new(instance);
        solution.assign_greedy();
        solution
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.assignment.len()
    }

    /// Number of machines.
    pub fn machine_count(&self) -> usize {
        self.machine_count
    }

    /// Task durations, shared with every copy.
    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    /// Machine index of every task.
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Machine currently running `task`.
    pub fn machine_of(&self, task: usize) -> usize {
        self.assignment[task]
    }

    /// Cached makespan as of the last recompute.
    pub fn makespan(&self) -> u64 {
        self.makespan
    }

    /// Assigns tasks in index order, each to the machine with the lowest
    /// current load (lowest machine index on ties).
    pub fn assign_greedy(&mut self) {
        let mut loads = vec![0u64; self.machine_count];

        for (task, &duration) in self.durations.iter().enumerate() {
            let mut target = 0;
            for machine in 1..self.machine_count {
                if loads[machine] < loads[target] {
                    target = machine;
                }
            }
            self.assignment[task] = target;
            loads[target] += u64::from(duration);
        }

        self.recompute_makespan();
    }

    /// Assigns every task to an independently drawn uniform machine.
    pub fn assign_random<R: Rng>(&mut self, rng: &mut R) {
        for machine in self.assignment.iter_mut() {
            *machine = rng.random_range(0..self.machine_count);
        }
        self.recompute_makespan();
    }

    /// Reassigns `task` to `machine` without touching the cached makespan.
    ///
    /// # Panics
    ///
    /// Panics if `task` or `machine` is out of range.
    pub fn move_task(&mut self, task: usize, machine: usize) {
        assert!(
            machine < self.machine_count,
            "machine {machine} out of range (machine count {})",
            self.machine_count
        );
        self.assignment[task] = machine;
    }

    /// Total processing time per machine, recomputed from the assignment.
    pub fn machine_loads(&self) -> Vec<u64> {
        let mut loads = vec![0u64; self.machine_count];
        for (&machine, &duration) in self.assignment.iter().zip(self.durations.iter()) {
            loads[machine] += u64::from(duration);
        }
        loads
    }

    /// Recomputes the cached makespan from scratch.
    pub fn recompute_makespan(&mut self) {
        self.makespan = self.machine_loads().into_iter().max().unwrap_or(0);
    }

    /// Makespan the solution would have after applying `mv`.
    ///
    /// Recomputes every machine load from scratch (O(n + m)); the solution
    /// itself is left untouched.
    pub fn evaluate_move(&self, mv: Move) -> u64 {
        let mut loads = vec![0u64; self.machine_count];
        for (task, (&machine, &duration)) in
            self.assignment.iter().zip(self.durations.iter()).enumerate()
        {
            let machine = if task == mv.task { mv.to } else { machine };
            loads[machine] += u64::from(duration);
        }
        loads.into_iter().max().unwrap_or(0)
    }

    /// Returns an independent copy with `mv` applied and the makespan
    /// recomputed.
    pub fn with_move(&self, mv: Move) -> Solution {
        let mut neighbor = self.clone();
        neighbor.move_task(mv.task, mv.to);
        neighbor.recompute_makespan();
        neighbor
    }

    /// Reassigns `round(n * intensity)` randomly chosen tasks to uniformly
    /// random machines, then recomputes the makespan.
    ///
    /// Tasks are drawn with replacement and a redraw may land on the task's
    /// current machine.
    pub fn perturb<R: Rng>(&mut self, intensity: f64, rng: &mut R) {
        let count = (self.task_count() as f64 * intensity).round() as usize;
        for _ in 0..count {
            let task = rng.random_range(0..self.task_count());
            let machine = rng.random_range(0..self.machine_count);
            self.assignment[task] = machine;
        }
        self.recompute_makespan();
    }
}
