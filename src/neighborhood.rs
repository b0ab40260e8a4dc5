//! Single-task reassignment neighborhood.
//!
//! The neighborhood of a solution is every move of one task to a machine
//! other than its current one, `n * (m - 1)` candidates in total. Candidates
//! are enumerated in canonical order: task index ascending, then destination
//! machine ascending, skipping the current machine. Every candidate is
//! evaluated by recomputing machine loads from scratch.

use rand::Rng;

use crate::solution::Solution;

/// Reassignment of `task` from machine `from` to machine `to`.
///
/// Equality is structural over all three fields, which is what the tabu
/// list compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub task: usize,
    pub from: usize,
    pub to: usize,
}

/// Enumerates every move of `solution` in canonical order.
///
/// # Examples
///
/// ```
/// use u_makespan::instance::Instance;
/// use u_makespan::neighborhood::moves;
/// use u_makespan::solution::Solution;
///
/// let instance = Instance::new(3, vec![4, 2]).unwrap();
/// let solution = Solution::greedy(&instance);
/// assert_eq!(moves(&solution).count(), 2 * (3 - 1));
/// ```
pub fn moves(solution: &Solution) -> impl Iterator<Item = Move> + '_ {
    let machine_count = solution.machine_count();
    solution
        .assignment()
        .iter()
        .enumerate()
        .flat_map(move |(task, &from)| {
            (0..machine_count)
                .filter(move |&to| to != from)
                .map(move |to| Move { task, from, to })
        })
}

/// Size of the neighborhood, `n * (m - 1)`.
pub fn size(solution: &Solution) -> usize {
    solution.task_count() * (solution.machine_count() - 1)
}

/// Best neighbor over the whole neighborhood.
///
/// Returns the first candidate with the lowest makespan in canonical order,
/// or `None` when the neighborhood is empty (a single machine).
pub fn best_neighbor(solution: &Solution) -> Option<(Move, Solution)> {
    best_neighbor_where(solution, |_, _| true)
}

/// Best neighbor among the candidates accepted by `admissible`.
///
/// `admissible` receives each move together with the makespan it would
/// produce. Ties keep the first admissible candidate in canonical order.
pub fn best_neighbor_where<F>(solution: &Solution, mut admissible: F) -> Option<(Move, Solution)>
where
    F: FnMut(&Move, u64) -> bool,
{
    let mut best: Option<(Move, u64)> = None;

    for mv in moves(solution) {
        let makespan = solution.evaluate_move(mv);
        if !admissible(&mv, makespan) {
            continue;
        }
        if best.is_none_or(|(_, best_makespan)| makespan < best_makespan) {
            best = Some((mv, makespan));
        }
    }

    best.map(|(mv, _)| (mv, solution.with_move(mv)))
}

/// Draws one random neighbor: a uniform task moved to a uniform machine
/// different from its current one (the machine is redrawn until it
/// differs).
///
/// Returns `None` when the solution has a single machine.
pub fn random_neighbor<R: Rng>(solution: &Solution, rng: &mut R) -> Option<(Move, Solution)> {
    if solution.machine_count() < 2 {
        return None;
    }

    let task = rng.random_range(0..solution.task_count());
    let from = solution.machine_of(task);
    let mut to = rng.random_range(0..solution.machine_count());
    while to == from {
        to = rng.random_range(0..solution.machine_count());
    }

    let mv = Move { task, from, to };
    Some((mv, solution.with_move(mv)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_canonical_order() {
        let instance = Instance::new(3, vec![1, 1]).unwrap();
        let solution = Solution::greedy(&instance); // [0, 1]

        let all: Vec<Move> = moves(&solution).collect();
        assert_eq!(
            all,
            vec![
                Move { task: 0, from: 0, to: 1 },
                Move { task: 0, from: 0, to: 2 },
                Move { task: 1, from: 1, to: 0 },
                Move { task: 1, from: 1, to: 2 },
            ]
        );
        assert_eq!(all.len(), size(&solution));
    }

    #[test]
    fn test_best_neighbor_lowest_makespan() {
        let instance = Instance::new(2, vec![5, 5, 2]).unwrap();
        let mut solution = Solution::new(&instance);
        for task in 0..3 {
            solution.move_task(task, 0);
        }
        solution.recompute_makespan();
        assert_eq!(solution.makespan(), 12);

        let (mv, neighbor) = best_neighbor(&solution).unwrap();
        // Moving either 5 gives 7; task 0 comes first.
        assert_eq!(mv, Move { task: 0, from: 0, to: 1 });
        assert_eq!(neighbor.makespan(), 7);
    }

    #[test]
    fn test_best_neighbor_tie_first_found() {
        let instance = Instance::new(3, vec![4, 4, 4]).unwrap();
        let mut solution = Solution::new(&instance);
        solution.recompute_makespan(); // all on machine 0, makespan 12

        let (mv, neighbor) = best_neighbor(&solution).unwrap();
        assert_eq!(mv, Move { task: 0, from: 0, to: 1 });
        assert_eq!(neighbor.makespan(), 8);
    }

    #[test]
    fn test_best_neighbor_where_excludes() {
        let instance = Instance::new(2, vec![5, 5, 2]).unwrap();
        let mut solution = Solution::new(&instance);
        solution.recompute_makespan();

        let banned = Move { task: 0, from: 0, to: 1 };
        let (mv, _) = best_neighbor_where(&solution, |m, _| *m != banned).unwrap();
        assert_eq!(mv, Move { task: 1, from: 0, to: 1 });

        assert!(best_neighbor_where(&solution, |_, _| false).is_none());
    }

    #[test]
    fn test_single_machine_has_no_neighbors() {
        let instance = Instance::new(1, vec![5, 5]).unwrap();
        let solution = Solution::greedy(&instance);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(size(&solution), 0);
        assert!(best_neighbor(&solution).is_none());
        assert!(random_neighbor(&solution, &mut rng).is_none());
    }

    #[test]
    fn test_random_neighbor_changes_machine() {
        let instance = Instance::new(3, vec![2, 7, 1, 8]).unwrap();
        let solution = Solution::greedy(&instance);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let (mv, neighbor) = random_neighbor(&solution, &mut rng).unwrap();
            assert_ne!(mv.from, mv.to);
            assert_eq!(mv.from, solution.machine_of(mv.task));
            assert_eq!(neighbor.machine_of(mv.task), mv.to);
        }
    }
}
