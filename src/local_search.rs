//! Steepest-descent greedy local search.

use tracing::trace;

use crate::neighborhood::best_neighbor;
use crate::solution::Solution;

/// Descends from `solution` to a local optimum of the single-move
/// neighborhood.
///
/// Each step moves to the best neighbor if its makespan is strictly lower
/// than the current one and stops otherwise. Deterministic: no randomness
/// is involved.
///
/// # Examples
///
/// ```
/// use u_makespan::instance::Instance;
/// use u_makespan::local_search::descend;
/// use u_makespan::solution::Solution;
///
/// let instance = Instance::new(2, vec![5, 5, 2]).unwrap();
/// let mut start = Solution::new(&instance);
/// start.recompute_makespan(); // everything on machine 0
///
/// let optimum = descend(start);
/// assert_eq!(optimum.makespan(), 7);
/// ```
pub fn descend(mut solution: Solution) -> Solution {
    let mut steps = 0usize;

    while let Some((_, neighbor)) = best_neighbor(&solution) {
        if neighbor.makespan() >= solution.makespan() {
            break;
        }
        solution = neighbor;
        steps += 1;
    }

    trace!(steps, makespan = solution.makespan(), "local optimum reached");
    solution
}
