//! Ordering heuristics for construction and tie-breaking.
//!
//! Pure total orders over processes (difficulty) and nodes (strength). Both
//! break ties on the planning id so sorting is reproducible across runs.
//! They never look at the ledger or the current assignment.

use std::cmp::Ordering;

use capacity_core::domain::{CapacitySolution, Node, PlanningId, Process};

/// Comparator over two entity indices of a solution, the shape construction
/// placers sort with: `(solution, index_a, index_b) -> Ordering`.
pub type SolutionComparator<S> = fn(&S, usize, usize) -> Ordering;

/// Ascending difficulty index, then ascending id.
///
/// # Example
///
/// ```
/// use capacity_core::domain::{Process, Resources};
/// use capacity_scoring::ordering::process_difficulty;
/// use std::cmp::Ordering;
///
/// let small = Process::new(1, Resources::new(1, 1, 1), 0, 0);
/// let large = Process::new(2, Resources::new(2, 2, 2), 0, 0);
/// assert_eq!(process_difficulty(&small, &large), Ordering::Less);
/// ```
pub fn process_difficulty(a: &Process, b: &Process) -> Ordering {
    a.difficulty_index()
        .cmp(&b.difficulty_index())
        .then_with(|| a.planning_id().cmp(&b.planning_id()))
}

/// Descending capacity product (strongest first), then ascending id.
pub fn node_strength(a: &Node, b: &Node) -> Ordering {
    b.difficulty_index()
        .cmp(&a.difficulty_index())
        .then_with(|| a.planning_id().cmp(&b.planning_id()))
}

/// [`process_difficulty`] over process indices.
///
/// Out of range indices sort first.
pub fn process_difficulty_by_index(solution: &CapacitySolution, a: usize, b: usize) -> Ordering {
    match (solution.processes.get(a), solution.processes.get(b)) {
        (Some(a), Some(b)) => process_difficulty(a, b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

/// [`node_strength`] over node indices.
///
/// Out of range indices sort first.
pub fn node_strength_by_index(solution: &CapacitySolution, a: usize, b: usize) -> Ordering {
    match (solution.nodes.get(a), solution.nodes.get(b)) {
        (Some(a), Some(b)) => node_strength(a, b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

/// Process indices from easiest to hardest.
///
/// Reverse it for "decreasing" construction.
pub fn processes_by_difficulty(solution: &CapacitySolution) -> Vec<usize> {
    sorted_indices(solution, solution.processes.len(), process_difficulty_by_index)
}

/// Node indices from strongest to weakest.
pub fn nodes_by_strength(solution: &CapacitySolution) -> Vec<usize> {
    sorted_indices(solution, solution.nodes.len(), node_strength_by_index)
}

fn sorted_indices(
    solution: &CapacitySolution,
    len: usize,
    comparator: SolutionComparator<CapacitySolution>,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.sort_by(|&a, &b| comparator(solution, a, b));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use capacity_test::{two_zone_instance, NodeBuilder, ProcessBuilder};

    #[test]
    fn test_process_difficulty_ascending_with_id_tiebreak() {
        let a = ProcessBuilder::new(2).required(2, 2, 2).build();
        let b = ProcessBuilder::new(1).required(1, 1, 8).build();
        let c = ProcessBuilder::new(3).required(1, 1, 1).build();

        // Same difficulty: lower id first.
        assert_eq!(process_difficulty(&a, &b), Ordering::Greater);
        assert_eq!(process_difficulty(&c, &a), Ordering::Less);
        assert_eq!(process_difficulty(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_node_strength_descending_with_id_tiebreak() {
        let weak = NodeBuilder::new(1).capacity(1, 1, 1).build();
        let strong = NodeBuilder::new(2).capacity(4, 4, 4).build();
        let strong_twin = NodeBuilder::new(3).capacity(4, 4, 4).build();

        assert_eq!(node_strength(&strong, &weak), Ordering::Less);
        assert_eq!(node_strength(&strong, &strong_twin), Ordering::Less);
        assert_eq!(node_strength(&strong_twin, &strong), Ordering::Greater);
    }

    #[test]
    fn test_sorted_indices() {
        let solution = two_zone_instance();
        // Difficulties: 8_000, 3_000, 64_000, 1.
        assert_eq!(processes_by_difficulty(&solution), vec![3, 1, 0, 2]);
        // Capacity products: 64_000, 64_000, 512_000.
        assert_eq!(nodes_by_strength(&solution), vec![2, 0, 1]);
    }

    #[test]
    fn test_index_comparators_total_on_bad_indices() {
        let solution = two_zone_instance();
        assert_eq!(process_difficulty_by_index(&solution, 9, 0), Ordering::Less);
        assert_eq!(node_strength_by_index(&solution, 0, 9), Ordering::Greater);
        assert_eq!(node_strength_by_index(&solution, 8, 9), Ordering::Equal);
    }

    #[test]
    fn test_comparators_fit_placer_signature() {
        let comparators: [SolutionComparator<CapacitySolution>; 2] =
            [process_difficulty_by_index, node_strength_by_index];
        let solution = two_zone_instance();
        assert_eq!(comparators[0](&solution, 0, 1), Ordering::Greater);
        assert_eq!(comparators[1](&solution, 2, 0), Ordering::Less);
    }
}
