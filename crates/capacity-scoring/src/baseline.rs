//! Reference double-loop calculator.
//!
//! Walks every node and, for each one, every process. O(nodes × processes),
//! so it is only meant to cross-check the ledger path in tests and
//! benchmarks. Node capacities only; compatible assignments only.

use capacity_core::domain::{CapacitySolution, Dimensions, ResourceTotals};
use capacity_core::score::HardSoftScore;

/// Two-tier score of `solution`: hard is the summed node shortfall over all
/// three dimensions, soft is minus the cost of every used node.
///
/// Processes on unknown nodes are skipped.
pub fn naive_score(solution: &CapacitySolution) -> HardSoftScore {
    let mut hard = 0i64;
    let mut soft = 0i64;

    for node in &solution.nodes {
        let mut usage = ResourceTotals::ZERO;
        let mut used = false;

        for process in &solution.processes {
            if process.assigned_node == Some(node.id) && node.is_compatible_with(process) {
                usage.add(&process.required);
                used = true;
            }
        }

        hard += ResourceTotals::from(node.capacity).shortfall(&usage, Dimensions::All);
        if used {
            soft -= i64::from(node.cost);
        }
    }

    HardSoftScore::of(hard, soft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use capacity_test::{cost_instance, single_node_instance, ProcessBuilder, EDGE};

    #[test]
    fn test_capacity_examples() {
        let cpu = single_node_instance(vec![
            ProcessBuilder::new(1).cpu(1).on(1).build(),
            ProcessBuilder::new(2).cpu(10).on(1).build(),
        ]);
        assert_eq!(naive_score(&cpu), HardSoftScore::of(-1, -50));

        let memory = single_node_instance(vec![
            ProcessBuilder::new(1).memory(100).on(1).build(),
            ProcessBuilder::new(2).memory(10).on(1).build(),
        ]);
        assert_eq!(naive_score(&memory).hard(), -10);

        let disk = single_node_instance(vec![
            ProcessBuilder::new(1).disk(500).on(1).build(),
            ProcessBuilder::new(2).disk(1000).on(1).build(),
        ]);
        assert_eq!(naive_score(&disk).hard(), -500);
    }

    #[test]
    fn test_cost_of_used_nodes_only() {
        let solution = cost_instance(vec![
            ProcessBuilder::new(1).cpu(1).on(1).build(),
            ProcessBuilder::new(2).cpu(1).on(1).build(),
            ProcessBuilder::new(3).cpu(1).build(),
        ]);
        assert_eq!(naive_score(&solution), HardSoftScore::of(0, -50));
    }

    #[test]
    fn test_incompatible_assignment_ignored() {
        let solution = single_node_instance(vec![ProcessBuilder::new(1)
            .cpu(50)
            .node_type(EDGE)
            .on(1)
            .build()]);
        assert_eq!(naive_score(&solution), HardSoftScore::ZERO);
    }
}
