//! Cloud Balancing Example
//!
//! Places processes on nodes spread over three zones and three node types.
//! Processes are taken hardest first; each goes to the strongest node that
//! does not make the score worse than leaving it unassigned.
//!
//! Run with: cargo run -p capacity-cloud-balance
//! Set `RUST_LOG=capacity_scoring=trace` to see every constraint penalty.

use capacity_planner::console;
use capacity_planner::ordering::{nodes_by_strength, processes_by_difficulty};
use capacity_planner::prelude::*;
use capacity_planner::CapacityError;
use tracing::{debug, info, warn};

const ZONES: [&str; 3] = ["Zone1", "Zone2", "Zone3"];
const NODE_TYPES: [&str; 3] = ["COMPUTE", "EDGE", "STORAGE"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    console::init_with_filter("capacity_scoring=info,capacity_cloud_balance=debug");

    let config = ScoringConfig::load("scoring.toml").unwrap_or_default();
    let calculator = match CapacityScoreCalculator::try_new(config) {
        Ok(calculator) => calculator,
        Err(e) => {
            warn!(event = "invalid_config", error = %e);
            CapacityScoreCalculator::default()
        }
    };
    let mut solution = build_instance();

    info!(
        event = "construction_start",
        process_count = solution.process_count(),
        node_count = solution.node_count(),
    );
    let score = first_fit_decreasing(&calculator, &mut solution)?;
    info!(
        event = "construction_end",
        score = %score,
        feasible = score.is_feasible(),
        unassigned = solution.process_count() - solution.assigned_count(),
    );

    println!("{}", solution);
    println!("{}", calculator.explain(&solution)?);
    Ok(())
}

/// Assigns every process, hardest first, to the first node in strength
/// order whose score is at least as good as leaving the process unassigned.
///
/// Returns the final score, also stored on the solution.
fn first_fit_decreasing(
    calculator: &CapacityScoreCalculator,
    solution: &mut CapacitySolution,
) -> Result<HardMediumSoftScore, CapacityError> {
    let nodes: Vec<NodeId> = nodes_by_strength(solution)
        .into_iter()
        .map(|index| solution.nodes[index].id)
        .collect();

    for index in processes_by_difficulty(solution).into_iter().rev() {
        solution.assign(index, None)?;
        let unassigned = calculator.calculate(solution)?;

        let mut placed = None;
        for &node in &nodes {
            solution.assign(index, Some(node))?;
            let score = calculator.calculate(solution)?;
            if score >= unassigned {
                placed = Some((node, score));
                break;
            }
        }

        let process = solution.processes[index].id;
        match placed {
            Some((node, score)) => {
                solution.assign(index, Some(node))?;
                debug!(event = "process_placed", process = %process, node = %node, score = %score);
            }
            None => {
                solution.assign(index, None)?;
                debug!(event = "process_placed", process = %process, score = %unassigned);
            }
        }
    }

    calculator.calculate_and_store(solution)
}

/// Three zones, three node types, nine nodes and a mixed batch of processes.
fn build_instance() -> CapacitySolution {
    let zones = ZONES
        .iter()
        .enumerate()
        .map(|(id, name)| Zone::new(id as u64, *name))
        .collect();
    let node_types = NODE_TYPES
        .iter()
        .enumerate()
        .map(|(id, name)| NodeType::new(id as u64, *name))
        .collect();

    // (cpu, memory, disk, cost, zone, node type)
    let node_specs: [(u32, u32, u32, u32, u64, u64); 9] = [
        (16, 64, 500, 900, 0, 0),
        (8, 32, 250, 400, 0, 0),
        (4, 16, 1000, 300, 0, 2),
        (16, 64, 500, 950, 1, 0),
        (4, 8, 100, 150, 1, 1),
        (4, 8, 100, 150, 1, 1),
        (8, 32, 250, 420, 2, 0),
        (2, 8, 4000, 500, 2, 2),
        (2, 4, 50, 80, 2, 1),
    ];
    let nodes = node_specs
        .iter()
        .enumerate()
        .map(|(i, &(cpu, memory, disk, cost, zone, node_type))| {
            Node::new(i as u64 + 1, Resources::new(cpu, memory, disk), cost, zone, node_type)
        })
        .collect();

    // (cpu, memory, disk, zone, node type)
    let process_specs: [(u32, u32, u32, u64, u64); 14] = [
        (8, 32, 100, 0, 0),
        (4, 16, 50, 0, 0),
        (6, 24, 120, 0, 0),
        (1, 4, 600, 0, 2),
        (12, 48, 200, 1, 0),
        (2, 4, 20, 1, 1),
        (2, 2, 30, 1, 1),
        (3, 6, 60, 1, 1),
        (4, 12, 80, 2, 0),
        (2, 8, 40, 2, 0),
        (1, 2, 2500, 2, 2),
        (1, 4, 1200, 2, 2),
        (1, 2, 10, 2, 1),
        (2, 4, 40, 2, 1),
    ];
    let processes = process_specs
        .iter()
        .enumerate()
        .map(|(i, &(cpu, memory, disk, zone, node_type))| {
            Process::new(i as u64 + 1, Resources::new(cpu, memory, disk), zone, node_type)
        })
        .collect();

    CapacitySolution::new(zones, node_types, nodes, processes)
}
