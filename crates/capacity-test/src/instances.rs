//! Canonical problem instances.

use capacity_core::domain::{CapacitySolution, Process};

use crate::builder::{NodeBuilder, ProcessBuilder};
use crate::reference::{node_types, zones, COMPUTE, EDGE, ZONE_1, ZONE_2};

/// One `Zone1`/`COMPUTE` node with id 1, capacity cpu 10, memory 100,
/// disk 1000 and cost 50, hosting the given processes.
pub fn single_node_instance(processes: Vec<Process>) -> CapacitySolution {
    CapacitySolution::new(
        zones(),
        node_types(),
        vec![NodeBuilder::new(1).capacity(10, 100, 1000).cost(50).build()],
        processes,
    )
}

/// Two `Zone1`/`COMPUTE` nodes with the single node capacity and costs 50
/// (id 1) and 500 (id 2).
pub fn cost_instance(processes: Vec<Process>) -> CapacitySolution {
    CapacitySolution::new(
        zones(),
        node_types(),
        vec![
            NodeBuilder::new(1).capacity(10, 100, 1000).cost(50).build(),
            NodeBuilder::new(2).capacity(10, 100, 1000).cost(500).build(),
        ],
        processes,
    )
}

/// Three nodes over two zones, with four unassigned processes.
///
/// | node | zone | type | cpu/memory/disk | cost |
/// |---|---|---|---|---|
/// | 1 | Zone1 | COMPUTE | 4/40/400 | 10 |
/// | 2 | Zone1 | COMPUTE | 4/40/400 | 20 |
/// | 3 | Zone2 | EDGE | 8/80/800 | 30 |
///
/// | process | zone | type | cpu/memory/disk |
/// |---|---|---|---|
/// | 1 | Zone1 | COMPUTE | 2/20/200 |
/// | 2 | Zone1 | COMPUTE | 3/10/100 |
/// | 3 | Zone2 | EDGE | 4/40/400 |
/// | 4 | Zone2 | EDGE | 1/1/1 |
pub fn two_zone_instance() -> CapacitySolution {
    CapacitySolution::new(
        zones(),
        node_types(),
        vec![
            NodeBuilder::new(1).capacity(4, 40, 400).cost(10).build(),
            NodeBuilder::new(2).capacity(4, 40, 400).cost(20).build(),
            NodeBuilder::new(3)
                .capacity(8, 80, 800)
                .cost(30)
                .zone(ZONE_2)
                .node_type(EDGE)
                .build(),
        ],
        vec![
            ProcessBuilder::new(1).required(2, 20, 200).build(),
            ProcessBuilder::new(2).required(3, 10, 100).build(),
            ProcessBuilder::new(3)
                .required(4, 40, 400)
                .zone(ZONE_2)
                .node_type(EDGE)
                .build(),
            ProcessBuilder::new(4)
                .required(1, 1, 1)
                .zone(ZONE_2)
                .node_type(EDGE)
                .build(),
        ],
    )
}
