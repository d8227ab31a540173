//! Builders for nodes and processes.
//!
//! Unset amounts are zero; zone and node type default to
//! [`ZONE_1`](crate::ZONE_1) and [`COMPUTE`](crate::COMPUTE).
//!
//! # Example
//!
//! ```
//! use capacity_test::{NodeBuilder, ProcessBuilder, EDGE};
//!
//! let node = NodeBuilder::new(1).cpu(10).memory(100).cost(50).build();
//! let process = ProcessBuilder::new(7).cpu(2).node_type(EDGE).on(1).build();
//!
//! assert!(!node.is_compatible_with(&process));
//! ```

use capacity_core::domain::{Node, NodeId, NodeTypeId, Process, Resources, ZoneId};

use crate::reference::{COMPUTE, ZONE_1};

/// Builds a [`Node`].
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    id: NodeId,
    capacity: Resources,
    cost: u32,
    zone: ZoneId,
    node_type: NodeTypeId,
}

impl NodeBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            id: NodeId(id),
            capacity: Resources::ZERO,
            cost: 0,
            zone: ZONE_1,
            node_type: COMPUTE,
        }
    }

    pub fn cpu(mut self, cpu: u32) -> Self {
        self.capacity.cpu = cpu;
        self
    }

    pub fn memory(mut self, memory: u32) -> Self {
        self.capacity.memory = memory;
        self
    }

    pub fn disk(mut self, disk: u32) -> Self {
        self.capacity.disk = disk;
        self
    }

    /// Sets all three capacities.
    pub fn capacity(mut self, cpu: u32, memory: u32, disk: u32) -> Self {
        self.capacity = Resources::new(cpu, memory, disk);
        self
    }

    pub fn cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    pub fn zone(mut self, zone: ZoneId) -> Self {
        self.zone = zone;
        self
    }

    pub fn node_type(mut self, node_type: NodeTypeId) -> Self {
        self.node_type = node_type;
        self
    }

    pub fn build(self) -> Node {
        Node::new(self.id, self.capacity, self.cost, self.zone, self.node_type)
    }
}

/// Builds a [`Process`].
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    id: u64,
    required: Resources,
    zone: ZoneId,
    node_type: NodeTypeId,
    assigned_node: Option<NodeId>,
}

impl ProcessBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            required: Resources::ZERO,
            zone: ZONE_1,
            node_type: COMPUTE,
            assigned_node: None,
        }
    }

    pub fn cpu(mut self, cpu: u32) -> Self {
        self.required.cpu = cpu;
        self
    }

    pub fn memory(mut self, memory: u32) -> Self {
        self.required.memory = memory;
        self
    }

    pub fn disk(mut self, disk: u32) -> Self {
        self.required.disk = disk;
        self
    }

    /// Sets all three required amounts.
    pub fn required(mut self, cpu: u32, memory: u32, disk: u32) -> Self {
        self.required = Resources::new(cpu, memory, disk);
        self
    }

    pub fn zone(mut self, zone: ZoneId) -> Self {
        self.zone = zone;
        self
    }

    pub fn node_type(mut self, node_type: NodeTypeId) -> Self {
        self.node_type = node_type;
        self
    }

    /// Assigns the process to the node with the given id.
    pub fn on(mut self, node: u64) -> Self {
        self.assigned_node = Some(NodeId(node));
        self
    }

    pub fn build(self) -> Process {
        let mut process = Process::new(self.id, self.required, self.zone, self.node_type);
        process.assigned_node = self.assigned_node;
        process
    }
}
