//! Zones, node types, nodes and processes.

use std::fmt;

use super::ids::{NodeId, NodeTypeId, ProcessId, ZoneId};
use super::resources::Resources;
use super::traits::PlanningId;

/// An availability zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
}

impl Zone {
    pub fn new(id: impl Into<ZoneId>, name: impl Into<String>) -> Self {
        Zone {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A node type such as `COMPUTE`, `EDGE` or `STORAGE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeType {
    pub id: NodeTypeId,
    pub name: String,
}

impl NodeType {
    pub fn new(id: impl Into<NodeTypeId>, name: impl Into<String>) -> Self {
        NodeType {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A node: the supply unit processes are placed on.
///
/// Nodes are problem facts; nothing about them changes while an assignment
/// is scored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub capacity: Resources,
    /// Activation cost, paid once the node hosts any compatible process.
    pub cost: u32,
    pub zone: ZoneId,
    pub node_type: NodeTypeId,
}

impl Node {
    pub fn new(
        id: impl Into<NodeId>,
        capacity: Resources,
        cost: u32,
        zone: impl Into<ZoneId>,
        node_type: impl Into<NodeTypeId>,
    ) -> Self {
        let id = id.into();
        Node {
            id,
            name: id.to_string(),
            capacity,
            cost,
            zone: zone.into(),
            node_type: node_type.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Product of the node's capacities; larger means stronger.
    pub fn difficulty_index(&self) -> i64 {
        self.capacity.difficulty_index()
    }

    /// Returns true when the process requires this node's zone and node type.
    pub fn is_compatible_with(&self, process: &Process) -> bool {
        self.zone == process.zone && self.node_type == process.node_type
    }
}

impl PlanningId for Node {
    type Id = NodeId;

    fn planning_id(&self) -> NodeId {
        self.id
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {}, {}, {}, cost={}]",
            self.id, self.name, self.capacity, self.zone, self.node_type, self.cost
        )
    }
}

/// A process: the demand unit being placed.
///
/// `assigned_node` is the planning variable and the only field an optimizer
/// changes between evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Process {
    pub id: ProcessId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub required: Resources,
    /// Required zone.
    pub zone: ZoneId,
    /// Required node type.
    pub node_type: NodeTypeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub assigned_node: Option<NodeId>,
}

impl Process {
    pub fn new(
        id: impl Into<ProcessId>,
        required: Resources,
        zone: impl Into<ZoneId>,
        node_type: impl Into<NodeTypeId>,
    ) -> Self {
        let id = id.into();
        Process {
            id,
            name: id.to_string(),
            required,
            zone: zone.into(),
            node_type: node_type.into(),
            assigned_node: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the process already placed on `node`.
    pub fn assigned_to(mut self, node: impl Into<NodeId>) -> Self {
        self.assigned_node = Some(node.into());
        self
    }

    /// Product of the required amounts; larger means harder to place.
    pub fn difficulty_index(&self) -> i64 {
        self.required.difficulty_index()
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_node.is_some()
    }

    pub fn assign(&mut self, node: NodeId) {
        self.assigned_node = Some(node);
    }

    pub fn unassign(&mut self) {
        self.assigned_node = None;
    }
}

impl PlanningId for Process {
    type Id = ProcessId;

    fn planning_id(&self) -> ProcessId {
        self.id
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {}, {}, {}] assigned to ",
            self.id, self.name, self.required, self.zone, self.node_type
        )?;
        match self.assigned_node {
            Some(node) => write!(f, "{}", node),
            None => f.write_str("nothing"),
        }
    }
}
