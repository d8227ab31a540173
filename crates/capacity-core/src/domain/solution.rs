//! The capacity planning solution.

use std::collections::HashSet;
use std::fmt;

use super::entity::{Node, NodeType, Process, Zone};
use super::ids::NodeId;
use super::traits::PlanningSolution;
use crate::error::{CapacityError, Result};
use crate::score::HardMediumSoftScore;

/// All zones, node types, nodes and processes of one problem instance,
/// together with the current assignment and its score.
///
/// # Example
///
/// ```
/// use capacity_core::domain::{
///     CapacitySolution, Node, NodeType, PlanningSolution, Process, Resources, Zone,
/// };
///
/// let mut solution = CapacitySolution::new(
///     vec![Zone::new(0, "Zone1")],
///     vec![NodeType::new(0, "COMPUTE")],
///     vec![Node::new(1, Resources::new(10, 100, 1000), 50, 0, 0)],
///     vec![Process::new(1, Resources::new(1, 10, 100), 0, 0)],
/// );
/// assert_eq!(solution.assigned_count(), 0);
///
/// solution.assign(0, Some(1.into())).unwrap();
/// assert!(solution.is_initialized());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapacitySolution {
    pub zones: Vec<Zone>,
    pub node_types: Vec<NodeType>,
    pub nodes: Vec<Node>,
    pub processes: Vec<Process>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub score: Option<HardMediumSoftScore>,
}

impl CapacitySolution {
    pub fn new(
        zones: Vec<Zone>,
        node_types: Vec<NodeType>,
        nodes: Vec<Node>,
        processes: Vec<Process>,
    ) -> Self {
        CapacitySolution {
            zones,
            node_types,
            nodes,
            processes,
            score: None,
        }
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Number of processes with a node, compatible or not.
    pub fn assigned_count(&self) -> usize {
        self.processes.iter().filter(|p| p.is_assigned()).count()
    }

    /// Processes with no node.
    pub fn unassigned_processes(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter().filter(|p| !p.is_assigned())
    }

    /// Sets the planning variable of the process at `process_index`.
    ///
    /// Clears the cached score. Fails if the index is out of range or the
    /// node is not part of this solution.
    pub fn assign(&mut self, process_index: usize, node: Option<NodeId>) -> Result<()> {
        let count = self.processes.len();
        if let Some(node) = node {
            if self.node(node).is_none() {
                let process = self
                    .processes
                    .get(process_index)
                    .ok_or(CapacityError::ProcessIndex {
                        index: process_index,
                        count,
                    })?;
                return Err(CapacityError::UnknownNode {
                    process: process.id,
                    node,
                });
            }
        }
        let process = self
            .processes
            .get_mut(process_index)
            .ok_or(CapacityError::ProcessIndex {
                index: process_index,
                count,
            })?;
        process.assigned_node = node;
        self.score = None;
        Ok(())
    }

    /// Checks that node ids are unique and that every assigned process
    /// references one of them.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id) {
                return Err(CapacityError::DuplicateNode(node.id));
            }
        }
        for process in &self.processes {
            if let Some(node) = process.assigned_node {
                if !ids.contains(&node) {
                    return Err(CapacityError::UnknownNode {
                        process: process.id,
                        node,
                    });
                }
            }
        }
        Ok(())
    }

    /// One line overview used in log output.
    pub fn summary(&self) -> String {
        format!(
            "{} zones, {} node types, {} nodes, {}/{} processes assigned",
            self.zones.len(),
            self.node_types.len(),
            self.nodes.len(),
            self.assigned_count(),
            self.processes.len()
        )
    }
}

impl PlanningSolution for CapacitySolution {
    type Score = HardMediumSoftScore;

    fn score(&self) -> Option<Self::Score> {
        self.score
    }

    fn set_score(&mut self, score: Option<Self::Score>) {
        self.score = score;
    }

    fn is_initialized(&self) -> bool {
        self.processes.iter().all(Process::is_assigned)
    }
}

impl fmt::Display for CapacitySolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapacitySolution({})", self.summary())?;
        if let Some(score) = self.score {
            write!(f, " score={}", score)?;
        }
        Ok(())
    }
}
