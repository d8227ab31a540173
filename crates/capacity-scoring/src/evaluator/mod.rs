//! Constraint evaluator
//!
//! One pass over the processes of a solution. Compatible assignments feed
//! the [`ResourceLedger`]; mismatched and missing assignments are collected
//! as [`Violation`]s weighted by the process's difficulty index.

use capacity_config::ScoringConfig;
use capacity_core::domain::{CapacitySolution, Dimensions, NodeId, Process, ProcessId};
use capacity_core::error::{CapacityError, Result};
use tracing::warn;

use crate::ledger::ResourceLedger;

pub use capacity_config::Granularity;


/// Construction-time parameters of the evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluatorSettings {
    pub granularity: Granularity,
    /// Dimensions checked against each node's capacity.
    pub node_dimensions: Dimensions,
    /// Dimensions checked against node type and zone totals.
    pub aggregate_dimensions: Dimensions,
}

impl EvaluatorSettings {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            ..Self::default()
        }
    }

    pub fn with_node_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.node_dimensions = dimensions;
        self
    }

    pub fn with_aggregate_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.aggregate_dimensions = dimensions;
        self
    }

    /// Returns true when node type and zone totals are checked.
    pub fn is_hierarchical(&self) -> bool {
        self.granularity == Granularity::Hierarchical
    }
}

impl From<&ScoringConfig> for EvaluatorSettings {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            granularity: config.granularity,
            node_dimensions: config.node_dimensions,
            aggregate_dimensions: config.aggregate_dimensions,
        }
    }
}

/// A process breaking a placement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub process: ProcessId,
    /// Node the process sits on, if any.
    pub node: Option<NodeId>,
    /// The process's difficulty index.
    pub magnitude: i64,
}

impl Violation {
    fn of(process: &Process) -> Self {
        Self {
            process: process.id,
            node: process.assigned_node,
            magnitude: process.difficulty_index(),
        }
    }
}

/// Output of one evaluation pass.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    pub solution: &'a CapacitySolution,
    pub settings: EvaluatorSettings,
    pub ledger: ResourceLedger,
    /// Indexed by node slot; true once a compatible process sits on it.
    pub used_nodes: Vec<bool>,
    pub wrong_node_type: Vec<Violation>,
    pub wrong_zone: Vec<Violation>,
    pub unassigned: Vec<Violation>,
}

impl Evaluation<'_> {
    pub fn used_node_count(&self) -> usize {
        self.used_nodes.iter().filter(|used| **used).count()
    }

    /// Slots of the used nodes, in node order.
    pub fn used_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.used_nodes
            .iter()
            .enumerate()
            .filter_map(|(slot, used)| used.then_some(slot))
    }

    /// Summed magnitude of `violations`, saturating.
    pub fn total(violations: &[Violation]) -> i64 {
        violations
            .iter()
            .fold(0i64, |sum, v| sum.saturating_add(v.magnitude))
    }
}

/// Walks the assignment once and fills a fresh ledger.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintEvaluator {
    settings: EvaluatorSettings,
}

impl ConstraintEvaluator {
    pub fn new(settings: EvaluatorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> EvaluatorSettings {
        self.settings
    }

    /// Evaluates `solution`.
    ///
    /// A process counts towards ledger usage only when its node matches both
    /// its required zone and node type. Otherwise it is reported once per
    /// mismatching rule. Processes without a node are reported as unassigned.
    ///
    /// # Errors
    ///
    /// - [`CapacityError::DuplicateNode`] if two nodes share an id
    /// - [`CapacityError::UnknownNode`] if a process references a node that
    ///   is not part of the solution
    pub fn evaluate<'a>(&self, solution: &'a CapacitySolution) -> Result<Evaluation<'a>> {
        let mut ledger = ResourceLedger::new(solution)?;
        let mut used_nodes = vec![false; solution.nodes.len()];
        let mut wrong_node_type = Vec::new();
        let mut wrong_zone = Vec::new();
        let mut unassigned = Vec::new();

        for process in &solution.processes {
            let Some(node_id) = process.assigned_node else {
                unassigned.push(Violation::of(process));
                continue;
            };
            let Some(slot) = ledger.node_slot(node_id) else {
                warn!(event = "unknown_node", process = %process.id, node = %node_id);
                return Err(CapacityError::UnknownNode {
                    process: process.id,
                    node: node_id,
                });
            };

            let node = &solution.nodes[slot];
            let type_matches = node.node_type == process.node_type;
            let zone_matches = node.zone == process.zone;
            if type_matches && zone_matches {
                ledger.record(slot, &process.required);
                used_nodes[slot] = true;
                continue;
            }
            if !type_matches {
                wrong_node_type.push(Violation::of(process));
            }
            if !zone_matches {
                wrong_zone.push(Violation::of(process));
            }
        }

        Ok(Evaluation {
            solution,
            settings: self.settings,
            ledger,
            used_nodes,
            wrong_node_type,
            wrong_zone,
            unassigned,
        })
    }
}
