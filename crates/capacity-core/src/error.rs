//! Error types for the capacity planner

use thiserror::Error;

use crate::domain::{NodeId, ProcessId};

/// Main error type for capacity planner operations.
///
/// Infeasible assignments are not errors; they are reported through a
/// negative hard score. These variants cover malformed input only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapacityError {
    /// A process is assigned to a node that is not part of the solution.
    #[error("Process {process} is assigned to unknown node {node}")]
    UnknownNode { process: ProcessId, node: NodeId },

    /// Two nodes in the same solution share an id.
    #[error("Duplicate node id {0}")]
    DuplicateNode(NodeId),

    /// Process index out of range for the solution.
    #[error("Process index {index} out of range ({count} processes)")]
    ProcessIndex { index: usize, count: usize },

    /// Error in scoring configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for capacity planner operations
pub type Result<T> = std::result::Result<T, CapacityError>;
