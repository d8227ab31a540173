//! Capacity Core - Core types and traits for capacity planning
//!
//! This crate provides the fundamental abstractions of the planner:
//! - Score types for representing assignment quality
//! - The domain model: zones, node types, nodes, processes
//! - Constraint identification shared by scoring and configuration

pub mod constraint;
pub mod domain;
pub mod error;
pub mod score;

pub use constraint::{ConstraintKind, ConstraintRef, CONSTRAINT_PACKAGE};
pub use domain::{
    CapacitySolution, Dimensions, Node, NodeId, NodeType, NodeTypeId, PlanningId,
    PlanningSolution, Process, ProcessId, ResourceTotals, Resources, Zone, ZoneId,
};
pub use error::CapacityError;
pub use score::{
    HardMediumSoftScore, HardSoftScore, ParseableScore, Score, ScoreLevel, ScoreParseError,
    TieredScore,
};
