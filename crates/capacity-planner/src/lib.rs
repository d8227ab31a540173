//! Capacity Planner - tiered scoring for process-to-node placement
//!
//! Hand a [`CapacitySolution`] to a [`CapacityScoreCalculator`] and read back
//! a hard/medium/soft score. The optimizer driving the search lives outside
//! this crate; it only needs the score function and the ordering heuristics.
//!
//! # Example
//!
//! ```rust
//! use capacity_planner::prelude::*;
//!
//! let solution = CapacitySolution::new(
//!     vec![Zone::new(0, "Zone1")],
//!     vec![NodeType::new(0, "COMPUTE")],
//!     vec![Node::new(1, Resources::new(10, 100, 1000), 50, 0, 0)],
//!     vec![Process::new(1, Resources::new(1, 100, 500), 0, 0).assigned_to(1)],
//! );
//!
//! let calculator = CapacityScoreCalculator::default();
//! let score = calculator.calculate(&solution).unwrap();
//! assert_eq!(score, HardMediumSoftScore::of(0, 0, -50));
//! assert!(score.is_feasible());
//! ```

// Score types
pub use capacity_core::score::{
    HardMediumSoftScore, HardSoftScore, ParseableScore, Score, ScoreLevel, TieredScore,
};

// Domain model
pub use capacity_core::domain::{
    CapacitySolution, Dimensions, Node, NodeId, NodeType, NodeTypeId, PlanningId,
    PlanningSolution, Process, ProcessId, Resources, Zone, ZoneId,
};
pub use capacity_core::{CapacityError, ConstraintKind, ConstraintRef};

// Configuration
pub use capacity_config::{ConfigError, Granularity, ScoreType, ScoringConfig, TierConfig};

// Scoring
pub use capacity_scoring::{
    evaluate, naive_score, CapacityScoreCalculator, ConstraintList, ConstraintResult,
    ScoreExplanation,
};

// Ordering heuristics for construction phases
pub use capacity_scoring::ordering;

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::ordering::{nodes_by_strength, processes_by_difficulty};
    pub use super::{
        CapacityScoreCalculator, CapacitySolution, HardMediumSoftScore, HardSoftScore, Node,
        NodeId, NodeType, Process, Resources, Score, ScoreExplanation, ScoringConfig, Zone,
    };
}
