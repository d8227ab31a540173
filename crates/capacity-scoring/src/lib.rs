//! Capacity scoring for the capacity planner.
//!
//! This crate turns a candidate assignment of processes to nodes into a
//! tiered score:
//! - [`ledger`]: capacity and usage per node, node type and zone
//! - [`evaluator`]: one pass over the processes filling the ledger and
//!   collecting placement violations
//! - [`constraint`]: the tagged rule list and the score composer
//! - [`calculator`]: the entry point an optimizer calls per candidate
//! - [`analysis`]: per-constraint score explanations
//! - [`ordering`]: difficulty and strength comparators for construction
//! - [`baseline`]: the double-loop reference calculator
//!
//! # Example
//!
//! ```
//! use capacity_core::domain::{CapacitySolution, Node, NodeType, Process, Resources, Zone};
//! use capacity_core::HardMediumSoftScore;
//!
//! let solution = CapacitySolution::new(
//!     vec![Zone::new(0, "Zone1")],
//!     vec![NodeType::new(0, "COMPUTE")],
//!     vec![Node::new(1, Resources::new(10, 100, 1000), 50, 0, 0)],
//!     vec![Process::new(1, Resources::new(1, 100, 500), 0, 0)],
//! );
//!
//! let score = capacity_scoring::evaluate(&solution).unwrap();
//! assert_eq!(score, HardMediumSoftScore::of(0, -50_000, 0));
//! ```

pub mod analysis;
pub mod baseline;
pub mod calculator;
pub mod constraint;
pub mod evaluator;
pub mod ledger;
pub mod ordering;

#[cfg(test)]
mod analysis_tests;

pub use analysis::{ConstraintAnalysis, ConstraintJustification, ConstraintMatch, ScoreExplanation};
pub use baseline::naive_score;
pub use calculator::{evaluate, CapacityScoreCalculator};
pub use constraint::{
    CapacityConstraint, ConstraintList, ConstraintResult, MatchSubject, Penalty,
};
pub use evaluator::{ConstraintEvaluator, Evaluation, EvaluatorSettings, Granularity, Violation};
pub use ledger::{build_capacity, new_usage_maps, LedgerCapacities, LedgerUsages, ResourceLedger};
pub use ordering::{
    node_strength, node_strength_by_index, nodes_by_strength, process_difficulty,
    process_difficulty_by_index, processes_by_difficulty, SolutionComparator,
};
