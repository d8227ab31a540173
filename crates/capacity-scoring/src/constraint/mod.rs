//! Constraint list and score composition.
//!
//! Every capacity rule is a [`CapacityConstraint`]: a [`ConstraintKind`]
//! selecting a pure check over an [`Evaluation`], plus the [`ScoreLevel`]
//! its penalty lands on. [`ConstraintList`] holds the active rules and sums
//! their penalties by tier.

use std::fmt;

use capacity_config::ScoringConfig;
use capacity_core::domain::{NodeId, NodeTypeId, ProcessId, ZoneId};
use capacity_core::score::{ScoreLevel, TieredScore};
use capacity_core::{ConstraintKind, ConstraintRef};
use tracing::trace;

use crate::evaluator::{Evaluation, Violation};

#[cfg(test)]
mod tests;

/// What a single constraint match is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchSubject {
    Node(NodeId),
    NodeType(NodeTypeId),
    Zone(ZoneId),
    Process(ProcessId),
}

impl fmt::Display for MatchSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchSubject::Node(id) => write!(f, "{}", id),
            MatchSubject::NodeType(id) => write!(f, "{}", id),
            MatchSubject::Zone(id) => write!(f, "{}", id),
            MatchSubject::Process(id) => write!(f, "{}", id),
        }
    }
}

/// Summed weight and match count of one rule.
///
/// `weight` is zero or negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Penalty {
    pub weight: i64,
    pub match_count: usize,
}

impl Penalty {
    fn add(&mut self, weight: i64) {
        self.weight = self.weight.saturating_add(weight);
        self.match_count += 1;
    }
}

/// One active rule and the tier it reports to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityConstraint {
    pub kind: ConstraintKind,
    pub level: ScoreLevel,
}

impl CapacityConstraint {
    pub fn new(kind: ConstraintKind, level: ScoreLevel) -> Self {
        Self { kind, level }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn constraint_ref(&self) -> ConstraintRef {
        self.kind.constraint_ref()
    }

    pub fn is_hard(&self) -> bool {
        self.level == ScoreLevel::Hard
    }

    /// Calls `visit` once per match with its subject and negative weight.
    pub fn for_each_match(
        &self,
        evaluation: &Evaluation<'_>,
        mut visit: impl FnMut(MatchSubject, i64),
    ) {
        let settings = evaluation.settings;
        let ledger = &evaluation.ledger;
        let nodes = &evaluation.solution.nodes;
        match self.kind {
            ConstraintKind::NodeCapacity => {
                for (slot, node) in nodes.iter().enumerate() {
                    let shortfall = ledger.node_shortfall(slot, settings.node_dimensions);
                    if shortfall < 0 {
                        visit(MatchSubject::Node(node.id), shortfall);
                    }
                }
            }
            ConstraintKind::NodeTypeCapacity => {
                if settings.is_hierarchical() {
                    let shortfalls = ledger.node_type_shortfalls(settings.aggregate_dimensions);
                    for (id, shortfall) in shortfalls {
                        visit(MatchSubject::NodeType(id), shortfall);
                    }
                }
            }
            ConstraintKind::ZoneCapacity => {
                if settings.is_hierarchical() {
                    let shortfalls = ledger.zone_shortfalls(settings.aggregate_dimensions);
                    for (id, shortfall) in shortfalls {
                        visit(MatchSubject::Zone(id), shortfall);
                    }
                }
            }
            ConstraintKind::WrongNodeType => visit_violations(&evaluation.wrong_node_type, visit),
            ConstraintKind::WrongZone => visit_violations(&evaluation.wrong_zone, visit),
            ConstraintKind::Unassigned => visit_violations(&evaluation.unassigned, visit),
            ConstraintKind::NodeCost => {
                for slot in evaluation.used_slots() {
                    let node = &nodes[slot];
                    visit(MatchSubject::Node(node.id), -i64::from(node.cost));
                }
            }
        }
    }

    /// Summed penalty of this rule.
    pub fn penalty(&self, evaluation: &Evaluation<'_>) -> Penalty {
        let mut penalty = Penalty::default();
        self.for_each_match(evaluation, |_, weight| penalty.add(weight));
        penalty
    }

    /// Penalty of this rule placed on its tier.
    pub fn score<Sc: TieredScore>(&self, evaluation: &Evaluation<'_>) -> Sc {
        Sc::of_level(self.level, self.penalty(evaluation).weight)
    }
}

fn visit_violations(violations: &[Violation], mut visit: impl FnMut(MatchSubject, i64)) {
    for violation in violations {
        visit(
            MatchSubject::Process(violation.process),
            violation.magnitude.saturating_neg(),
        );
    }
}

/// Per-constraint result of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintResult<Sc> {
    /// Constraint name.
    pub name: String,
    /// Tier the constraint reports to.
    pub level: ScoreLevel,
    /// Score contribution from this constraint.
    pub score: Sc,
    /// Number of matches for this constraint.
    pub match_count: usize,
    /// Whether this is a hard constraint.
    pub is_hard: bool,
}

/// The active rules, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintList {
    constraints: Vec<CapacityConstraint>,
}

impl ConstraintList {
    pub fn new(constraints: Vec<CapacityConstraint>) -> Self {
        Self { constraints }
    }

    /// Builds the list a configuration asks for.
    ///
    /// Flat granularity leaves out the node type and zone capacity rules.
    /// Disabled names are left out.
    pub fn from_config(config: &ScoringConfig) -> Self {
        let flat = config.granularity == capacity_config::Granularity::Flat;
        let constraints = ConstraintKind::ALL
            .into_iter()
            .filter(|kind| !(flat && kind.is_aggregate()))
            .filter(|kind| config.is_enabled(kind.name()))
            .map(|kind| CapacityConstraint::new(kind, config.level_of(kind)))
            .collect();
        Self { constraints }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CapacityConstraint> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns the active rule of the given kind.
    pub fn get(&self, kind: ConstraintKind) -> Option<&CapacityConstraint> {
        self.constraints.iter().find(|c| c.kind == kind)
    }

    /// Sums every rule's penalty by tier into one score.
    pub fn compose<Sc: TieredScore>(&self, evaluation: &Evaluation<'_>) -> Sc {
        let (mut hard, mut medium, mut soft) = (0i64, 0i64, 0i64);
        for constraint in &self.constraints {
            let penalty = constraint.penalty(evaluation);
            trace!(
                event = "constraint_evaluated",
                constraint = constraint.name(),
                level = ?constraint.level,
                penalty = penalty.weight,
                match_count = penalty.match_count,
            );
            let tier = match constraint.level {
                ScoreLevel::Hard => &mut hard,
                ScoreLevel::Medium => &mut medium,
                ScoreLevel::Soft => &mut soft,
            };
            *tier = tier.saturating_add(penalty.weight);
        }
        Sc::from_tiers(hard, medium, soft)
    }

    /// Evaluates each rule separately.
    pub fn evaluate_each<Sc: TieredScore>(
        &self,
        evaluation: &Evaluation<'_>,
    ) -> Vec<ConstraintResult<Sc>> {
        self.constraints
            .iter()
            .map(|constraint| {
                let penalty = constraint.penalty(evaluation);
                ConstraintResult {
                    name: constraint.name().to_string(),
                    level: constraint.level,
                    score: Sc::of_level(constraint.level, penalty.weight),
                    match_count: penalty.match_count,
                    is_hard: constraint.is_hard(),
                }
            })
            .collect()
    }
}

impl Default for ConstraintList {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl<'a> IntoIterator for &'a ConstraintList {
    type Item = &'a CapacityConstraint;
    type IntoIter = std::slice::Iter<'a, CapacityConstraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
