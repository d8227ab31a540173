//! Score analysis types for per-constraint breakdowns.
//!
//! A [`ScoreExplanation`] lists every active rule with its score and the
//! nodes, node types, zones or processes that caused each match.

use std::collections::HashMap;
use std::fmt;

use capacity_core::domain::{
    CapacitySolution, Node, NodeId, NodeTypeId, Process, ProcessId, ZoneId,
};
use capacity_core::score::{Score, ScoreLevel, TieredScore};
use capacity_core::{ConstraintKind, ConstraintRef};

use crate::constraint::{ConstraintList, MatchSubject};
use crate::evaluator::Evaluation;

/// Justification for why a constraint matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintJustification {
    /// Node, node type, zone or process the match is about.
    pub subject: MatchSubject,
    /// Human-readable description of why the constraint matched.
    pub description: String,
}

impl ConstraintJustification {
    pub fn new(subject: MatchSubject, description: impl Into<String>) -> Self {
        Self {
            subject,
            description: description.into(),
        }
    }
}

/// A single constraint match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintMatch<Sc: Score> {
    /// Reference to the constraint that matched.
    pub constraint_ref: ConstraintRef,
    /// Score impact of this match.
    pub score: Sc,
    /// Why it matched.
    pub justification: ConstraintJustification,
}

/// Per-constraint breakdown in a score explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintAnalysis<Sc: Score> {
    /// Constraint reference.
    pub constraint_ref: ConstraintRef,
    /// Tier the constraint reports to.
    pub level: ScoreLevel,
    /// Total score from this constraint.
    pub score: Sc,
    /// All matches for this constraint.
    pub matches: Vec<ConstraintMatch<Sc>>,
}

impl<Sc: Score> ConstraintAnalysis<Sc> {
    /// Returns the number of matches.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Returns the constraint name.
    pub fn name(&self) -> &str {
        &self.constraint_ref.name
    }

    /// Whether this is a hard constraint.
    pub fn is_hard(&self) -> bool {
        self.level == ScoreLevel::Hard
    }
}

/// Complete score explanation with per-constraint breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreExplanation<Sc: Score> {
    /// The total score.
    pub score: Sc,
    /// Per-constraint breakdown, in evaluation order.
    pub constraint_analyses: Vec<ConstraintAnalysis<Sc>>,
}

impl<Sc: Score> ScoreExplanation<Sc> {
    /// Creates a new score explanation.
    pub fn new(score: Sc, constraint_analyses: Vec<ConstraintAnalysis<Sc>>) -> Self {
        Self {
            score,
            constraint_analyses,
        }
    }

    /// Returns the total match count across all constraints.
    pub fn total_match_count(&self) -> usize {
        self.constraint_analyses.iter().map(|a| a.match_count()).sum()
    }

    /// Returns constraints with non-zero scores.
    pub fn non_zero_constraints(&self) -> Vec<&ConstraintAnalysis<Sc>> {
        self.constraint_analyses
            .iter()
            .filter(|a| a.score != Sc::zero())
            .collect()
    }

    /// Returns all matches across all constraints.
    pub fn all_matches(&self) -> Vec<&ConstraintMatch<Sc>> {
        self.constraint_analyses
            .iter()
            .flat_map(|a| &a.matches)
            .collect()
    }

    /// Returns the analysis of the named constraint.
    pub fn get(&self, name: &str) -> Option<&ConstraintAnalysis<Sc>> {
        self.constraint_analyses.iter().find(|a| a.name() == name)
    }

    pub fn is_feasible(&self) -> bool {
        self.score.is_feasible()
    }
}

impl<Sc: Score> fmt::Display for ScoreExplanation<Sc> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Score: {} ({})",
            self.score,
            if self.is_feasible() { "feasible" } else { "infeasible" }
        )?;
        for analysis in &self.constraint_analyses {
            writeln!(
                f,
                "  {:<20} {:<6} {:>24}  {} match(es)",
                analysis.name(),
                analysis.level,
                analysis.score.to_string(),
                analysis.match_count()
            )?;
            for m in &analysis.matches {
                writeln!(f, "      {}", m.justification.description)?;
            }
        }
        Ok(())
    }
}

/// Builds the explanation of `evaluation` under `constraints`.
pub fn explain<Sc: TieredScore>(
    constraints: &ConstraintList,
    evaluation: &Evaluation<'_>,
) -> ScoreExplanation<Sc> {
    let lookup = Lookup::new(evaluation.solution);
    let mut analyses = Vec::with_capacity(constraints.len());

    for constraint in constraints {
        let constraint_ref = constraint.constraint_ref();
        let mut matches = Vec::new();
        constraint.for_each_match(evaluation, |subject, weight| {
            matches.push(ConstraintMatch {
                constraint_ref: constraint_ref.clone(),
                score: Sc::of_level(constraint.level, weight),
                justification: ConstraintJustification::new(
                    subject,
                    lookup.describe(constraint.kind, subject, weight),
                ),
            });
        });
        analyses.push(ConstraintAnalysis {
            constraint_ref,
            level: constraint.level,
            score: matches.iter().map(|m| m.score).sum(),
            matches,
        });
    }

    let total = analyses.iter().map(|a| a.score).sum();
    ScoreExplanation::new(total, analyses)
}

/// Id to entity tables, built once per explanation.
struct Lookup<'a> {
    nodes: HashMap<NodeId, &'a Node>,
    node_types: HashMap<NodeTypeId, &'a str>,
    zones: HashMap<ZoneId, &'a str>,
    processes: HashMap<ProcessId, &'a Process>,
}

impl<'a> Lookup<'a> {
    fn new(solution: &'a CapacitySolution) -> Self {
        Self {
            nodes: solution.nodes.iter().map(|n| (n.id, n)).collect(),
            node_types: solution
                .node_types
                .iter()
                .map(|t| (t.id, t.name.as_str()))
                .collect(),
            zones: solution
                .zones
                .iter()
                .map(|z| (z.id, z.name.as_str()))
                .collect(),
            processes: solution.processes.iter().map(|p| (p.id, p)).collect(),
        }
    }

    fn describe(&self, kind: ConstraintKind, subject: MatchSubject, weight: i64) -> String {
        let amount = weight.saturating_neg();
        match subject {
            MatchSubject::Node(id) => {
                let name = self
                    .nodes
                    .get(&id)
                    .map_or_else(|| id.to_string(), |n| n.name.clone());
                match kind {
                    ConstraintKind::NodeCost => format!("{} is used, cost {}", name, amount),
                    _ => format!("{} is short by {}", name, amount),
                }
            }
            MatchSubject::NodeType(id) => {
                let name = self
                    .node_types
                    .get(&id)
                    .map_or_else(|| id.to_string(), |name| name.to_string());
                format!("node type {} is short by {}", name, amount)
            }
            MatchSubject::Zone(id) => {
                let name = self
                    .zones
                    .get(&id)
                    .map_or_else(|| id.to_string(), |name| name.to_string());
                format!("zone {} is short by {}", name, amount)
            }
            MatchSubject::Process(id) => {
                let process = self.processes.get(&id);
                let name = process.map_or_else(|| id.to_string(), |p| p.name.clone());
                let node = process
                    .and_then(|p| p.assigned_node)
                    .map_or_else(|| "no node".to_string(), |n| n.to_string());
                match kind {
                    ConstraintKind::WrongNodeType => {
                        format!("{} on {} has the wrong node type ({})", name, node, amount)
                    }
                    ConstraintKind::WrongZone => {
                        format!("{} on {} is in the wrong zone ({})", name, node, amount)
                    }
                    _ => format!("{} is unassigned ({})", name, amount),
                }
            }
        }
    }
}
