//! Tests for score analysis types.

use super::analysis::*;
use crate::constraint::{ConstraintList, MatchSubject};
use crate::evaluator::ConstraintEvaluator;
use capacity_core::domain::{NodeId, ProcessId};
use capacity_core::{HardMediumSoftScore, HardSoftScore, ScoreLevel, CONSTRAINT_PACKAGE};
use capacity_test::{single_node_instance, ProcessBuilder, EDGE, ZONE_2};

fn explain_default(
    solution: &capacity_core::CapacitySolution,
) -> ScoreExplanation<HardMediumSoftScore> {
    let evaluation = ConstraintEvaluator::default().evaluate(solution).unwrap();
    explain(&ConstraintList::default(), &evaluation)
}

#[test]
fn test_feasible_solution() {
    let solution = single_node_instance(vec![ProcessBuilder::new(1).memory(100).on(1).build()]);
    let explanation = explain_default(&solution);

    assert!(explanation.is_feasible());
    assert_eq!(explanation.score, HardMediumSoftScore::of_soft(-50));
    assert_eq!(explanation.constraint_analyses.len(), 7);
    assert_eq!(explanation.total_match_count(), 1);

    let non_zero = explanation.non_zero_constraints();
    assert_eq!(non_zero.len(), 1);
    assert_eq!(non_zero[0].name(), "node cost");
    assert_eq!(non_zero[0].level, ScoreLevel::Soft);
    assert!(!non_zero[0].is_hard());
}

#[test]
fn test_matches_carry_subjects() {
    let solution = single_node_instance(vec![
        ProcessBuilder::new(1).cpu(11).on(1).build(),
        ProcessBuilder::new(2)
            .required(1, 2, 3)
            .zone(ZONE_2)
            .node_type(EDGE)
            .on(1)
            .build(),
        ProcessBuilder::new(3).required(2, 2, 2).build(),
    ]);
    let explanation = explain_default(&solution);

    let node_capacity = explanation.get("node capacity").unwrap();
    assert_eq!(node_capacity.match_count(), 1);
    let m = &node_capacity.matches[0];
    assert_eq!(m.justification.subject, MatchSubject::Node(NodeId(1)));
    assert_eq!(m.justification.description, "node-1 is short by 1");
    assert_eq!(m.constraint_ref.package, CONSTRAINT_PACKAGE);

    let zone = explanation.get("zone capacity").unwrap();
    assert_eq!(zone.matches[0].justification.description, "zone Zone1 is short by 1");

    let wrong_zone = explanation.get("wrong zone").unwrap();
    assert_eq!(
        wrong_zone.matches[0].justification.subject,
        MatchSubject::Process(ProcessId(2))
    );
    assert!(wrong_zone.matches[0]
        .justification
        .description
        .contains("wrong zone"));
    assert_eq!(wrong_zone.score, HardMediumSoftScore::of_hard(-6));

    let unassigned = explanation.get("unassigned process").unwrap();
    assert_eq!(
        unassigned.matches[0].justification.description,
        "process-3 is unassigned (8)"
    );

    let from_analyses: HardMediumSoftScore =
        explanation.constraint_analyses.iter().map(|a| a.score).sum();
    assert_eq!(from_analyses, explanation.score);
    assert_eq!(explanation.all_matches().len(), explanation.total_match_count());
}

#[test]
fn test_two_tier_explanation() {
    let solution = single_node_instance(vec![ProcessBuilder::new(3).required(2, 2, 2).build()]);
    let evaluation = ConstraintEvaluator::default().evaluate(&solution).unwrap();
    let explanation: ScoreExplanation<HardSoftScore> =
        explain(&ConstraintList::default(), &evaluation);

    assert_eq!(explanation.score, HardSoftScore::of(0, -8));
}

#[test]
fn test_saturated_penalties_sum_without_overflow() {
    let solution = single_node_instance(vec![
        ProcessBuilder::new(1).required(3_000_000, 3_000_000, 3_000_000).build(),
        ProcessBuilder::new(2).required(3_000_000, 3_000_000, 3_000_000).build(),
    ]);
    let explanation = explain_default(&solution);

    let unassigned = explanation.get("unassigned process").unwrap();
    assert_eq!(unassigned.match_count(), 2);
    assert!(unassigned
        .matches
        .iter()
        .all(|m| m.score == HardMediumSoftScore::of_medium(-i64::MAX)));
    assert_eq!(unassigned.score, HardMediumSoftScore::of_medium(i64::MIN));
    assert_eq!(explanation.score, HardMediumSoftScore::of_medium(i64::MIN));

    let evaluation = ConstraintEvaluator::default().evaluate(&solution).unwrap();
    let two_tier: ScoreExplanation<HardSoftScore> =
        explain(&ConstraintList::default(), &evaluation);
    assert_eq!(two_tier.score, HardSoftScore::of(0, i64::MIN));
}

#[test]
fn test_descriptions_resolve_every_process() {
    let solution = single_node_instance(
        (1..=6)
            .map(|id| ProcessBuilder::new(id).required(1, 1, 1).build())
            .collect(),
    );
    let explanation = explain_default(&solution);

    let descriptions: Vec<&str> = explanation
        .get("unassigned process")
        .unwrap()
        .matches
        .iter()
        .map(|m| m.justification.description.as_str())
        .collect();
    assert_eq!(descriptions.len(), 6);
    for (id, description) in (1..=6).zip(descriptions) {
        assert_eq!(description, format!("process-{} is unassigned (1)", id));
    }
}

#[test]
fn test_display_lists_every_constraint() {
    let solution = single_node_instance(vec![ProcessBuilder::new(1).cpu(11).on(1).build()]);
    let text = explain_default(&solution).to_string();

    assert!(text.starts_with("Score: -3hard/0medium/-50soft (infeasible)"));
    assert!(text.contains("node type capacity"));
    assert!(text.contains("node-1 is used, cost 50"));
    assert_eq!(text.lines().count(), 1 + 7 + 4);
}
