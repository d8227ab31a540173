//! Tests for the constraint list.

use super::*;
use crate::evaluator::ConstraintEvaluator;
use capacity_config::Granularity;
use capacity_core::{HardMediumSoftScore, HardSoftScore};
use capacity_test::{single_node_instance, two_zone_instance, ProcessBuilder, EDGE};

#[test]
fn test_default_list_has_every_rule() {
    let list = ConstraintList::default();
    assert_eq!(list.len(), 7);
    assert!(!list.is_empty());
    let kinds: Vec<_> = list.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, ConstraintKind::ALL.to_vec());
    assert_eq!(
        list.get(ConstraintKind::WrongZone).map(|c| c.level),
        Some(ScoreLevel::Hard)
    );
    assert_eq!(
        list.get(ConstraintKind::Unassigned).map(|c| c.level),
        Some(ScoreLevel::Medium)
    );
}

#[test]
fn test_flat_list_drops_aggregate_rules() {
    let config = ScoringConfig::new()
        .with_granularity(Granularity::Flat)
        .with_disabled_constraint("node cost");
    let list = ConstraintList::from_config(&config);

    assert_eq!(list.len(), 4);
    assert!(list.get(ConstraintKind::ZoneCapacity).is_none());
    assert!(list.get(ConstraintKind::NodeTypeCapacity).is_none());
    assert!(list.get(ConstraintKind::NodeCost).is_none());
    assert!((&list).into_iter().all(|c| !c.kind.is_aggregate()));
}

#[test]
fn test_penalties_per_rule() {
    let solution = single_node_instance(vec![
        ProcessBuilder::new(1).cpu(1).on(1).build(),
        ProcessBuilder::new(2).cpu(10).on(1).build(),
        ProcessBuilder::new(3).required(1, 2, 3).node_type(EDGE).on(1).build(),
        ProcessBuilder::new(4).required(2, 2, 2).build(),
    ]);
    let evaluation = ConstraintEvaluator::default().evaluate(&solution).unwrap();
    let penalty =
        |kind| CapacityConstraint::new(kind, ScoreLevel::Hard).penalty(&evaluation);

    assert_eq!(
        penalty(ConstraintKind::NodeCapacity),
        Penalty { weight: -1, match_count: 1 }
    );
    assert_eq!(penalty(ConstraintKind::NodeTypeCapacity).weight, -1);
    assert_eq!(penalty(ConstraintKind::ZoneCapacity).weight, -1);
    assert_eq!(
        penalty(ConstraintKind::WrongNodeType),
        Penalty { weight: -6, match_count: 1 }
    );
    assert_eq!(penalty(ConstraintKind::WrongZone), Penalty::default());
    assert_eq!(
        penalty(ConstraintKind::Unassigned),
        Penalty { weight: -8, match_count: 1 }
    );
    assert_eq!(
        penalty(ConstraintKind::NodeCost),
        Penalty { weight: -50, match_count: 1 }
    );
}

#[test]
fn test_match_subjects() {
    let solution = single_node_instance(vec![ProcessBuilder::new(4).required(2, 2, 2).build()]);
    let evaluation = ConstraintEvaluator::default().evaluate(&solution).unwrap();

    let mut seen = Vec::new();
    CapacityConstraint::new(ConstraintKind::Unassigned, ScoreLevel::Medium)
        .for_each_match(&evaluation, |subject, weight| seen.push((subject, weight)));
    assert_eq!(seen, vec![(MatchSubject::Process(ProcessId(4)), -8)]);
    assert_eq!(MatchSubject::Process(ProcessId(4)).to_string(), "process-4");
}

#[test]
fn test_compose_routes_tiers() {
    let solution = single_node_instance(vec![
        ProcessBuilder::new(1).cpu(11).on(1).build(),
        ProcessBuilder::new(2).required(1, 2, 3).node_type(EDGE).on(1).build(),
        ProcessBuilder::new(3).required(2, 2, 2).build(),
    ]);
    let evaluation = ConstraintEvaluator::default().evaluate(&solution).unwrap();

    let hard_mismatch = ConstraintList::default();
    let score: HardMediumSoftScore = hard_mismatch.compose(&evaluation);
    // Node, node type and zone each run 1 cpu short, plus the mismatch.
    assert_eq!(score, HardMediumSoftScore::of(-3 - 6, -8, -50));

    let medium_mismatch =
        ConstraintList::from_config(&ScoringConfig::new().with_mismatch_tier(ScoreLevel::Medium));
    let score: HardMediumSoftScore = medium_mismatch.compose(&evaluation);
    assert_eq!(score, HardMediumSoftScore::of(-3, -6 - 8, -50));

    let two_tier: HardSoftScore = hard_mismatch.compose(&evaluation);
    assert_eq!(two_tier, HardSoftScore::of(-9, -58));
}

#[test]
fn test_evaluate_each_matches_compose() {
    let mut solution = two_zone_instance();
    solution.assign(0, Some(NodeId(1))).unwrap();
    solution.assign(1, Some(NodeId(1))).unwrap();
    let evaluation = ConstraintEvaluator::default().evaluate(&solution).unwrap();
    let list = ConstraintList::default();

    let results = list.evaluate_each::<HardMediumSoftScore>(&evaluation);
    assert_eq!(results.len(), 7);
    let total: HardMediumSoftScore = results.iter().map(|r| r.score).sum();
    assert_eq!(total, list.compose::<HardMediumSoftScore>(&evaluation));

    let node_capacity = &results[0];
    assert_eq!(node_capacity.name, "node capacity");
    assert!(node_capacity.is_hard);
    assert_eq!(node_capacity.score, HardMediumSoftScore::of_hard(-1));

    let unassigned = results.iter().find(|r| r.name == "unassigned process").unwrap();
    assert_eq!(unassigned.level, ScoreLevel::Medium);
    assert_eq!(unassigned.match_count, 2);
    assert_eq!(unassigned.score, HardMediumSoftScore::of_medium(-64_001));
}
