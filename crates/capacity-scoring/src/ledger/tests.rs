//! Tests for the resource ledger.

use super::*;
use capacity_core::domain::{Node, NodeType, Zone};
use capacity_test::{two_zone_instance, NodeBuilder, COMPUTE, EDGE, STORAGE, ZONE_1, ZONE_2, ZONE_3};

#[test]
fn test_build_capacity_sums_by_zone_and_type() {
    let solution = two_zone_instance();
    let capacities = build_capacity(&solution);

    assert_eq!(capacities.zones[&ZONE_1], ResourceTotals::new(8, 80, 800));
    assert_eq!(capacities.zones[&ZONE_2], ResourceTotals::new(8, 80, 800));
    assert_eq!(capacities.node_types[&COMPUTE], ResourceTotals::new(8, 80, 800));
    assert_eq!(capacities.node_types[&EDGE], ResourceTotals::new(8, 80, 800));
    assert_eq!(capacities.nodes[0], ResourceTotals::new(4, 40, 400));
    assert_eq!(capacities.nodes.len(), 3);
}

#[test]
fn test_listed_entries_without_nodes_are_zero() {
    let solution = two_zone_instance();
    let capacities = build_capacity(&solution);
    let usages = new_usage_maps(&solution);

    assert_eq!(capacities.zones[&ZONE_3], ResourceTotals::ZERO);
    assert_eq!(capacities.node_types[&STORAGE], ResourceTotals::ZERO);
    assert_eq!(usages.zones.len(), 3);
    assert_eq!(usages.node_types.len(), 3);
    assert!(usages.zones.values().all(|t| *t == ResourceTotals::ZERO));
    assert!(usages.nodes.iter().all(|t| *t == ResourceTotals::ZERO));
}

#[test]
fn test_unlisted_zone_gets_an_entry() {
    let solution = CapacitySolution::new(
        vec![Zone::new(0, "Zone1")],
        vec![NodeType::new(0, "COMPUTE")],
        vec![
            Node::new(1, Resources::new(2, 2, 2), 0, 9, 8),
            Node::new(2, Resources::new(1, 3, 5), 0, 9, 0),
        ],
        vec![],
    );
    let capacities = build_capacity(&solution);
    let usages = new_usage_maps(&solution);

    assert_eq!(capacities.zones[&ZoneId(9)], ResourceTotals::new(3, 5, 7));
    assert_eq!(capacities.node_types[&NodeTypeId(0)], ResourceTotals::new(1, 3, 5));
    assert_eq!(capacities.node_types[&NodeTypeId(8)], ResourceTotals::new(2, 2, 2));
    assert_eq!(capacities.zones[&ZoneId(0)], ResourceTotals::ZERO);
    assert!(usages.zones.contains_key(&ZoneId(9)));
    assert!(usages.node_types.contains_key(&NodeTypeId(8)));
}

#[test]
fn test_record_updates_three_levels() {
    let solution = two_zone_instance();
    let mut ledger = ResourceLedger::new(&solution).unwrap();
    let slot = ledger.node_slot(NodeId(2)).unwrap();
    assert_eq!(slot, 1);

    ledger.record(slot, &Resources::new(3, 10, 100));
    ledger.record(slot, &Resources::new(2, 20, 200));

    assert_eq!(ledger.node_usage(slot), ResourceTotals::new(5, 30, 300));
    assert_eq!(ledger.node_usage(0), ResourceTotals::ZERO);
    assert_eq!(ledger.zone_usage(ZONE_1), ResourceTotals::new(5, 30, 300));
    assert_eq!(ledger.node_type_usage(COMPUTE), ResourceTotals::new(5, 30, 300));
    assert_eq!(ledger.zone_usage(ZONE_2), ResourceTotals::ZERO);
    // Capacities never move.
    assert_eq!(*ledger.capacities(), build_capacity(&solution));
}

#[test]
fn test_shortfalls() {
    let solution = two_zone_instance();
    let mut ledger = ResourceLedger::new(&solution).unwrap();

    // Node 1 is over by 1 cpu; node 2 still has 4 cpu of headroom.
    ledger.record(0, &Resources::new(5, 40, 400));
    assert_eq!(ledger.node_shortfall(0, Dimensions::All), -1);
    assert_eq!(ledger.node_shortfall(1, Dimensions::All), 0);
    assert_eq!(ledger.zone_shortfall(ZONE_1, Dimensions::All), 0);
    assert!(ledger.zone_shortfalls(Dimensions::All).is_empty());

    // Both nodes over: the zone and node type run short too.
    ledger.record(1, &Resources::new(6, 50, 400));
    assert_eq!(ledger.node_shortfall(1, Dimensions::All), -12);
    assert_eq!(ledger.node_shortfall(1, Dimensions::CpuOnly), -2);
    assert_eq!(ledger.zone_shortfall(ZONE_1, Dimensions::All), -13);
    assert_eq!(ledger.zone_shortfall(ZONE_1, Dimensions::CpuOnly), -3);
    assert_eq!(ledger.zone_shortfalls(Dimensions::All), vec![(ZONE_1, -13)]);
    assert_eq!(
        ledger.node_type_shortfalls(Dimensions::CpuOnly),
        vec![(COMPUTE, -3)]
    );
}

#[test]
fn test_out_of_range_lookups_are_zero() {
    let solution = two_zone_instance();
    let ledger = ResourceLedger::new(&solution).unwrap();
    assert_eq!(ledger.node_slot(NodeId(42)), None);
    assert_eq!(ledger.node_shortfall(7, Dimensions::All), 0);
    assert_eq!(ledger.zone_shortfall(ZoneId(42), Dimensions::All), 0);
    assert_eq!(ledger.node_count(), 3);
}

#[test]
fn test_duplicate_node_id() {
    let mut solution = two_zone_instance();
    solution.nodes.push(NodeBuilder::new(1).build());
    assert_eq!(
        ResourceLedger::new(&solution).unwrap_err(),
        CapacityError::DuplicateNode(NodeId(1))
    );
}
