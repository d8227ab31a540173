//! Resource ledger
//!
//! Capacity and usage totals at three nesting levels: per node, per node
//! type and per zone. Capacities are derived from the node list alone;
//! usages start at zero and only grow through [`ResourceLedger::record`].
//! A ledger lives for one evaluation and is then dropped.

use std::collections::HashMap;

use capacity_core::domain::{
    CapacitySolution, Dimensions, NodeId, NodeTypeId, ResourceTotals, Resources, ZoneId,
};
use capacity_core::error::{CapacityError, Result};

#[cfg(test)]
mod tests;

/// Capacity totals keyed by zone, node type and node slot.
///
/// Node slots are positions in `CapacitySolution::nodes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerCapacities {
    pub zones: HashMap<ZoneId, ResourceTotals>,
    pub node_types: HashMap<NodeTypeId, ResourceTotals>,
    pub nodes: Vec<ResourceTotals>,
}

/// Usage totals with the same keys as [`LedgerCapacities`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerUsages {
    pub zones: HashMap<ZoneId, ResourceTotals>,
    pub node_types: HashMap<NodeTypeId, ResourceTotals>,
    pub nodes: Vec<ResourceTotals>,
}

/// Sums every node's capacity into its zone and node type and records the
/// node's own capacity.
///
/// Every listed zone and node type gets an entry, even without nodes. Zones
/// and node types only referenced by nodes get one as well.
pub fn build_capacity(solution: &CapacitySolution) -> LedgerCapacities {
    let mut capacities = LedgerCapacities {
        zones: zero_entries(solution.zones.iter().map(|z| z.id)),
        node_types: zero_entries(solution.node_types.iter().map(|t| t.id)),
        nodes: Vec::with_capacity(solution.nodes.len()),
    };
    for node in &solution.nodes {
        capacities
            .zones
            .entry(node.zone)
            .or_default()
            .add(&node.capacity);
        capacities
            .node_types
            .entry(node.node_type)
            .or_default()
            .add(&node.capacity);
        capacities.nodes.push(node.capacity.into());
    }
    capacities
}

/// Returns zero usage entries keyed like [`build_capacity`]'s output.
pub fn new_usage_maps(solution: &CapacitySolution) -> LedgerUsages {
    let zones = solution
        .zones
        .iter()
        .map(|z| z.id)
        .chain(solution.nodes.iter().map(|n| n.zone));
    let node_types = solution
        .node_types
        .iter()
        .map(|t| t.id)
        .chain(solution.nodes.iter().map(|n| n.node_type));
    LedgerUsages {
        zones: zero_entries(zones),
        node_types: zero_entries(node_types),
        nodes: vec![ResourceTotals::ZERO; solution.nodes.len()],
    }
}

fn zero_entries<K>(keys: impl Iterator<Item = K>) -> HashMap<K, ResourceTotals>
where
    K: std::hash::Hash + Eq,
{
    keys.map(|key| (key, ResourceTotals::ZERO)).collect()
}

/// Capacities, usages and the node lookup for one evaluation.
#[derive(Debug, Clone)]
pub struct ResourceLedger {
    capacities: LedgerCapacities,
    usages: LedgerUsages,
    node_index: HashMap<NodeId, usize>,
    // Zone and node type of each node slot.
    parents: Vec<(ZoneId, NodeTypeId)>,
}

impl ResourceLedger {
    /// Builds the capacity side and zeroed usage side for `solution`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::DuplicateNode`] if two nodes share an id.
    pub fn new(solution: &CapacitySolution) -> Result<Self> {
        let mut node_index = HashMap::with_capacity(solution.nodes.len());
        for (slot, node) in solution.nodes.iter().enumerate() {
            if node_index.insert(node.id, slot).is_some() {
                return Err(CapacityError::DuplicateNode(node.id));
            }
        }
        Ok(Self {
            capacities: build_capacity(solution),
            usages: new_usage_maps(solution),
            node_index,
            parents: solution
                .nodes
                .iter()
                .map(|n| (n.zone, n.node_type))
                .collect(),
        })
    }

    /// Returns the slot of the node with the given id.
    #[inline]
    pub fn node_slot(&self, id: NodeId) -> Option<usize> {
        self.node_index.get(&id).copied()
    }

    /// Number of node slots.
    pub fn node_count(&self) -> usize {
        self.parents.len()
    }

    /// Adds `amount` to the usage of the node at `slot`, its node type and
    /// its zone.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    pub fn record(&mut self, slot: usize, amount: &Resources) {
        let (zone, node_type) = self.parents[slot];
        self.usages.nodes[slot].add(amount);
        self.usages.zones.entry(zone).or_default().add(amount);
        self.usages
            .node_types
            .entry(node_type)
            .or_default()
            .add(amount);
    }

    pub fn capacities(&self) -> &LedgerCapacities {
        &self.capacities
    }

    pub fn usages(&self) -> &LedgerUsages {
        &self.usages
    }

    pub fn node_usage(&self, slot: usize) -> ResourceTotals {
        self.usages.nodes.get(slot).copied().unwrap_or_default()
    }

    pub fn zone_usage(&self, zone: ZoneId) -> ResourceTotals {
        self.usages.zones.get(&zone).copied().unwrap_or_default()
    }

    pub fn node_type_usage(&self, node_type: NodeTypeId) -> ResourceTotals {
        self.usages
            .node_types
            .get(&node_type)
            .copied()
            .unwrap_or_default()
    }

    /// Summed negative headroom of the node at `slot`; zero when within
    /// capacity or out of range.
    pub fn node_shortfall(&self, slot: usize, dimensions: Dimensions) -> i64 {
        match (self.capacities.nodes.get(slot), self.usages.nodes.get(slot)) {
            (Some(capacity), Some(usage)) => capacity.shortfall(usage, dimensions),
            _ => 0,
        }
    }

    pub fn node_type_shortfall(&self, node_type: NodeTypeId, dimensions: Dimensions) -> i64 {
        shortfall_of(
            &self.capacities.node_types,
            &self.usages.node_types,
            &node_type,
            dimensions,
        )
    }

    pub fn zone_shortfall(&self, zone: ZoneId, dimensions: Dimensions) -> i64 {
        shortfall_of(&self.capacities.zones, &self.usages.zones, &zone, dimensions)
    }

    /// Non-zero node type shortfalls, ordered by node type id.
    pub fn node_type_shortfalls(&self, dimensions: Dimensions) -> Vec<(NodeTypeId, i64)> {
        sorted_shortfalls(&self.capacities.node_types, &self.usages.node_types, dimensions)
    }

    /// Non-zero zone shortfalls, ordered by zone id.
    pub fn zone_shortfalls(&self, dimensions: Dimensions) -> Vec<(ZoneId, i64)> {
        sorted_shortfalls(&self.capacities.zones, &self.usages.zones, dimensions)
    }
}

fn shortfall_of<K: std::hash::Hash + Eq>(
    capacities: &HashMap<K, ResourceTotals>,
    usages: &HashMap<K, ResourceTotals>,
    key: &K,
    dimensions: Dimensions,
) -> i64 {
    let capacity = capacities.get(key).copied().unwrap_or_default();
    let usage = usages.get(key).copied().unwrap_or_default();
    capacity.shortfall(&usage, dimensions)
}

fn sorted_shortfalls<K: std::hash::Hash + Eq + Ord + Copy>(
    capacities: &HashMap<K, ResourceTotals>,
    usages: &HashMap<K, ResourceTotals>,
    dimensions: Dimensions,
) -> Vec<(K, i64)> {
    let mut shortfalls: Vec<(K, i64)> = usages
        .keys()
        .map(|key| (*key, shortfall_of(capacities, usages, key, dimensions)))
        .filter(|(_, shortfall)| *shortfall < 0)
        .collect();
    shortfalls.sort_unstable_by_key(|(key, _)| *key);
    shortfalls
}
