//! Reference data shared by every fixture.

use capacity_core::domain::{NodeType, NodeTypeId, Zone, ZoneId};

pub const ZONE_1: ZoneId = ZoneId(0);
pub const ZONE_2: ZoneId = ZoneId(1);
pub const ZONE_3: ZoneId = ZoneId(2);

pub const COMPUTE: NodeTypeId = NodeTypeId(0);
pub const EDGE: NodeTypeId = NodeTypeId(1);
pub const STORAGE: NodeTypeId = NodeTypeId(2);

/// `Zone1`, `Zone2` and `Zone3`.
pub fn zones() -> Vec<Zone> {
    vec![
        Zone::new(ZONE_1, "Zone1"),
        Zone::new(ZONE_2, "Zone2"),
        Zone::new(ZONE_3, "Zone3"),
    ]
}

/// `COMPUTE`, `EDGE` and `STORAGE`.
pub fn node_types() -> Vec<NodeType> {
    vec![
        NodeType::new(COMPUTE, "COMPUTE"),
        NodeType::new(EDGE, "EDGE"),
        NodeType::new(STORAGE, "STORAGE"),
    ]
}
