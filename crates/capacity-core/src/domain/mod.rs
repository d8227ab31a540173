//! Domain model for capacity planning
//!
//! - [`Zone`] and [`NodeType`]: reference entities
//! - [`Node`]: supply unit with capacities and an activation cost
//! - [`Process`]: demand unit whose `assigned_node` is the planning variable
//! - [`CapacitySolution`]: the aggregate handed to the score calculator

mod entity;
mod ids;
mod resources;
mod solution;
mod traits;


pub use entity::{Node, NodeType, Process, Zone};
pub use ids::{NodeId, NodeTypeId, ProcessId, ZoneId};
pub use resources::{Dimensions, ResourceTotals, Resources};
pub use solution::CapacitySolution;
pub use traits::{PlanningId, PlanningSolution};
