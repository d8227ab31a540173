//! Constraint identification.
//!
//! The capacity rules form a closed set. [`ConstraintKind`] tags each rule and
//! [`ConstraintRef`] names it for analysis output and configuration.

use std::fmt;

/// Package name shared by every capacity constraint.
pub const CONSTRAINT_PACKAGE: &str = "capacity";

/// Reference to a constraint for identification.
///
/// # Example
///
/// ```
/// use capacity_core::ConstraintRef;
///
/// let cr = ConstraintRef::new("capacity", "zone capacity");
/// assert_eq!(cr.full_name(), "capacity/zone capacity");
///
/// let simple = ConstraintRef::new("", "node cost");
/// assert_eq!(simple.full_name(), "node cost");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintRef {
    /// Package/module containing the constraint.
    pub package: String,
    /// Name of the constraint.
    pub name: String,
}

impl ConstraintRef {
    /// Creates a new constraint reference.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Returns the fully qualified name.
    pub fn full_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.package, self.name)
        }
    }
}

/// The capacity rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintKind {
    /// Compatible usage on a node exceeds the node's capacity.
    NodeCapacity,
    /// Compatible usage on a node type exceeds the summed capacity of its nodes.
    NodeTypeCapacity,
    /// Compatible usage in a zone exceeds the summed capacity of its nodes.
    ZoneCapacity,
    /// A process sits on a node of a different node type than it requires.
    WrongNodeType,
    /// A process sits on a node in a different zone than it requires.
    WrongZone,
    /// A process has no node.
    Unassigned,
    /// A node hosts at least one compatible process and incurs its cost.
    NodeCost,
}

impl ConstraintKind {
    /// Every rule, in evaluation order.
    pub const ALL: [ConstraintKind; 7] = [
        ConstraintKind::NodeCapacity,
        ConstraintKind::NodeTypeCapacity,
        ConstraintKind::ZoneCapacity,
        ConstraintKind::WrongNodeType,
        ConstraintKind::WrongZone,
        ConstraintKind::Unassigned,
        ConstraintKind::NodeCost,
    ];

    /// Human readable name, also used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            ConstraintKind::NodeCapacity => "node capacity",
            ConstraintKind::NodeTypeCapacity => "node type capacity",
            ConstraintKind::ZoneCapacity => "zone capacity",
            ConstraintKind::WrongNodeType => "wrong node type",
            ConstraintKind::WrongZone => "wrong zone",
            ConstraintKind::Unassigned => "unassigned process",
            ConstraintKind::NodeCost => "node cost",
        }
    }

    /// Looks a rule up by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name.trim())
    }

    /// Returns true for the capacity rules aggregated above node level.
    pub const fn is_aggregate(self) -> bool {
        matches!(
            self,
            ConstraintKind::NodeTypeCapacity | ConstraintKind::ZoneCapacity
        )
    }

    /// Returns the constraint reference in the capacity package.
    pub fn constraint_ref(self) -> ConstraintRef {
        ConstraintRef::new(CONSTRAINT_PACKAGE, self.name())
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
