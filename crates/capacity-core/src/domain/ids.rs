//! Strongly typed identifiers.

/// Declares a `u64` newtype identifier.
macro_rules! planning_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub u64);

        impl $name {
            /// Returns the raw id value.
            #[inline]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                $name(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }
    };
}

planning_id!(
    /// Identity of an availability zone.
    ZoneId,
    "zone"
);
planning_id!(
    /// Identity of a node type.
    NodeTypeId,
    "node-type"
);
planning_id!(
    /// Identity of a node (supply unit).
    NodeId,
    "node"
);
planning_id!(
    /// Identity of a process (demand unit).
    ProcessId,
    "process"
);
