//! Resource amounts and ledger totals.

use std::fmt;

/// Which resource dimensions a capacity check looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimensions {
    /// Cpu, memory and disk.
    #[default]
    All,
    /// Cpu only.
    CpuOnly,
}

impl Dimensions {
    pub const fn tracks_memory_and_disk(self) -> bool {
        matches!(self, Dimensions::All)
    }
}

/// Cpu, memory and disk amounts of a node (capacity) or a process (demand).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resources {
    pub cpu: u32,
    pub memory: u32,
    pub disk: u32,
}

impl Resources {
    pub const ZERO: Resources = Resources::new(0, 0, 0);

    #[inline]
    pub const fn new(cpu: u32, memory: u32, disk: u32) -> Self {
        Resources { cpu, memory, disk }
    }

    /// Product of the three dimensions.
    ///
    /// Used for ordering and as the magnitude of placement penalties.
    /// Saturates at `i64::MAX`.
    pub fn difficulty_index(&self) -> i64 {
        i64::from(self.cpu)
            .saturating_mul(i64::from(self.memory))
            .saturating_mul(i64::from(self.disk))
    }
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cpu={} memory={} disk={}",
            self.cpu, self.memory, self.disk
        )
    }
}

/// Summed capacity or usage held by the resource ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResourceTotals {
    pub cpu: i64,
    pub memory: i64,
    pub disk: i64,
}

impl ResourceTotals {
    pub const ZERO: ResourceTotals = ResourceTotals {
        cpu: 0,
        memory: 0,
        disk: 0,
    };

    pub const fn new(cpu: i64, memory: i64, disk: i64) -> Self {
        ResourceTotals { cpu, memory, disk }
    }

    /// Adds a node's capacity or a process's demand.
    #[inline]
    pub fn add(&mut self, amount: &Resources) {
        self.cpu += i64::from(amount.cpu);
        self.memory += i64::from(amount.memory);
        self.disk += i64::from(amount.disk);
    }

    /// Returns the summed shortfall when `self` is a capacity and `usage`
    /// is consumed from it.
    ///
    /// Each tracked dimension contributes `capacity - usage` when that is
    /// negative. The result is zero or negative.
    pub fn shortfall(&self, usage: &ResourceTotals, dimensions: Dimensions) -> i64 {
        let deficit = |capacity: i64, used: i64| (capacity - used).min(0);
        let mut total = deficit(self.cpu, usage.cpu);
        if dimensions.tracks_memory_and_disk() {
            total += deficit(self.memory, usage.memory);
            total += deficit(self.disk, usage.disk);
        }
        total
    }
}

impl From<Resources> for ResourceTotals {
    fn from(amount: Resources) -> Self {
        let mut totals = ResourceTotals::ZERO;
        totals.add(&amount);
        totals
    }
}

impl fmt::Display for ResourceTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cpu={} memory={} disk={}",
            self.cpu, self.memory, self.disk
        )
    }
}
