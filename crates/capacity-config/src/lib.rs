//! Scoring configuration for the capacity planner.
//!
//! Selects the score type, the hierarchy depth, the tracked resource
//! dimensions, the tier each placement rule reports to, and which rules are
//! active, without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use capacity_config::{Granularity, ScoreType, ScoringConfig};
//! use capacity_core::{Dimensions, ScoreLevel};
//!
//! let config = ScoringConfig::from_toml_str(r#"
//!     score_type = "hard_soft"
//!     granularity = "flat"
//!     node_dimensions = "cpu_only"
//!     disabled_constraints = ["node cost"]
//!
//!     [tiers]
//!     placement_mismatch = "medium"
//! "#).unwrap();
//!
//! assert_eq!(config.score_type, ScoreType::HardSoft);
//! assert_eq!(config.granularity, Granularity::Flat);
//! assert_eq!(config.node_dimensions, Dimensions::CpuOnly);
//! assert_eq!(config.tiers.placement_mismatch, ScoreLevel::Medium);
//! assert!(!config.is_enabled("node cost"));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use capacity_config::ScoringConfig;
//!
//! let config = ScoringConfig::load("scoring.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use capacity_core::{ConstraintKind, Dimensions, ScoreLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringConfig {
    /// Two or three score tiers.
    #[serde(default)]
    pub score_type: ScoreType,

    /// Node level only, or node, node type and zone.
    #[serde(default)]
    pub granularity: Granularity,

    /// Dimensions checked against each node's own capacity.
    #[serde(default)]
    pub node_dimensions: Dimensions,

    /// Dimensions checked against node type and zone totals.
    #[serde(default)]
    pub aggregate_dimensions: Dimensions,

    /// Names of rules to leave out, e.g. `"wrong zone"`.
    #[serde(default)]
    pub disabled_constraints: Vec<String>,

    /// Tier each placement rule reports to.
    #[serde(default)]
    pub tiers: TierConfig,
}

impl ScoringConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the score type.
    pub fn with_score_type(mut self, score_type: ScoreType) -> Self {
        self.score_type = score_type;
        self
    }

    /// Sets the hierarchy depth.
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Sets the dimensions checked at node level.
    pub fn with_node_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.node_dimensions = dimensions;
        self
    }

    /// Sets the dimensions checked at node type and zone level.
    pub fn with_aggregate_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.aggregate_dimensions = dimensions;
        self
    }

    /// Sets the tier of the wrong zone and wrong node type rules.
    pub fn with_mismatch_tier(mut self, level: ScoreLevel) -> Self {
        self.tiers.placement_mismatch = level;
        self
    }

    /// Sets the tier of the unassigned process rule.
    pub fn with_unassigned_tier(mut self, level: ScoreLevel) -> Self {
        self.tiers.unassigned = level;
        self
    }

    /// Sets the tier of the node cost rule.
    pub fn with_node_cost_tier(mut self, level: ScoreLevel) -> Self {
        self.tiers.node_cost = level;
        self
    }

    /// Disables a rule by name.
    pub fn with_disabled_constraint(mut self, name: impl Into<String>) -> Self {
        self.disabled_constraints.push(name.into());
        self
    }

    /// Returns false if the named rule is disabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        let name = name.trim();
        !self
            .disabled_constraints
            .iter()
            .any(|disabled| disabled.trim() == name)
    }

    /// Returns the tier a rule reports to.
    ///
    /// Capacity rules always report to the hard tier. Under
    /// [`ScoreType::HardSoft`] a medium tier becomes soft.
    pub fn level_of(&self, kind: ConstraintKind) -> ScoreLevel {
        let level = match kind {
            ConstraintKind::NodeCapacity
            | ConstraintKind::NodeTypeCapacity
            | ConstraintKind::ZoneCapacity => ScoreLevel::Hard,
            ConstraintKind::WrongNodeType | ConstraintKind::WrongZone => {
                self.tiers.placement_mismatch
            }
            ConstraintKind::Unassigned => self.tiers.unassigned,
            ConstraintKind::NodeCost => self.tiers.node_cost,
        };
        match (self.score_type, level) {
            (ScoreType::HardSoft, ScoreLevel::Medium) => ScoreLevel::Soft,
            _ => level,
        }
    }

    /// Checks that every disabled name refers to a known rule and that at
    /// least one rule stays active.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(unknown) = self
            .disabled_constraints
            .iter()
            .find(|name| ConstraintKind::from_name(name).is_none())
        {
            return Err(ConfigError::Invalid(format!(
                "unknown constraint '{}' in disabled_constraints",
                unknown
            )));
        }
        if !ConstraintKind::ALL
            .into_iter()
            .any(|kind| self.is_enabled(kind.name()))
        {
            return Err(ConfigError::Invalid(
                "every constraint is disabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Score type in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    /// Hard, medium and soft tiers.
    #[default]
    HardMediumSoft,

    /// Hard and soft tiers; medium penalties are added to soft.
    HardSoft,
}

/// Hierarchy depth of the capacity checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Node capacities only.
    Flat,

    /// Node, node type and zone capacities.
    #[default]
    Hierarchical,
}

/// Tier assignment of the placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TierConfig {
    /// Wrong zone and wrong node type.
    #[serde(default = "TierConfig::default_placement_mismatch")]
    pub placement_mismatch: ScoreLevel,

    /// Processes without a node.
    #[serde(default = "TierConfig::default_unassigned")]
    pub unassigned: ScoreLevel,

    /// Cost of used nodes.
    #[serde(default = "TierConfig::default_node_cost")]
    pub node_cost: ScoreLevel,
}

impl TierConfig {
    fn default_placement_mismatch() -> ScoreLevel {
        ScoreLevel::Hard
    }

    fn default_unassigned() -> ScoreLevel {
        ScoreLevel::Medium
    }

    fn default_node_cost() -> ScoreLevel {
        ScoreLevel::Soft
    }
}

impl Default for TierConfig {
    fn default() -> Self {
        TierConfig {
            placement_mismatch: Self::default_placement_mismatch(),
            unassigned: Self::default_unassigned(),
            node_cost: Self::default_node_cost(),
        }
    }
}
