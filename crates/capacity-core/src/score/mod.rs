//! Score types for representing assignment quality
//!
//! Scores compare candidate assignments. Every score is an immutable value
//! with lexicographic ordering over its levels, highest priority first.

#[macro_use]
mod macros;

mod hard_medium_soft;
mod hard_soft;
mod traits;

#[cfg(test)]
mod tests;

pub use hard_medium_soft::HardMediumSoftScore;
pub use hard_soft::HardSoftScore;
pub use traits::{ParseableScore, Score, ScoreParseError, TieredScore};

/// Score level representing different constraint priorities.
///
/// Used both to label the levels of a [`Score`] and to route a constraint's
/// penalty into a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScoreLevel {
    /// Hard constraints - must be satisfied for feasibility
    Hard,
    /// Medium constraints - secondary priority
    Medium,
    /// Soft constraints - optimization objectives
    Soft,
}

impl ScoreLevel {
    /// Returns the lowercase label used in score strings (`"hard"`, ...).
    pub const fn label(self) -> &'static str {
        match self {
            ScoreLevel::Hard => "hard",
            ScoreLevel::Medium => "medium",
            ScoreLevel::Soft => "soft",
        }
    }
}

impl std::fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}
