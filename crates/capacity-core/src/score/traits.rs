//! Core Score trait definition

use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

use super::ScoreLevel;

/// Core trait for all score types.
///
/// A score measures how good an assignment of processes to nodes is. Scores
/// are compared level by level; a higher level always dominates a lower one.
/// Every level is "more negative is worse" and a score is feasible when its
/// hard level is not negative.
pub trait Score:
    Copy
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Sum
    + 'static
{
    /// Returns true if this score represents a feasible assignment.
    fn is_feasible(&self) -> bool;

    /// Returns the zero score (identity element for addition).
    fn zero() -> Self;

    /// Returns the number of score levels.
    fn levels_count() -> usize;

    /// Returns the score values, highest priority first.
    fn to_level_numbers(&self) -> Vec<i64>;

    /// Creates a score from level numbers.
    ///
    /// # Panics
    /// Panics if the number of levels doesn't match `levels_count()`.
    fn from_level_numbers(levels: &[i64]) -> Self;

    /// Returns the absolute value of this score.
    fn abs(&self) -> Self;

    /// Returns the semantic label for the score level at the given index.
    ///
    /// # Panics
    /// Panics if `index >= levels_count()`.
    fn level_label(index: usize) -> ScoreLevel;

    /// Returns true if this score is better than the other score.
    fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns true if this score is worse than the other score.
    fn is_worse_than(&self, other: &Self) -> bool {
        self < other
    }
}

/// A score that can be assembled from the three tiers the capacity rules
/// produce.
///
/// Three-tier scores map each tier onto its own level. Two-tier scores fold
/// the medium tier into soft, so medium penalties still count, just below
/// every hard penalty.
pub trait TieredScore: Score {
    /// Builds a score from summed hard, medium and soft penalties.
    fn from_tiers(hard: i64, medium: i64, soft: i64) -> Self;

    /// Builds a score holding `amount` at a single tier.
    fn of_level(level: ScoreLevel, amount: i64) -> Self {
        match level {
            ScoreLevel::Hard => Self::from_tiers(amount, 0, 0),
            ScoreLevel::Medium => Self::from_tiers(0, amount, 0),
            ScoreLevel::Soft => Self::from_tiers(0, 0, amount),
        }
    }
}

/// Marker trait for scores that can be parsed from a string.
pub trait ParseableScore: Score {
    /// Parses a score from a string representation.
    ///
    /// # Format
    /// - HardSoftScore: "0hard/-100soft"
    /// - HardMediumSoftScore: "0hard/0medium/-100soft"
    fn parse(s: &str) -> Result<Self, ScoreParseError>;

    /// Returns the string representation of this score.
    fn to_string_repr(&self) -> String;
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreParseError {
    pub message: String,
}

impl std::fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score parse error: {}", self.message)
    }
}

impl std::error::Error for ScoreParseError {}
