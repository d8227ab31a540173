//! HardMediumSoftScore - Three-level score with hard, medium, and soft constraints

use std::fmt;

use super::traits::{Score, TieredScore};
use super::ScoreLevel;

/// A score with hard, medium, and soft constraint levels.
///
/// For capacity planning the hard level measures overcommitted resources,
/// the medium level measures demand left unassigned and the soft level
/// measures the cost of the nodes in use.
///
/// Comparison order: hard > medium > soft
///
/// # Examples
///
/// ```
/// use capacity_core::HardMediumSoftScore;
///
/// let score1 = HardMediumSoftScore::of(0, -10, -100);
/// let score2 = HardMediumSoftScore::of(0, -5, -200);
///
/// // Better medium score wins even with worse soft score
/// assert!(score2 > score1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardMediumSoftScore {
    hard: i64,
    medium: i64,
    soft: i64,
}

impl HardMediumSoftScore {
    /// The zero score.
    pub const ZERO: HardMediumSoftScore = HardMediumSoftScore::of(0, 0, 0);

    /// One hard constraint penalty.
    pub const ONE_HARD: HardMediumSoftScore = HardMediumSoftScore::of(1, 0, 0);

    /// One medium constraint penalty.
    pub const ONE_MEDIUM: HardMediumSoftScore = HardMediumSoftScore::of(0, 1, 0);

    /// One soft constraint penalty.
    pub const ONE_SOFT: HardMediumSoftScore = HardMediumSoftScore::of(0, 0, 1);

    /// Creates a new HardMediumSoftScore.
    #[inline]
    pub const fn of(hard: i64, medium: i64, soft: i64) -> Self {
        HardMediumSoftScore { hard, medium, soft }
    }

    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardMediumSoftScore::of(hard, 0, 0)
    }

    #[inline]
    pub const fn of_medium(medium: i64) -> Self {
        HardMediumSoftScore::of(0, medium, 0)
    }

    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardMediumSoftScore::of(0, 0, soft)
    }

    /// Returns the hard score component.
    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    /// Returns the medium score component.
    #[inline]
    pub const fn medium(&self) -> i64 {
        self.medium
    }

    /// Returns the soft score component.
    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// Returns the component at the given level.
    pub const fn level(&self, level: ScoreLevel) -> i64 {
        match level {
            ScoreLevel::Hard => self.hard,
            ScoreLevel::Medium => self.medium,
            ScoreLevel::Soft => self.soft,
        }
    }
}

impl Score for HardMediumSoftScore {
    #[inline]
    fn is_feasible(&self) -> bool {
        self.hard >= 0
    }

    #[inline]
    fn zero() -> Self {
        HardMediumSoftScore::ZERO
    }

    #[inline]
    fn levels_count() -> usize {
        3
    }

    fn to_level_numbers(&self) -> Vec<i64> {
        vec![self.hard, self.medium, self.soft]
    }

    fn from_level_numbers(levels: &[i64]) -> Self {
        assert_eq!(
            levels.len(),
            3,
            "HardMediumSoftScore requires exactly 3 levels"
        );
        HardMediumSoftScore::of(levels[0], levels[1], levels[2])
    }

    fn abs(&self) -> Self {
        HardMediumSoftScore::of(
            self.hard.saturating_abs(),
            self.medium.saturating_abs(),
            self.soft.saturating_abs(),
        )
    }

    fn level_label(index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Hard,
            1 => ScoreLevel::Medium,
            2 => ScoreLevel::Soft,
            _ => panic!("HardMediumSoftScore has 3 levels, got index {}", index),
        }
    }
}

impl TieredScore for HardMediumSoftScore {
    #[inline]
    fn from_tiers(hard: i64, medium: i64, soft: i64) -> Self {
        HardMediumSoftScore::of(hard, medium, soft)
    }
}

impl_score_ops!(HardMediumSoftScore { hard, medium, soft } => of);

impl fmt::Debug for HardMediumSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HardMediumSoftScore({}, {}, {})",
            self.hard, self.medium, self.soft
        )
    }
}

impl fmt::Display for HardMediumSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}hard/{}medium/{}soft",
            self.hard, self.medium, self.soft
        )
    }
}

impl_score_parse!(HardMediumSoftScore { hard => "hard", medium => "medium", soft => "soft" } => of);
