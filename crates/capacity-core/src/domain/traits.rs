//! Core domain traits

use std::hash::Hash;

use crate::score::Score;

/// Trait for planning solutions.
///
/// A planning solution holds the problem facts, the planning entities and
/// the score of the current assignment.
///
/// # Example
///
/// ```
/// use capacity_core::{PlanningSolution, HardSoftScore};
///
/// #[derive(Clone)]
/// struct Packing {
///     bins: Vec<Option<usize>>,
///     score: Option<HardSoftScore>,
/// }
///
/// impl PlanningSolution for Packing {
///     type Score = HardSoftScore;
///
///     fn score(&self) -> Option<Self::Score> {
///         self.score
///     }
///
///     fn set_score(&mut self, score: Option<Self::Score>) {
///         self.score = score;
///     }
/// }
/// ```
pub trait PlanningSolution: Clone + Send + Sync + 'static {
    /// The score type used to evaluate this solution.
    type Score: Score;

    /// Returns the current score of this solution, if calculated.
    fn score(&self) -> Option<Self::Score>;

    /// Sets the score of this solution.
    fn set_score(&mut self, score: Option<Self::Score>);

    /// Returns true if every planning variable has a value.
    fn is_initialized(&self) -> bool {
        true
    }
}

/// Trait for unique identification of entities and facts.
///
/// Ordering heuristics break ties on this id so that sorting is
/// reproducible across runs.
pub trait PlanningId {
    /// The type of the unique identifier.
    type Id: Eq + Ord + Hash + Copy + Send + Sync + 'static;

    /// Returns the unique identifier for this object.
    fn planning_id(&self) -> Self::Id;
}
