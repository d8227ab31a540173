//! Score calculator: the entry point an optimizer calls per candidate.

use capacity_config::ScoringConfig;
use capacity_core::domain::{CapacitySolution, PlanningSolution};
use capacity_core::error::{CapacityError, Result};
use capacity_core::score::{HardMediumSoftScore, TieredScore};
use tracing::debug;

use crate::analysis::{self, ScoreExplanation};
use crate::constraint::{ConstraintList, ConstraintResult};
use crate::evaluator::{ConstraintEvaluator, EvaluatorSettings};

/// Scores capacity solutions from scratch.
///
/// Holds only the evaluation policy. Every call builds a fresh ledger, so
/// one calculator can score any number of solutions, from any number of
/// threads.
///
/// # Example
///
/// ```
/// use capacity_config::ScoringConfig;
/// use capacity_core::domain::{CapacitySolution, Node, NodeType, Process, Resources, Zone};
/// use capacity_core::HardMediumSoftScore;
/// use capacity_scoring::CapacityScoreCalculator;
///
/// let solution = CapacitySolution::new(
///     vec![Zone::new(0, "Zone1")],
///     vec![NodeType::new(0, "COMPUTE")],
///     vec![Node::new(1, Resources::new(10, 100, 1000), 50, 0, 0)],
///     vec![Process::new(1, Resources::new(1, 100, 500), 0, 0).assigned_to(1)],
/// );
///
/// let calculator = CapacityScoreCalculator::new(ScoringConfig::default());
/// let score = calculator.calculate(&solution).unwrap();
/// assert_eq!(score, HardMediumSoftScore::of(0, 0, -50));
/// ```
#[derive(Debug, Clone)]
pub struct CapacityScoreCalculator {
    config: ScoringConfig,
    evaluator: ConstraintEvaluator,
    constraints: ConstraintList,
}

impl CapacityScoreCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        let evaluator = ConstraintEvaluator::new(EvaluatorSettings::from(&config));
        let constraints = ConstraintList::from_config(&config);
        Self {
            config,
            evaluator,
            constraints,
        }
    }

    /// Like [`new`](Self::new), rejecting configurations that fail
    /// [`ScoringConfig::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::Config`] describing the invalid setting.
    pub fn try_new(config: ScoringConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| CapacityError::Config(e.to_string()))?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn constraints(&self) -> &ConstraintList {
        &self.constraints
    }

    /// Three-tier score of `solution`.
    ///
    /// Under a `hard_soft` configuration the medium level is always zero
    /// and medium penalties appear in soft.
    ///
    /// # Errors
    ///
    /// Fails if a process references an unknown node or node ids repeat.
    pub fn calculate(&self, solution: &CapacitySolution) -> Result<HardMediumSoftScore> {
        self.calculate_as(solution)
    }

    /// Score of `solution` in the requested score type.
    pub fn calculate_as<Sc: TieredScore>(&self, solution: &CapacitySolution) -> Result<Sc> {
        let evaluation = self.evaluator.evaluate(solution)?;
        let score: Sc = self.constraints.compose(&evaluation);
        debug!(
            event = "score_calculated",
            score = %score,
            process_count = solution.process_count(),
            node_count = solution.node_count(),
            used_nodes = evaluation.used_node_count(),
        );
        Ok(score)
    }

    /// Calculates the score and stores it on the solution.
    pub fn calculate_and_store(
        &self,
        solution: &mut CapacitySolution,
    ) -> Result<HardMediumSoftScore> {
        let score = self.calculate(solution)?;
        solution.set_score(Some(score));
        Ok(score)
    }

    /// Per-constraint scores of `solution`.
    pub fn evaluate_each(
        &self,
        solution: &CapacitySolution,
    ) -> Result<Vec<ConstraintResult<HardMediumSoftScore>>> {
        let evaluation = self.evaluator.evaluate(solution)?;
        Ok(self.constraints.evaluate_each(&evaluation))
    }

    /// Per-constraint breakdown with the match behind every penalty.
    pub fn explain(
        &self,
        solution: &CapacitySolution,
    ) -> Result<ScoreExplanation<HardMediumSoftScore>> {
        let evaluation = self.evaluator.evaluate(solution)?;
        Ok(analysis::explain(&self.constraints, &evaluation))
    }
}

impl Default for CapacityScoreCalculator {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Scores `solution` with the default policy: three tiers, node, node type
/// and zone capacities over every dimension, mismatches on the hard tier.
pub fn evaluate(solution: &CapacitySolution) -> Result<HardMediumSoftScore> {
    CapacityScoreCalculator::default().calculate(solution)
}
