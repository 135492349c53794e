//! Strategy-weighted priority scoring.

use chrono::NaiveDate;
use taskrank_core::{round2, ScoreComponents, ScoredTask, Strategy, Task, Weights};
use tracing::debug;

use crate::components::{dependent_counts, ComponentScorer};
use crate::explanation::ExplanationGenerator;

/// Combine components with weights and round to two decimals.
pub fn weighted_score(weights: &Weights, components: &ScoreComponents) -> f64 {
    round2(
        weights.urgency * components.urgency
            + weights.importance * components.importance
            + weights.effort * components.effort
            + weights.dependencies * components.dependencies,
    )
}

/// Scores and ranks a task set under one strategy.
///
/// Stateless apart from the strategy and reference day, so the same input
/// always produces the same output.
#[derive(Debug, Clone, Copy)]
pub struct PriorityScorer {
    strategy: Strategy,
    components: ComponentScorer,
    explainer: ExplanationGenerator,
}

impl PriorityScorer {
    /// Create a scorer for a strategy, anchored on `today`.
    pub fn new(strategy: Strategy, today: NaiveDate) -> Self {
        Self {
            strategy,
            components: ComponentScorer::new(today),
            explainer: ExplanationGenerator::new(strategy),
        }
    }

    /// Create a scorer from a strategy name; unknown names use `smart_balance`.
    pub fn for_name(name: &str, today: NaiveDate) -> Self {
        let strategy = Strategy::parse(name).unwrap_or_else(|| {
            debug!("Unknown strategy '{}', falling back to {}", name, Strategy::default());
            Strategy::default()
        });
        Self::new(strategy, today)
    }

    /// The active strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The reference day for urgency.
    pub fn today(&self) -> NaiveDate {
        self.components.today()
    }

    /// Score a single task given how many tasks depend on it.
    ///
    /// Components are rounded before weighting so the reported score is
    /// exactly the weighted sum of the reported components.
    pub fn score_task(&self, task: &Task, dependents: usize) -> ScoredTask {
        let components = self.components.score(task, dependents).rounded();
        let priority_score = weighted_score(&self.strategy.weights(), &components);

        ScoredTask::new(
            task.clone(),
            priority_score,
            components,
            self.explainer.explain(&components),
        )
    }

    /// Score every task, keeping input order.
    pub fn score_all(&self, tasks: &[Task]) -> Vec<ScoredTask> {
        let counts = dependent_counts(tasks);
        tasks
            .iter()
            .map(|task| self.score_task(task, counts.get(&task.id).copied().unwrap_or(0)))
            .collect()
    }

    /// Score every task and sort by descending score.
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn rank(&self, tasks: &[Task]) -> Vec<ScoredTask> {
        let mut scored = self.score_all(tasks);
        scored.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
        debug!("Ranked {} tasks with {}", scored.len(), self.strategy);
        scored
    }
}
