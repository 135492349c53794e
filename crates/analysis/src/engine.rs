//! The analysis engine - ranks a task set and reports dependency cycles.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use taskrank_core::input::{InputError, Result};
use taskrank_core::{ScoredTask, Strategy, Task, TaskId, TaskPayload};
use taskrank_scoring::PriorityScorer;
use tracing::{debug, info, warn};

use crate::cycles::CycleDetector;

/// Upper bound on the number of suggestions.
pub const MAX_SUGGESTIONS: usize = 3;

/// Message returned by Suggest when there is nothing to rank.
pub const NO_TASKS_MESSAGE: &str = "No tasks provided - analyze tasks first or provide a task list.";

/// Configuration for the analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// How many tasks Suggest returns (capped at [`MAX_SUGGESTIONS`])
    pub suggest_limit: usize,
    /// Reference day for urgency (None = local date at call time)
    pub today: Option<NaiveDate>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            suggest_limit: MAX_SUGGESTIONS,
            today: None,
        }
    }
}

impl AnalyzerConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the reference day.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Set how many suggestions to return.
    pub fn with_suggest_limit(mut self, limit: usize) -> Self {
        self.suggest_limit = limit;
        self
    }
}

/// Output of Analyze.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Strategy actually used
    pub strategy: Strategy,
    /// All tasks, highest score first
    pub tasks: Vec<ScoredTask>,
    /// Distinct dependency cycles (warnings, never errors)
    pub circular_dependencies: Vec<Vec<TaskId>>,
}

impl AnalysisReport {
    /// Whether any dependency cycle was found.
    pub fn has_cycles(&self) -> bool {
        !self.circular_dependencies.is_empty()
    }
}

/// Output of Suggest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// Strategy actually used
    pub strategy: Strategy,
    /// Top-ranked tasks
    pub top_tasks: Vec<ScoredTask>,
    /// Number of entries in `top_tasks`
    pub count: usize,
    /// Set when there was nothing to rank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Runs Analyze and Suggest over request-scoped task sets.
///
/// Holds no per-request state; one analyzer can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct TaskAnalyzer {
    config: AnalyzerConfig,
    detector: CycleDetector,
}

impl TaskAnalyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Reference day for this call.
    pub fn today(&self) -> NaiveDate {
        self.config.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn scorer(&self, strategy: &str) -> PriorityScorer {
        PriorityScorer::for_name(strategy, self.today())
    }

    /// Rank every task and report dependency cycles.
    ///
    /// Never fails: malformed fields were already defaulted, and cycles are
    /// reported alongside the ranking without affecting it.
    pub fn analyze(&self, tasks: &[Task], strategy: &str) -> AnalysisReport {
        let scorer = self.scorer(strategy);
        debug!("Analyzing {} tasks with {}", tasks.len(), scorer.strategy());

        let circular_dependencies = self.detector.detect(tasks);
        for cycle in &circular_dependencies {
            warn!("Circular dependency detected: {:?}", cycle);
        }

        AnalysisReport {
            strategy: scorer.strategy(),
            tasks: scorer.rank(tasks),
            circular_dependencies,
        }
    }

    /// The top-ranked tasks, a prefix of [`Self::analyze`]'s ranking.
    pub fn suggest(&self, tasks: &[Task], strategy: &str) -> Suggestion {
        let scorer = self.scorer(strategy);
        let limit = self.config.suggest_limit.min(MAX_SUGGESTIONS);

        let mut top_tasks = scorer.rank(tasks);
        top_tasks.truncate(limit);
        debug!("Suggesting {} of {} tasks", top_tasks.len(), tasks.len());

        Suggestion {
            strategy: scorer.strategy(),
            count: top_tasks.len(),
            top_tasks,
            message: None,
        }
    }

    /// Analyze a raw payload.
    ///
    /// Fails with [`InputError::NoTasks`] when the payload holds no usable
    /// task. The strategy defaults to `smart_balance`.
    pub fn analyze_payload(&self, payload: &TaskPayload) -> Result<AnalysisReport> {
        let tasks = payload.normalized();
        if tasks.is_empty() {
            return Err(InputError::NoTasks);
        }
        let skipped = payload.tasks.len() - tasks.len();
        if skipped > 0 {
            info!("Skipped {} task entries that were not objects", skipped);
        }

        Ok(self.analyze(&tasks, strategy_name(payload)))
    }

    /// Suggest from a raw payload.
    ///
    /// An empty payload is not an error: it yields no suggestions and an
    /// explanatory message.
    pub fn suggest_payload(&self, payload: &TaskPayload) -> Suggestion {
        let tasks = payload.normalized();
        let mut suggestion = self.suggest(&tasks, strategy_name(payload));
        if tasks.is_empty() {
            suggestion.message = Some(NO_TASKS_MESSAGE.to_string());
        }
        suggestion
    }
}

fn strategy_name(payload: &TaskPayload) -> &str {
    payload
        .strategy
        .as_deref()
        .unwrap_or_else(|| Strategy::default().as_str())
}
