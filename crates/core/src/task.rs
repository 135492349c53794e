//! Task model - the unit that gets ranked.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::id::TaskId;

/// A normalized task.
///
/// Every field the scorers read is optional; missing or malformed input
/// has already been mapped to `None` by [`crate::input`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    /// Unique identifier within the request
    pub id: TaskId,

    /// Task title
    pub title: String,

    /// Due date
    pub due_date: Option<NaiveDate>,

    /// Estimated effort in hours
    pub estimated_hours: Option<f64>,

    /// Importance, nominally 1-10
    pub importance: Option<f64>,

    /// Tasks this one depends on
    pub dependencies: Vec<TaskId>,

    /// Unrecognised payload fields, echoed back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Create a task with only an id and a title.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: None,
            estimated_hours: None,
            importance: None,
            dependencies: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Set the due date.
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the effort estimate.
    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Set the importance.
    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Add a dependency.
    pub fn depends_on(mut self, id: impl Into<TaskId>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    /// Whether this task lists `id` among its dependencies.
    pub fn has_dependency(&self, id: &TaskId) -> bool {
        self.dependencies.contains(id)
    }
}

/// The four 0-10 sub-scores feeding a priority score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreComponents {
    /// How close the deadline is
    pub urgency: f64,
    /// How much the task matters
    pub importance: f64,
    /// How little effort it takes (higher = quicker)
    pub effort: f64,
    /// How many other tasks wait on it
    pub dependencies: f64,
}

impl ScoreComponents {
    /// Round every component to two decimals.
    pub fn rounded(self) -> Self {
        Self {
            urgency: round2(self.urgency),
            importance: round2(self.importance),
            effort: round2(self.effort),
            dependencies: round2(self.dependencies),
        }
    }
}

/// Keys a [`ScoredTask`] adds on top of its task's fields.
pub const SCORE_FIELDS: [&str; 3] = ["priority_score", "score_components", "explanation"];

/// A task with its priority score, components and explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTask {
    /// The scored task
    #[serde(flatten)]
    pub task: Task,

    /// Final weighted score, 0-10, two decimals
    pub priority_score: f64,

    /// Component breakdown
    pub score_components: ScoreComponents,

    /// Human-readable reasons for the score
    pub explanation: String,
}

impl ScoredTask {
    /// Attach scores to a task, replacing any caller-supplied values
    /// carried in `extra` under the same keys.
    pub fn new(
        mut task: Task,
        priority_score: f64,
        score_components: ScoreComponents,
        explanation: String,
    ) -> Self {
        for key in SCORE_FIELDS {
            task.extra.remove(key);
        }
        Self { task, priority_score, score_components, explanation }
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
