//! Component scorers.
//!
//! Four independent, total functions, each mapping raw task fields onto the
//! 0-10 component scale. Missing inputs score [`NEUTRAL`].

use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use taskrank_core::thresholds::{MAX_SCORE, NEUTRAL};
use taskrank_core::{ScoreComponents, Task, TaskId};

/// Urgency from the number of calendar days until the due date.
///
/// Overdue tasks are capped at 10; far-off deadlines decay to 0 by the
/// ninetieth day.
pub fn urgency(due_date: Option<NaiveDate>, today: NaiveDate) -> f64 {
    let Some(due) = due_date else {
        return NEUTRAL;
    };

    let days = (due - today).num_days();
    let score = match days {
        d if d < 0 => MAX_SCORE,
        0 => 9.5,
        1 => 9.0,
        2..=3 => 8.0,
        4..=7 => 6.0,
        8..=14 => 4.0,
        15..=30 => 2.0,
        d => 2.0 - (d - 30) as f64 / 30.0,
    };
    score.clamp(0.0, MAX_SCORE)
}

/// Importance, clamped into 1-10.
pub fn importance(raw: Option<f64>) -> f64 {
    match raw {
        Some(value) if value.is_finite() => value.clamp(1.0, MAX_SCORE),
        _ => NEUTRAL,
    }
}

/// Effort score: the fewer hours, the higher the score.
pub fn effort(estimated_hours: Option<f64>) -> f64 {
    let hours = match estimated_hours {
        Some(h) if h.is_finite() && h >= 0.0 => h,
        _ => return NEUTRAL,
    };

    let score = if hours <= 0.5 {
        10.0
    } else if hours <= 1.0 {
        9.0
    } else if hours <= 2.0 {
        8.0
    } else if hours <= 4.0 {
        6.0
    } else if hours <= 8.0 {
        4.0
    } else if hours <= 16.0 {
        2.0
    } else {
        2.0 - (hours - 16.0) / 8.0
    };
    score.clamp(0.0, MAX_SCORE)
}

/// Map a dependent count onto the component scale.
pub fn impact_for_dependents(dependents: usize) -> f64 {
    match dependents {
        0 => 0.0,
        1 => 4.0,
        2 => 7.0,
        n => (7.0 + (n - 2) as f64 * 1.5).min(MAX_SCORE),
    }
}

/// Number of tasks in `all_tasks` that list `id` as a dependency.
pub fn dependents_of(id: &TaskId, all_tasks: &[Task]) -> usize {
    all_tasks.iter().filter(|t| t.has_dependency(id)).count()
}

/// Dependency impact of `id` within `all_tasks`.
pub fn dependency_impact(id: &TaskId, all_tasks: &[Task]) -> f64 {
    impact_for_dependents(dependents_of(id, all_tasks))
}

/// Dependent counts for every referenced id, computed in one pass.
///
/// A task listing the same dependency twice still counts once.
pub fn dependent_counts(all_tasks: &[Task]) -> HashMap<&TaskId, usize> {
    let mut counts: HashMap<&TaskId, usize> = HashMap::new();
    for task in all_tasks {
        let unique: HashSet<&TaskId> = task.dependencies.iter().collect();
        for dep in unique {
            *counts.entry(dep).or_insert(0) += 1;
        }
    }
    counts
}

/// Computes all four components for tasks relative to a fixed day.
#[derive(Debug, Clone, Copy)]
pub struct ComponentScorer {
    today: NaiveDate,
}

impl ComponentScorer {
    /// Create a scorer anchored on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The reference day.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Score one task given how many tasks depend on it.
    pub fn score(&self, task: &Task, dependents: usize) -> ScoreComponents {
        ScoreComponents {
            urgency: urgency(task.due_date, self.today),
            importance: importance(task.importance),
            effort: effort(task.estimated_hours),
            dependencies: impact_for_dependents(dependents),
        }
    }

    /// Score one task within its full task set.
    pub fn score_in(&self, task: &Task, all_tasks: &[Task]) -> ScoreComponents {
        self.score(task, dependents_of(&task.id, all_tasks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn due_in(days: i64) -> Option<NaiveDate> {
        Some(today() + Duration::days(days))
    }

    #[test]
    fn test_overdue_gets_maximum_urgency() {
        for days in [-1, -5, -400] {
            assert_eq!(urgency(due_in(days), today()), 10.0);
        }
    }

    #[test]
    fn test_urgency_near_deadlines() {
        assert_eq!(urgency(due_in(0), today()), 9.5);
        assert_eq!(urgency(due_in(1), today()), 9.0);
        assert_eq!(urgency(due_in(3), today()), 8.0);
        assert_eq!(urgency(due_in(7), today()), 6.0);
        assert_eq!(urgency(due_in(14), today()), 4.0);
        assert_eq!(urgency(due_in(30), today()), 2.0);
    }

    #[test]
    fn test_urgency_far_future_decays_to_zero() {
        assert!(urgency(due_in(60), today()) < 5.0);
        assert!((urgency(due_in(45), today()) - 1.5).abs() < 1e-9);
        assert_eq!(urgency(due_in(90), today()), 0.0);
        assert_eq!(urgency(due_in(1000), today()), 0.0);
    }

    #[test]
    fn test_urgency_missing_is_neutral() {
        assert_eq!(urgency(None, today()), 5.0);
    }

    #[test]
    fn test_urgency_monotonic() {
        let mut previous = urgency(due_in(0), today());
        for days in 1..200 {
            let current = urgency(due_in(days), today());
            assert!(current <= previous, "day {days}: {current} > {previous}");
            previous = current;
        }
    }

    #[test]
    fn test_importance() {
        assert_eq!(importance(None), 5.0);
        assert_eq!(importance(Some(f64::NAN)), 5.0);
        assert_eq!(importance(Some(1.0)), 1.0);
        assert_eq!(importance(Some(7.0)), 7.0);
        assert_eq!(importance(Some(10.0)), 10.0);
        assert_eq!(importance(Some(-3.0)), 1.0);
        assert_eq!(importance(Some(42.0)), 10.0);
    }

    #[test]
    fn test_effort_brackets() {
        assert_eq!(effort(Some(0.0)), 10.0);
        assert_eq!(effort(Some(0.5)), 10.0);
        assert_eq!(effort(Some(1.0)), 9.0);
        assert_eq!(effort(Some(2.0)), 8.0);
        assert_eq!(effort(Some(4.0)), 6.0);
        assert_eq!(effort(Some(8.0)), 4.0);
        assert_eq!(effort(Some(16.0)), 2.0);
        assert_eq!(effort(Some(20.0)), 1.5);
        assert_eq!(effort(Some(100.0)), 0.0);
    }

    #[test]
    fn test_effort_invalid_is_neutral() {
        assert_eq!(effort(None), 5.0);
        assert_eq!(effort(Some(-5.0)), 5.0);
        assert_eq!(effort(Some(f64::INFINITY)), 5.0);
    }

    #[test]
    fn test_effort_monotonic() {
        let mut previous = effort(Some(0.0));
        for quarter_hours in 1..200 {
            let current = effort(Some(quarter_hours as f64 * 0.25));
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_impact_for_dependents() {
        assert_eq!(impact_for_dependents(0), 0.0);
        assert_eq!(impact_for_dependents(1), 4.0);
        assert_eq!(impact_for_dependents(2), 7.0);
        assert_eq!(impact_for_dependents(3), 8.5);
        assert_eq!(impact_for_dependents(4), 10.0);
        assert_eq!(impact_for_dependents(50), 10.0);

        for n in 0..20 {
            assert!(impact_for_dependents(n + 1) >= impact_for_dependents(n));
        }
    }

    #[test]
    fn test_dependency_impact() {
        let tasks = vec![
            Task::new(1, "a").depends_on(2),
            Task::new(2, "b"),
            Task::new(3, "c").depends_on(2).depends_on(2),
        ];

        assert_eq!(dependents_of(&TaskId::Int(2), &tasks), 2);
        assert_eq!(dependency_impact(&TaskId::Int(2), &tasks), 7.0);
        assert_eq!(dependency_impact(&TaskId::Int(1), &tasks), 0.0);
        // dangling references are harmless
        assert_eq!(dependency_impact(&TaskId::Int(99), &tasks), 0.0);
    }

    #[test]
    fn test_dependent_counts_match_linear_count() {
        let tasks = vec![
            Task::new(1, "a").depends_on(2).depends_on(3),
            Task::new(2, "b").depends_on(3),
            Task::new(3, "c"),
            Task::new(4, "d").depends_on(3).depends_on(3),
        ];

        let counts = dependent_counts(&tasks);
        for task in &tasks {
            let expected = dependents_of(&task.id, &tasks);
            assert_eq!(counts.get(&task.id).copied().unwrap_or(0), expected);
        }
    }

    #[test]
    fn test_missing_fields_score_neutral() {
        let scorer = ComponentScorer::new(today());
        let task = Task::new(1, "bare");
        let components = scorer.score_in(&task, std::slice::from_ref(&task));

        assert_eq!(components.urgency, 5.0);
        assert_eq!(components.importance, 5.0);
        assert_eq!(components.effort, 5.0);
        assert_eq!(components.dependencies, 0.0);
    }
}
