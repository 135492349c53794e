//! Natural-language explanations for priority scores.

use taskrank_core::thresholds::{
    BLOCKS_OTHERS, DUE_SOON, HIGH_IMPORTANCE, MANY_DEPENDENTS, NOTABLE_IMPORTANCE, QUICK_WIN,
    STRATEGY_FOCUS, URGENT,
};
use taskrank_core::{ScoreComponents, Strategy};

/// Separator between reason fragments.
pub const SEPARATOR: &str = " • ";

/// Explanation used when no reason applies.
pub const BALANCED: &str = "Balanced priority across all factors";

/// Builds explanations from component scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplanationGenerator {
    strategy: Strategy,
}

impl ExplanationGenerator {
    /// Create a generator for a strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Reason fragments, in fixed order: urgency, importance, effort,
    /// dependencies, then the strategy's own focus.
    pub fn reasons(&self, components: &ScoreComponents) -> Vec<&'static str> {
        let mut reasons = Vec::new();

        if components.urgency >= URGENT {
            reasons.push("Due very soon or overdue");
        } else if components.urgency >= DUE_SOON {
            reasons.push("Due within a week");
        }

        if components.importance >= HIGH_IMPORTANCE {
            reasons.push("High importance");
        } else if components.importance >= NOTABLE_IMPORTANCE {
            reasons.push("Medium-high importance");
        }

        if components.effort >= QUICK_WIN {
            reasons.push("Quick win (low effort)");
        }

        if components.dependencies >= MANY_DEPENDENTS {
            reasons.push("Multiple tasks depend on this");
        } else if components.dependencies >= BLOCKS_OTHERS {
            reasons.push("Blocks other tasks");
        }

        match self.strategy {
            Strategy::FastestWins if components.effort >= STRATEGY_FOCUS => {
                reasons.push("Prioritized as quick win");
            }
            Strategy::HighImpact if components.importance >= STRATEGY_FOCUS => {
                reasons.push("Prioritized for high impact");
            }
            Strategy::DeadlineDriven if components.urgency >= STRATEGY_FOCUS => {
                reasons.push("Prioritized by deadline");
            }
            _ => {}
        }

        reasons
    }

    /// Join the applicable reasons, or fall back to [`BALANCED`].
    pub fn explain(&self, components: &ScoreComponents) -> String {
        let reasons = self.reasons(components);
        if reasons.is_empty() {
            BALANCED.to_string()
        } else {
            reasons.join(SEPARATOR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(urgency: f64, importance: f64, effort: f64, dependencies: f64) -> ScoreComponents {
        ScoreComponents { urgency, importance, effort, dependencies }
    }

    #[test]
    fn test_balanced_when_nothing_stands_out() {
        let generator = ExplanationGenerator::new(Strategy::SmartBalance);
        assert_eq!(generator.explain(&components(5.0, 5.0, 5.0, 0.0)), BALANCED);
    }

    #[test]
    fn test_fragments_in_fixed_order() {
        let generator = ExplanationGenerator::new(Strategy::SmartBalance);
        let text = generator.explain(&components(9.5, 9.0, 10.0, 8.5));
        assert_eq!(
            text,
            "Due very soon or overdue • High importance • Quick win (low effort) • Multiple tasks depend on this"
        );
    }

    #[test]
    fn test_medium_tiers() {
        let generator = ExplanationGenerator::new(Strategy::SmartBalance);
        assert_eq!(
            generator.reasons(&components(6.0, 6.0, 6.0, 4.0)),
            vec!["Due within a week", "Medium-high importance", "Blocks other tasks"]
        );
    }

    #[test]
    fn test_strategy_specific_reasons() {
        let c = components(8.0, 7.0, 9.0, 0.0);

        let fastest = ExplanationGenerator::new(Strategy::FastestWins).reasons(&c);
        assert_eq!(fastest.last(), Some(&"Prioritized as quick win"));

        let impact = ExplanationGenerator::new(Strategy::HighImpact).reasons(&c);
        assert_eq!(impact.last(), Some(&"Prioritized for high impact"));

        let deadline = ExplanationGenerator::new(Strategy::DeadlineDriven).reasons(&c);
        assert_eq!(deadline.last(), Some(&"Prioritized by deadline"));

        let balanced = ExplanationGenerator::new(Strategy::SmartBalance).reasons(&c);
        assert!(!balanced.iter().any(|r| r.starts_with("Prioritized")));
    }

    #[test]
    fn test_strategy_reason_alone_avoids_balanced() {
        // importance 7 is below the high tier but meets the strategy focus
        let generator = ExplanationGenerator::new(Strategy::HighImpact);
        assert_eq!(
            generator.explain(&components(5.0, 7.0, 5.0, 0.0)),
            "Medium-high importance • Prioritized for high impact"
        );
    }

    #[test]
    fn test_deterministic() {
        let generator = ExplanationGenerator::new(Strategy::DeadlineDriven);
        let c = components(9.0, 3.0, 2.0, 4.0);
        assert_eq!(generator.explain(&c), generator.explain(&c));
    }
}
