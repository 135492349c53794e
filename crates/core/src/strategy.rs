//! Scoring strategies and their weight profiles.

use serde::Serialize;

/// How much each component contributes to the final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    /// Urgency weight
    pub urgency: f64,
    /// Importance weight
    pub importance: f64,
    /// Effort weight
    pub effort: f64,
    /// Dependency-impact weight
    pub dependencies: f64,
}

impl Weights {
    const fn new(urgency: f64, importance: f64, effort: f64, dependencies: f64) -> Self {
        Self { urgency, importance, effort, dependencies }
    }

    /// Sum of all four weights.
    pub fn total(&self) -> f64 {
        self.urgency + self.importance + self.effort + self.dependencies
    }
}

const SMART_BALANCE: Weights = Weights::new(0.35, 0.30, 0.10, 0.25);
const FASTEST_WINS: Weights = Weights::new(0.20, 0.20, 0.50, 0.10);
const HIGH_IMPACT: Weights = Weights::new(0.15, 0.60, 0.05, 0.20);
const DEADLINE_DRIVEN: Weights = Weights::new(0.70, 0.15, 0.05, 0.10);

/// A named weighting profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Balanced mix leaning on deadlines and importance
    #[default]
    SmartBalance,
    /// Low-effort tasks first
    FastestWins,
    /// Important tasks first
    HighImpact,
    /// Nearest deadlines first
    DeadlineDriven,
}

impl Strategy {
    /// Every strategy, in table order.
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    /// Look up a strategy by its exact (case-sensitive) name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "smart_balance" => Some(Self::SmartBalance),
            "fastest_wins" => Some(Self::FastestWins),
            "high_impact" => Some(Self::HighImpact),
            "deadline_driven" => Some(Self::DeadlineDriven),
            _ => None,
        }
    }

    /// Look up a strategy by name, falling back to `smart_balance`.
    pub fn resolve(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmartBalance => "smart_balance",
            Self::FastestWins => "fastest_wins",
            Self::HighImpact => "high_impact",
            Self::DeadlineDriven => "deadline_driven",
        }
    }

    /// The weight profile for this strategy.
    pub fn weights(&self) -> Weights {
        match self {
            Self::SmartBalance => SMART_BALANCE,
            Self::FastestWins => FASTEST_WINS,
            Self::HighImpact => HIGH_IMPACT,
            Self::DeadlineDriven => DEADLINE_DRIVEN,
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SmartBalance => "Balances urgency, importance, effort and blocking impact",
            Self::FastestWins => "Favours low-effort quick wins",
            Self::HighImpact => "Favours the most important work",
            Self::DeadlineDriven => "Favours the nearest deadlines",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
