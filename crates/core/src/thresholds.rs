//! Component-score thresholds shared by the scorer and the explainer.
//!
//! All values are on the 0-10 component scale.

/// Urgency at or above this reads as "due very soon or overdue" (due within 3 days).
pub const URGENT: f64 = 8.0;

/// Urgency at or above this reads as "due within a week".
pub const DUE_SOON: f64 = 6.0;

/// Importance at or above this reads as high importance.
pub const HIGH_IMPORTANCE: f64 = 8.0;

/// Importance at or above this reads as medium-high importance.
pub const NOTABLE_IMPORTANCE: f64 = 6.0;

/// Effort at or above this is a quick win (two hours or less).
pub const QUICK_WIN: f64 = 8.0;

/// Dependency impact at or above this means several tasks wait on it (two or more).
pub const MANY_DEPENDENTS: f64 = 7.0;

/// Dependency impact at or above this means at least one task waits on it.
pub const BLOCKS_OTHERS: f64 = 4.0;

/// The strategy's favoured component must reach this to be called out.
pub const STRATEGY_FOCUS: f64 = 7.0;

/// Neutral value used for missing or malformed inputs.
pub const NEUTRAL: f64 = 5.0;

/// Upper bound of every component.
pub const MAX_SCORE: f64 = 10.0;
