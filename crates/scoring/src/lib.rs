//! Scoring engine - component scores, weighted ranking and explanations.

#![warn(missing_docs)]

pub mod components;
pub mod explanation;
pub mod scorer;

pub use components::ComponentScorer;
pub use explanation::ExplanationGenerator;
pub use scorer::{PriorityScorer, weighted_score};
