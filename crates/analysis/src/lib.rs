//! Analysis layer - ranking, suggestions and dependency cycle detection.

#![warn(missing_docs)]

pub mod cycles;
pub mod engine;

pub use cycles::{CycleDetector, DepGraph};
pub use engine::{AnalysisReport, AnalyzerConfig, Suggestion, TaskAnalyzer, MAX_SUGGESTIONS};
