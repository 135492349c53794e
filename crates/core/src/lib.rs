//! TaskRank core data models.
//!
//! This crate defines the task and score types, the strategy weight table
//! and the shared thresholds, plus the boundary that turns raw JSON payloads
//! into normalized tasks.

#![warn(missing_docs)]

mod id;
mod task;
mod strategy;

pub mod input;
pub mod thresholds;

// Re-exports
pub use id::TaskId;
pub use task::{Task, ScoreComponents, ScoredTask, SCORE_FIELDS, round2};
pub use strategy::{Strategy, Weights};
pub use input::{InputError, TaskPayload, normalize_tasks};
