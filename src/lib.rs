pub mod analyze;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod scoring;
pub mod types;

pub use error::{Result, TaskRankError};
pub use scoring::{ScoringContext, Strategy, TaskScorer};
pub use types::task::{Task, TaskId};
