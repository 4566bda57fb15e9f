pub mod rank;
pub mod samples;
pub mod validate;

use crate::error::{Result, TaskRankError};
use crate::scoring::TaskScorer;
use crate::types::report::{AnalyzeReport, SuggestReport};
use crate::types::task::Task;
use chrono::{DateTime, Utc};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

pub fn analyze(
    tasks: &[Task],
    strategy_name: Option<&str>,
    limit: Option<usize>,
    now: DateTime<Utc>,
) -> Result<AnalyzeReport> {
    if tasks.is_empty() {
        return Err(TaskRankError::NoTasks);
    }
    let scorer = TaskScorer::for_name(strategy_name);
    let ranked = rank::rank_with(&scorer, tasks, limit, now);
    Ok(AnalyzeReport {
        tasks: ranked,
        strategy: scorer.strategy().name().to_string(),
        message: format!("Analyzed {} tasks", tasks.len()),
    })
}

pub fn suggest(
    tasks: &[Task],
    strategy_name: Option<&str>,
    limit: usize,
    now: DateTime<Utc>,
) -> SuggestReport {
    let scorer = TaskScorer::for_name(strategy_name);
    SuggestReport {
        suggestions: rank::suggestions(&scorer, tasks, limit, now),
        strategy: scorer.strategy().name().to_string(),
    }
}
