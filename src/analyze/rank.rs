use crate::scoring::{ScoringContext, TaskScorer};
use crate::types::report::{ScoredTask, Suggestion};
use crate::types::scoring::round2;
use crate::types::task::Task;
use chrono::{DateTime, Utc};

/// Scores every task against the whole batch; equal scores keep input order.
pub fn rank_with(
    scorer: &TaskScorer,
    tasks: &[Task],
    limit: Option<usize>,
    now: DateTime<Utc>,
) -> Vec<ScoredTask> {
    let ctx = ScoringContext::new(tasks, now);
    let mut scored = tasks
        .iter()
        .map(|task| {
            let score = round2(scorer.score(task, &ctx));
            tracing::debug!(
                id = task.id.as_ref().map(|id| id.as_str()).unwrap_or("-"),
                title = %task.title,
                strategy = %scorer.strategy(),
                score,
                "scored task"
            );
            ScoredTask {
                explanation: scorer.explain(task),
                task: task.clone(),
                score,
            }
        })
        .collect::<Vec<_>>();

    // sort_by is stable
    scored.sort_by(|left, right| right.score.total_cmp(&left.score));

    if let Some(limit) = limit {
        scored.truncate(limit);
    }
    tracing::info!(
        strategy = %scorer.strategy(),
        tasks = tasks.len(),
        returned = scored.len(),
        "ranked batch"
    );
    scored
}

pub fn rank(
    tasks: &[Task],
    strategy_name: Option<&str>,
    limit: Option<usize>,
    now: DateTime<Utc>,
) -> Vec<ScoredTask> {
    rank_with(&TaskScorer::for_name(strategy_name), tasks, limit, now)
}

pub fn suggestions(
    scorer: &TaskScorer,
    tasks: &[Task],
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<Suggestion> {
    rank_with(scorer, tasks, Some(limit), now)
        .into_iter()
        .map(Suggestion::from)
        .collect()
}
