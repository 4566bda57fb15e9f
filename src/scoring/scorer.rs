use crate::scoring::{ScoringContext, Strategy};
use crate::types::scoring::Score;
use crate::types::task::Task;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, Default)]
pub struct TaskScorer {
    strategy: Strategy,
}

impl TaskScorer {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn for_name(name: Option<&str>) -> Self {
        Self::new(Strategy::resolve(name))
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn score(&self, task: &Task, ctx: &ScoringContext) -> Score {
        self.strategy.score(task, ctx)
    }

    // Raw inputs, not the clamped ones.
    pub fn explain(&self, task: &Task) -> String {
        format!(
            "{}: Importance {}/10, Effort {}h",
            self.strategy.label(),
            task.importance,
            task.estimated_hours
        )
    }
}

pub fn score(
    task: &Task,
    all_tasks: &[Task],
    strategy_name: Option<&str>,
    now: DateTime<Utc>,
) -> Score {
    let ctx = ScoringContext::new(all_tasks, now);
    TaskScorer::for_name(strategy_name).score(task, &ctx)
}
