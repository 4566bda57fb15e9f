use crate::scoring::context::ScoringContext;
use crate::types::scoring::{clamp_score, Score};
use crate::types::task::Task;

pub fn high_impact_score(task: &Task, _ctx: &ScoringContext) -> Score {
    let importance = f64::from(task.effective_importance());
    let base = importance.powi(2) / 1.5;
    let effort_penalty = 1.0 / (task.effective_hours().max(1.0) + 1.0).ln();
    clamp_score(base * effort_penalty)
}
