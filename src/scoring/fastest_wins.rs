use crate::scoring::context::ScoringContext;
use crate::types::scoring::{clamp_score, Score};
use crate::types::task::Task;

pub fn fastest_wins_score(task: &Task, _ctx: &ScoringContext) -> Score {
    let base = 10.0 / task.effective_hours();
    let importance_factor = 0.3 + 0.7 * (f64::from(task.effective_importance()) / 10.0);
    clamp_score(base * importance_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ctx() -> ScoringContext {
        ScoringContext::new(&[], Utc::now())
    }

    #[test]
    fn half_hour_medium_importance_scores_thirteen() {
        let task = Task::new("quick").with_importance(5).with_hours(0.5);
        assert!((fastest_wins_score(&task, &ctx()) - 13.0).abs() < 1e-9);
    }

    #[test]
    fn lower_effort_beats_higher_importance() {
        let quick = Task::new("quick").with_importance(2).with_hours(0.5);
        let slow = Task::new("slow").with_importance(10).with_hours(8.0);
        assert!(fastest_wins_score(&quick, &ctx()) > fastest_wins_score(&slow, &ctx()));
    }

    #[test]
    fn zero_effort_is_floored_and_clamped() {
        let task = Task::new("instant").with_importance(10).with_hours(0.0);
        assert_eq!(fastest_wins_score(&task, &ctx()), 100.0);
    }
}
