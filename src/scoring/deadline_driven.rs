use crate::scoring::context::ScoringContext;
use crate::scoring::urgency::{bucket, UrgencyBucket};
use crate::types::scoring::{clamp_score, Score};
use crate::types::task::Task;

fn urgency_points(bucket: UrgencyBucket) -> f64 {
    match bucket {
        UrgencyBucket::Overdue => 100.0,
        UrgencyBucket::WithinDay => 80.0,
        UrgencyBucket::WithinThreeDays => 60.0,
        UrgencyBucket::WithinWeek => 40.0,
        UrgencyBucket::Later => 20.0,
        UrgencyBucket::NoDeadline => 30.0,
    }
}

pub fn deadline_driven_score(task: &Task, ctx: &ScoringContext) -> Score {
    let urgency = urgency_points(bucket(task, ctx));
    let importance_modifier = 0.5 + f64::from(task.effective_importance()) / 20.0;
    clamp_score(urgency * importance_modifier)
}
