use crate::scoring::context::ScoringContext;
use crate::types::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyBucket {
    Overdue,
    WithinDay,
    WithinThreeDays,
    WithinWeek,
    Later,
    NoDeadline,
}

impl UrgencyBucket {
    pub fn from_hours(hours_until_due: f64) -> Self {
        if hours_until_due <= 0.0 {
            UrgencyBucket::Overdue
        } else if hours_until_due <= 24.0 {
            UrgencyBucket::WithinDay
        } else if hours_until_due <= 72.0 {
            UrgencyBucket::WithinThreeDays
        } else if hours_until_due <= 168.0 {
            UrgencyBucket::WithinWeek
        } else {
            UrgencyBucket::Later
        }
    }
}

pub fn bucket(task: &Task, ctx: &ScoringContext) -> UrgencyBucket {
    match task.due_date {
        Some(due) => UrgencyBucket::from_hours(ctx.hours_until(due)),
        None => UrgencyBucket::NoDeadline,
    }
}
