use crate::types::task::Task;
use chrono::{DateTime, Duration, Utc};

pub fn sample_tasks(now: DateTime<Utc>) -> Vec<Task> {
    vec![
        Task::new("Fix critical bug")
            .with_importance(9)
            .with_hours(2.0)
            .with_due_date(now + Duration::hours(12)),
        Task::new("Complete project")
            .with_importance(8)
            .with_hours(4.0)
            .with_due_date(now + Duration::days(2)),
        Task::new("Write documentation")
            .with_importance(6)
            .with_hours(3.0)
            .with_due_date(now + Duration::days(7)),
    ]
}
