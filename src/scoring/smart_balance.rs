use crate::scoring::context::ScoringContext;
use crate::scoring::urgency::{bucket, UrgencyBucket};
use crate::types::scoring::{clamp_score, Score};
use crate::types::task::Task;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmartBalanceBreakdown {
    pub importance: f64,
    pub urgency: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl SmartBalanceBreakdown {
    pub fn total(&self) -> Score {
        clamp_score(self.importance + self.urgency + self.effort + self.dependency)
    }
}

pub fn importance_points(importance: i32) -> f64 {
    match importance {
        i if i >= 9 => 40.0,
        i if i >= 7 => 32.0,
        i if i >= 5 => 24.0,
        i if i >= 3 => 16.0,
        _ => 8.0,
    }
}

pub fn urgency_points(bucket: UrgencyBucket) -> f64 {
    match bucket {
        UrgencyBucket::Overdue => 35.0,
        UrgencyBucket::WithinDay => 30.0,
        UrgencyBucket::WithinThreeDays => 22.0,
        UrgencyBucket::WithinWeek => 15.0,
        UrgencyBucket::Later => 8.0,
        UrgencyBucket::NoDeadline => 10.0,
    }
}

pub fn effort_points(hours: f64) -> f64 {
    if hours <= 1.0 {
        15.0
    } else if hours <= 4.0 {
        12.0
    } else if hours <= 8.0 {
        8.0
    } else if hours <= 16.0 {
        5.0
    } else {
        3.0
    }
}

pub fn dependency_points(task: &Task, ctx: &ScoringContext) -> f64 {
    let Some(id) = task.id.as_ref() else {
        return 3.0;
    };
    match ctx.dependents_of(id) {
        0 => 1.0,
        1 => 4.0,
        2 => 7.0,
        _ => 10.0,
    }
}

pub fn breakdown(task: &Task, ctx: &ScoringContext) -> SmartBalanceBreakdown {
    SmartBalanceBreakdown {
        importance: importance_points(task.effective_importance()),
        urgency: urgency_points(bucket(task, ctx)),
        effort: effort_points(task.effective_hours()),
        dependency: dependency_points(task, ctx),
    }
}

pub fn smart_balance_score(task: &Task, ctx: &ScoringContext) -> Score {
    breakdown(task, ctx).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 10, 14, 0, 0).unwrap()
    }

    #[test]
    fn urgent_important_task_scores_eighty_three() {
        let task = Task::new("Fix critical bug")
            .with_id(1)
            .with_importance(9)
            .with_hours(2.0)
            .with_due_date(now() + Duration::hours(12));
        let ctx = ScoringContext::new(std::slice::from_ref(&task), now());
        let parts = breakdown(&task, &ctx);
        assert_eq!(parts.importance, 40.0);
        assert_eq!(parts.urgency, 30.0);
        assert_eq!(parts.effort, 12.0);
        assert_eq!(parts.dependency, 1.0);
        assert_eq!(smart_balance_score(&task, &ctx), 83.0);
    }

    #[test]
    fn two_dependents_land_in_middle_tier() {
        let tasks = vec![
            Task::new("A").with_id("a"),
            Task::new("B").with_id("b").with_dependencies(["a"]),
            Task::new("C").with_id("c").with_dependencies(["a"]),
        ];
        let ctx = ScoringContext::new(&tasks, now());
        assert_eq!(dependency_points(&tasks[0], &ctx), 7.0);
        assert_eq!(dependency_points(&tasks[1], &ctx), 1.0);
    }

    #[test]
    fn dependency_tiers_cap_at_three_dependents() {
        let mut tasks = vec![Task::new("root").with_id(1)];
        for id in 2..=6 {
            tasks.push(Task::new("leaf").with_id(id).with_dependencies([1]));
        }
        let ctx = ScoringContext::new(&tasks, now());
        assert_eq!(dependency_points(&tasks[0], &ctx), 10.0);
    }

    #[test]
    fn missing_id_gets_fixed_dependency_points() {
        let task = Task::new("anonymous");
        let ctx = ScoringContext::new(std::slice::from_ref(&task), now());
        assert_eq!(dependency_points(&task, &ctx), 3.0);
    }

    #[test]
    fn importance_tiers_are_monotonic() {
        let ctx = ScoringContext::new(&[], now());
        let mut previous = 0.0;
        for importance in 1..=10 {
            let task = Task::new("t").with_importance(importance).with_hours(3.0);
            let score = smart_balance_score(&task, &ctx);
            assert!(score >= previous, "importance {importance} dropped the score");
            previous = score;
        }
    }

    #[test]
    fn effort_tier_boundaries() {
        assert_eq!(effort_points(0.1), 15.0);
        assert_eq!(effort_points(1.0), 15.0);
        assert_eq!(effort_points(4.0), 12.0);
        assert_eq!(effort_points(8.0), 8.0);
        assert_eq!(effort_points(16.0), 5.0);
        assert_eq!(effort_points(16.5), 3.0);
    }

    #[test]
    fn maximum_components_reach_one_hundred() {
        let mut tasks = vec![Task::new("hub")
            .with_id(1)
            .with_importance(10)
            .with_hours(0.5)
            .with_due_date(now() - Duration::hours(3))];
        for id in 2..=4 {
            tasks.push(Task::new("leaf").with_id(id).with_dependencies([1]));
        }
        let ctx = ScoringContext::new(&tasks, now());
        assert_eq!(smart_balance_score(&tasks[0], &ctx), 100.0);
    }
}
