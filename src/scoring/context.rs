use crate::types::task::{Task, TaskId};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// One `now` reading plus dependents-per-id, built once per batch.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    now: DateTime<Utc>,
    dependents: HashMap<TaskId, usize>,
}

impl ScoringContext {
    pub fn new(all_tasks: &[Task], now: DateTime<Utc>) -> Self {
        let mut dependents = HashMap::<TaskId, usize>::new();
        for task in all_tasks {
            let unique = task.dependencies.iter().collect::<HashSet<_>>();
            for dependency in unique {
                *dependents.entry(dependency.clone()).or_insert(0) += 1;
            }
        }
        Self { now, dependents }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn dependents_of(&self, id: &TaskId) -> usize {
        self.dependents.get(id).copied().unwrap_or(0)
    }

    // Negative once the due date has passed.
    pub fn hours_until(&self, due: DateTime<Utc>) -> f64 {
        let remaining = due.signed_duration_since(self.now);
        match remaining.num_microseconds() {
            Some(micros) => micros as f64 / 3_600_000_000.0,
            None => remaining.num_milliseconds() as f64 / 3_600_000.0,
        }
    }
}
