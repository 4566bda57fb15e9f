use crate::types::scoring::Score;
use crate::types::task::Task;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    Critical,
    High,
    Medium,
}

impl PriorityTier {
    pub fn from_score(score: Score) -> Self {
        if score > 80.0 {
            PriorityTier::Critical
        } else if score > 60.0 {
            PriorityTier::High
        } else {
            PriorityTier::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::Critical => "critical",
            PriorityTier::High => "high",
            PriorityTier::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    pub score: Score,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub title: String,
    pub score: Score,
    pub explanation: String,
    pub priority: PriorityTier,
}

impl From<ScoredTask> for Suggestion {
    fn from(scored: ScoredTask) -> Self {
        Self {
            priority: PriorityTier::from_score(scored.score),
            title: scored.task.title,
            score: scored.score,
            explanation: scored.explanation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeReport {
    pub tasks: Vec<ScoredTask>,
    pub strategy: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestReport {
    pub suggestions: Vec<Suggestion>,
    pub strategy: String,
}

#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    Analyze(&'a AnalyzeReport),
    Suggest(&'a SuggestReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_thresholds_are_exclusive() {
        assert_eq!(PriorityTier::from_score(80.01), PriorityTier::Critical);
        assert_eq!(PriorityTier::from_score(80.0), PriorityTier::High);
        assert_eq!(PriorityTier::from_score(60.01), PriorityTier::High);
        assert_eq!(PriorityTier::from_score(60.0), PriorityTier::Medium);
        assert_eq!(PriorityTier::from_score(0.0), PriorityTier::Medium);
    }

    #[test]
    fn scored_task_serializes_flat() {
        let scored = ScoredTask {
            task: Task::new("Write docs").with_id(3),
            score: 41.5,
            explanation: "x".to_string(),
        };
        let json = serde_json::to_value(&scored).expect("scored task should serialize");
        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "Write docs");
        assert_eq!(json["score"], 41.5);
    }

    #[test]
    fn suggestion_priority_serializes_lowercase() {
        let suggestion = Suggestion {
            title: "t".to_string(),
            score: 83.0,
            explanation: "e".to_string(),
            priority: PriorityTier::Critical,
        };
        let json = serde_json::to_string(&suggestion).expect("suggestion should serialize");
        assert!(json.contains("\"priority\":\"critical\""));
    }
}
