use crate::error::{Result, TaskRankError};
use crate::types::task::Task;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBatch {
    pub tasks: Vec<Task>,
    pub strategy: Option<String>,
}

#[derive(Deserialize)]
struct RequestBody {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    strategy: Option<String>,
}

// Bare array, or `{ "tasks": [...], "strategy": "..." }`.
pub fn parse_batch(content: &str) -> Result<TaskBatch> {
    let value = serde_json::from_str::<serde_json::Value>(content)?;
    match value {
        serde_json::Value::Array(_) => Ok(TaskBatch {
            tasks: serde_json::from_value(value).map_err(task_parse)?,
            strategy: None,
        }),
        serde_json::Value::Object(_) => {
            let body: RequestBody = serde_json::from_value(value).map_err(task_parse)?;
            Ok(TaskBatch {
                tasks: body.tasks,
                strategy: body.strategy,
            })
        }
        _ => Err(TaskRankError::TaskParse(
            "expected a JSON array of tasks or an object with a \"tasks\" field".to_string(),
        )),
    }
}

pub fn load_batch(path: &Path) -> Result<TaskBatch> {
    if !path.exists() {
        return Err(TaskRankError::TasksFileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let batch = parse_batch(&content)?;
    tracing::info!(path = %path.display(), tasks = batch.tasks.len(), "loaded tasks");
    Ok(batch)
}

fn task_parse(err: serde_json::Error) -> TaskRankError {
    TaskRankError::TaskParse(err.to_string())
}
