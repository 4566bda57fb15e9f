use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskRankError {
    #[error("at least one task is required")]
    NoTasks,

    #[error("tasks file not found: {0}")]
    TasksFileNotFound(String),

    #[error("task parse error: {0}")]
    TaskParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskRankError>;
