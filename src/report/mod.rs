pub mod json;
pub mod md;

use crate::error::TaskRankError;
use crate::types::report::Report;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: Report<'_>, format: OutputFormat) -> Result<String, TaskRankError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(TaskRankError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
