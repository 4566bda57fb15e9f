use crate::analyze::DEFAULT_SUGGESTION_LIMIT;
use crate::error::TaskRankError;
use crate::scoring::Strategy;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskRankConfig {
    pub scoring: Option<ScoringConfig>,
    pub suggest: Option<SuggestConfig>,
    pub analyze: Option<AnalyzeConfig>,
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub strategy: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeConfig {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub strict: bool,
}

impl TaskRankConfig {
    pub fn default_strategy(&self) -> Option<&str> {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.strategy.as_deref())
    }

    pub fn suggestion_limit(&self) -> usize {
        self.suggest
            .as_ref()
            .and_then(|suggest| suggest.limit)
            .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
    }

    pub fn analyze_limit(&self) -> Option<usize> {
        self.analyze.as_ref().and_then(|analyze| analyze.limit)
    }

    pub fn strict_validation(&self) -> bool {
        self.validation
            .as_ref()
            .map(|validation| validation.strict)
            .unwrap_or(false)
    }

    pub fn validate(&self) -> Result<(), TaskRankError> {
        if let Some(name) = self.default_strategy() {
            if Strategy::from_name(name).is_none() {
                let known = Strategy::ALL
                    .iter()
                    .map(|strategy| strategy.name())
                    .collect::<Vec<_>>();
                return Err(TaskRankError::ConfigParse(format!(
                    "scoring.strategy must be one of {} (found {name})",
                    known.join(", ")
                )));
            }
        }

        if self.suggest.as_ref().and_then(|suggest| suggest.limit) == Some(0) {
            return Err(TaskRankError::ConfigParse(
                "suggest.limit must be greater than 0".to_string(),
            ));
        }
        if self.analyze_limit() == Some(0) {
            return Err(TaskRankError::ConfigParse(
                "analyze.limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
