pub mod context;
pub mod deadline_driven;
pub mod fastest_wins;
pub mod high_impact;
pub mod scorer;
pub mod smart_balance;
pub mod urgency;

pub use context::ScoringContext;
pub use scorer::TaskScorer;

use crate::types::scoring::Score;
use crate::types::task::Task;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    FastestWins,
    HighImpact,
    DeadlineDriven,
    #[default]
    SmartBalance,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
        Strategy::SmartBalance,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
    }

    // Unknown or absent names fall back to smart_balance.
    pub fn resolve(name: Option<&str>) -> Self {
        match name {
            Some(requested) => Self::from_name(requested).unwrap_or_else(|| {
                tracing::debug!(requested, "unknown strategy, falling back to smart_balance");
                Strategy::SmartBalance
            }),
            None => Strategy::SmartBalance,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
            Strategy::SmartBalance => "smart_balance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::FastestWins => "Quick wins strategy",
            Strategy::HighImpact => "High impact focus",
            Strategy::DeadlineDriven => "Deadline driven",
            Strategy::SmartBalance => "Smart balanced approach",
        }
    }

    pub fn score(&self, task: &Task, ctx: &ScoringContext) -> Score {
        match self {
            Strategy::FastestWins => fastest_wins::fastest_wins_score(task, ctx),
            Strategy::HighImpact => high_impact::high_impact_score(task, ctx),
            Strategy::DeadlineDriven => deadline_driven::deadline_driven_score(task, ctx),
            Strategy::SmartBalance => smart_balance::smart_balance_score(task, ctx),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
