use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "taskrank",
    version,
    about = "Task priority scoring and ranking CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./taskrank.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank every task in a file
    Analyze(AnalyzeCommand),
    /// Show the top tasks with a priority tier
    Suggest(SuggestCommand),
    /// Check tasks against the input rules without scoring them
    Validate(ValidateCommand),
    /// List the available scoring strategies
    Strategies,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub tasks_file: PathBuf,
    /// fastest_wins, high_impact, deadline_driven or smart_balance
    #[arg(short, long)]
    pub strategy: Option<String>,
    #[arg(long)]
    pub limit: Option<usize>,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
    /// Reference time (RFC 3339) used for deadline urgency
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct SuggestCommand {
    /// Tasks to pick from; the built-in sample set is used when omitted
    pub tasks_file: Option<PathBuf>,
    #[arg(short, long)]
    pub strategy: Option<String>,
    #[arg(long)]
    pub limit: Option<usize>,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub tasks_file: PathBuf,
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
