mod cli;

use chrono::{DateTime, Utc};
use clap::Parser;
use taskrank::analyze::validate::{validate_tasks, ValidationIssue};
use taskrank::analyze::{self, samples};
use taskrank::config;
use taskrank::error::TaskRankError;
use taskrank::input::{self, TaskBatch};
use taskrank::report::{self, OutputFormat};
use taskrank::scoring::Strategy;
use taskrank::types::config::TaskRankConfig;
use taskrank::types::report::Report;
use taskrank::types::task::{parse_due_date, Task};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_now(raw: Option<&str>) -> Result<DateTime<Utc>, TaskRankError> {
    match raw {
        Some(text) => parse_due_date(text)
            .ok_or_else(|| TaskRankError::TaskParse(format!("invalid --now timestamp: {text}"))),
        None => Ok(Utc::now()),
    }
}

// flag > tasks file > config
fn pick_strategy<'a>(
    flag: Option<&'a str>,
    batch: &'a TaskBatch,
    cfg: &'a TaskRankConfig,
) -> Option<&'a str> {
    flag.or(batch.strategy.as_deref())
        .or_else(|| cfg.default_strategy())
}

fn check_batch(tasks: &[Task], now: DateTime<Utc>, strict: bool) -> Result<(), TaskRankError> {
    let issues = validate_tasks(tasks, now);
    for issue in &issues {
        tracing::warn!(
            index = issue.index,
            title = %issue.title,
            field = issue.field,
            "{}",
            issue.message
        );
    }
    let errors = issues.iter().filter(|issue| issue.is_error()).count();
    if strict && errors > 0 {
        return Err(TaskRankError::Validation(format!(
            "{errors} invalid task field(s); run `taskrank validate` for details"
        )));
    }
    Ok(())
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn print_issue(issue: &ValidationIssue) {
    let level = if issue.is_error() { "ERROR" } else { "WARN" };
    println!(
        "[{}] task {} ({}) {}: {}",
        level, issue.index, issue.title, issue.field, issue.message
    );
}

fn run() -> Result<i32, TaskRankError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd, cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let now = resolve_now(cmd.now.as_deref())?;
            let batch = input::load_batch(&cmd.tasks_file)?;
            check_batch(&batch.tasks, now, cfg.strict_validation())?;

            let strategy = pick_strategy(cmd.strategy.as_deref(), &batch, &cfg);
            let limit = cmd.limit.or_else(|| cfg.analyze_limit());
            let analysis = analyze::analyze(&batch.tasks, strategy, limit, now)?;

            let rendered = report::render(Report::Analyze(&analysis), output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Suggest(cmd) => {
            let now = resolve_now(cmd.now.as_deref())?;
            let batch = match cmd.tasks_file.as_deref() {
                Some(path) => {
                    let batch = input::load_batch(path)?;
                    check_batch(&batch.tasks, now, cfg.strict_validation())?;
                    batch
                }
                None => TaskBatch {
                    tasks: samples::sample_tasks(now),
                    strategy: None,
                },
            };

            let strategy = pick_strategy(cmd.strategy.as_deref(), &batch, &cfg);
            let limit = cmd.limit.unwrap_or_else(|| cfg.suggestion_limit());
            let suggestions = analyze::suggest(&batch.tasks, strategy, limit, now);

            let rendered =
                report::render(Report::Suggest(&suggestions), output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let now = resolve_now(cmd.now.as_deref())?;
            let batch = input::load_batch(&cmd.tasks_file)?;
            let issues = validate_tasks(&batch.tasks, now);

            if issues.is_empty() {
                println!("validate: {} tasks, no issues", batch.tasks.len());
                return Ok(exit_code::SUCCESS);
            }
            for issue in &issues {
                print_issue(issue);
            }

            if issues.iter().any(ValidationIssue::is_error) {
                Ok(exit_code::INVALID)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Strategies => {
            let default = Strategy::resolve(cfg.default_strategy());
            for strategy in Strategy::ALL {
                let marker = if strategy == default { " (default)" } else { "" };
                println!("{:<16} {}{}", strategy.name(), strategy.label(), marker);
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e @ TaskRankError::Validation(_)) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::INVALID);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
