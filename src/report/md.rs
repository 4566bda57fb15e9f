use crate::types::report::{AnalyzeReport, Report, SuggestReport};

pub fn to_markdown(report: Report<'_>) -> String {
    match report {
        Report::Analyze(analyze) => analyze_markdown(analyze),
        Report::Suggest(suggest) => suggest_markdown(suggest),
    }
}

fn analyze_markdown(report: &AnalyzeReport) -> String {
    let mut output = String::new();
    output.push_str("# Task Analysis\n\n");
    output.push_str(&format!("Strategy: {}\n\n", report.strategy));
    output.push_str(&format!("{}\n\n", report.message));
    output.push_str("## Ranked Tasks\n\n");
    for (rank, scored) in report.tasks.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} ({:.2})",
            rank + 1,
            display_title(&scored.task.title),
            scored.score
        ));
        if let Some(due) = scored.task.due_date {
            output.push_str(&format!(", due {}", due.format("%Y-%m-%d %H:%M UTC")));
        }
        output.push_str(&format!("\n   {}\n", scored.explanation));
    }
    output
}

fn suggest_markdown(report: &SuggestReport) -> String {
    let mut output = String::new();
    output.push_str("# Suggestions\n\n");
    output.push_str(&format!("Strategy: {}\n\n", report.strategy));
    if report.suggestions.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for suggestion in &report.suggestions {
        output.push_str(&format!(
            "- [{}] {} ({:.2}): {}\n",
            suggestion.priority.as_str(),
            display_title(&suggestion.title),
            suggestion.score,
            suggestion.explanation
        ));
    }
    output
}

fn display_title(title: &str) -> &str {
    if title.trim().is_empty() {
        "(untitled)"
    } else {
        title
    }
}
