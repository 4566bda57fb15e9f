use crate::types::report::Report;

pub fn to_json(report: Report<'_>) -> Result<String, serde_json::Error> {
    match report {
        Report::Analyze(analyze) => serde_json::to_string_pretty(analyze),
        Report::Suggest(suggest) => serde_json::to_string_pretty(suggest),
    }
}
