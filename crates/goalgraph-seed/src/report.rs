//! Console rendering for report rows.

use goalgraph_graph::GoalDeadline;

use crate::error::Result;

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One `User: .. | Goal: .. | Deadline: ..` line per row.
    #[default]
    Lines,
    /// A JSON array of rows.
    Json,
}

pub fn format_row(row: &GoalDeadline) -> String {
    format!(
        "User: {} | Goal: {} | Deadline: {}",
        row.user, row.goal, row.deadline
    )
}

/// Render all rows; the result has no trailing newline.
pub fn render(rows: &[GoalDeadline], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Lines => Ok(rows.iter().map(format_row).collect::<Vec<_>>().join("\n")),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}
