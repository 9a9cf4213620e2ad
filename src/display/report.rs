//! Summary report rendering
//!
//! Turns a [`TransactionSummary`] into a terminal table or a horizontal bar
//! chart. The report itself only carries (bucket, sum) pairs; all rendering
//! decisions live here.

use crate::reports::TransactionSummary;

/// Widest bar drawn for the largest bucket
const CHART_WIDTH: usize = 40;

/// Format a summary as a two-column table
pub fn format_summary_table(summary: &TransactionSummary) -> String {
    if summary.is_empty() {
        return format!("No {} transactions found.\n", summary.kind.to_string().to_lowercase());
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{} per {} period\n",
        summary.kind, summary.frequency
    ));
    output.push_str(&format!("{:10} {:>12}\n", "Period", "Amount"));
    output.push_str(&"-".repeat(23));
    output.push('\n');

    for point in &summary.points {
        output.push_str(&format!(
            "{} {:>12}\n",
            point.period_end.format("%Y-%m-%d"),
            point.total.to_string()
        ));
    }

    output.push_str(&"-".repeat(23));
    output.push('\n');
    output.push_str(&format!("{:10} {:>12}\n", "Total", summary.total().to_string()));

    output
}

/// Format a summary as a horizontal bar chart
///
/// Bars are scaled so the largest bucket spans [`CHART_WIDTH`] characters;
/// non-zero buckets always get at least one bar character.
pub fn format_summary_chart(summary: &TransactionSummary) -> String {
    let Some(peak) = summary.peak().filter(|p| p.is_positive()) else {
        return format_summary_table(summary);
    };

    let mut output = String::new();
    output.push_str(&format!("{} over time\n\n", summary.kind));

    for point in &summary.points {
        let scaled = (point.total.cents() * CHART_WIDTH as i64) / peak.cents();
        let width = if point.total.is_positive() {
            (scaled.max(1)) as usize
        } else {
            0
        };
        output.push_str(&format!(
            "{} | {:<width$} {}\n",
            point.period_end.format("%Y-%m-%d"),
            "█".repeat(width),
            point.total,
            width = CHART_WIDTH
        ));
    }

    output
}
