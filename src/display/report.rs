//! Report formatting utilities for terminal output
//!
//! Renders the monthly chart series as grouped text bars, one group per
//! stored record.

use crate::reports::ChartSeries;

/// Width of the bar column in characters
const BAR_WIDTH: usize = 30;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Render the chart series as grouped text bars
///
/// One group per record, in ledger order, with the four category rows the
/// chart draws: Savings, Extra Expenses, Needy Expenses, Remaining.
pub fn format_chart(series: &ChartSeries, currency: &str) -> String {
    let max = series.max_value();
    let mut out = String::new();

    for i in 0..series.len() {
        out.push_str(&series.labels[i]);
        out.push('\n');
        out.push_str(&separator(series.labels[i].chars().count()));
        out.push('\n');

        let rows = [
            ("Savings", series.savings[i]),
            ("Extra Expenses", series.extra[i]),
            ("Needy Expenses", series.expenses[i]),
            ("Remaining", series.remaining[i]),
        ];
        for (name, value) in rows {
            out.push_str(&format!(
                "  {:<14} {} {}{}\n",
                name,
                format_bar(value, max, BAR_WIDTH),
                currency,
                value
            ));
        }
        out.push('\n');
    }

    out
}

/// Print the raw aligned series, one line per record
pub fn format_series_data(series: &ChartSeries, currency: &str) -> String {
    let mut out = String::new();
    out.push_str("Month          Savings      Extra        Needy        Remaining\n");

    for i in 0..series.len() {
        out.push_str(&format!(
            "{:<14} {:<12} {:<12} {:<12} {}\n",
            series.labels[i],
            format!("{}{}", currency, series.savings[i]),
            format!("{}{}", currency, series.extra[i]),
            format!("{}{}", currency, series.expenses[i]),
            format!("{}{}", currency, series.remaining[i]),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinanceRecord, Ledger};

    fn series() -> ChartSeries {
        let ledger: Ledger = vec![FinanceRecord {
            income: 5000.0,
            expenses: 2000.0,
            extra: 500.0,
            savings: 1000.0,
            month: "March".to_string(),
            year: 2024,
        }]
        .into_iter()
        .collect();
        ChartSeries::from_ledger(&ledger).unwrap()
    }

    #[test]
    fn test_format_bar_scales_to_width() {
        assert_eq!(format_bar(10.0, 10.0, 4), "████");
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 4), "    ");
        assert_eq!(format_bar(5.0, 0.0, 4), "    ");
    }

    #[test]
    fn test_format_bar_clamps_overflow() {
        assert_eq!(format_bar(20.0, 10.0, 4), "████");
    }

    #[test]
    fn test_chart_contains_label_and_all_rows() {
        let text = format_chart(&series(), "₹");
        assert!(text.contains("March 2024"));
        assert!(text.contains("Savings"));
        assert!(text.contains("Extra Expenses"));
        assert!(text.contains("Needy Expenses"));
        assert!(text.contains("Remaining"));
        assert!(text.contains("₹1500"));
    }

    #[test]
    fn test_series_data_lists_every_record() {
        let text = format_series_data(&series(), "$");
        assert!(text.contains("March 2024"));
        assert!(text.contains("$1000"));
        assert!(text.contains("$1500"));
    }
}
