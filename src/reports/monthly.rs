//! Monthly breakdown report
//!
//! Aggregates the ledger into aligned per-month series for chart display:
//! one data point per stored record, in ledger order, with the remaining
//! balance recomputed rather than read from storage.

use crate::error::{MonthbookError, MonthbookResult};
use crate::models::Ledger;

/// Aligned series derived from a ledger, ready for a grouped bar chart
///
/// All five vectors have the same length: one element per record, in
/// insertion order. Repeated months produce repeated labels; records are
/// never bucketed or merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// "{month} {year}" per record
    pub labels: Vec<String>,
    /// Savings per record
    pub savings: Vec<f64>,
    /// Extra (discretionary) expenses per record
    pub extra: Vec<f64>,
    /// Needy expenses per record
    pub expenses: Vec<f64>,
    /// Recomputed remaining balance per record
    pub remaining: Vec<f64>,
}

impl ChartSeries {
    /// Build the chart series from a ledger
    ///
    /// Fails with `NoData` on an empty ledger; callers surface that rather
    /// than rendering an empty chart.
    pub fn from_ledger(ledger: &Ledger) -> MonthbookResult<Self> {
        if ledger.is_empty() {
            return Err(MonthbookError::NoData);
        }

        let records = ledger.records();

        Ok(Self {
            labels: records.iter().map(|r| r.label()).collect(),
            savings: records.iter().map(|r| r.savings).collect(),
            extra: records.iter().map(|r| r.extra).collect(),
            expenses: records.iter().map(|r| r.expenses).collect(),
            remaining: records.iter().map(|r| r.remaining()).collect(),
        })
    }

    /// Number of data points (one per record)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series holds no data points
    ///
    /// Cannot be true for a series built by `from_ledger`.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest value across all four numeric series, for bar scaling
    pub fn max_value(&self) -> f64 {
        self.savings
            .iter()
            .chain(&self.extra)
            .chain(&self.expenses)
            .chain(&self.remaining)
            .fold(0.0_f64, |max, &v| max.max(v))
    }
}
