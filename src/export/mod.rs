//! Export module for monthbook
//!
//! Provides CSV export of a user's ledger, spreadsheet-compatible, with
//! the remaining balance recomputed per row.

use std::io::Write;

use crate::error::{MonthbookError, MonthbookResult};
use crate::models::Ledger;

/// Export the ledger to CSV, one row per record in insertion order
pub fn export_ledger_csv<W: Write>(ledger: &Ledger, writer: W) -> MonthbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Month",
            "Year",
            "Income",
            "Needy Expenses",
            "Extra Expenses",
            "Savings",
            "Remaining",
        ])
        .map_err(|e| MonthbookError::Export(e.to_string()))?;

    for record in ledger.records() {
        csv_writer
            .write_record([
                record.month.clone(),
                record.year.to_string(),
                format!("{:.2}", record.income),
                format!("{:.2}", record.expenses),
                format!("{:.2}", record.extra),
                format!("{:.2}", record.savings),
                format!("{:.2}", record.remaining()),
            ])
            .map_err(|e| MonthbookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| MonthbookError::Export(e.to_string()))?;

    Ok(())
}
