//! CLI commands for data export
//!
//! Provides commands for exporting the ledger to spreadsheet-compatible
//! formats.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{MonthbookError, MonthbookResult};
use crate::export::export_ledger_csv;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the ledger to CSV
    Ledger {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> MonthbookResult<()> {
    match cmd {
        ExportCommands::Ledger { output } => {
            let ledger = storage.ledger.ledger()?;

            let file = File::create(&output).map_err(|e| {
                MonthbookError::Export(format!("Failed to create {}: {}", output.display(), e))
            })?;
            export_ledger_csv(&ledger, BufWriter::new(file))?;

            println!(
                "Exported {} record(s) to {}",
                ledger.len(),
                output.display()
            );
        }
    }

    Ok(())
}
