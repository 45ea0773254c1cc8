//! Report CLI commands
//!
//! Implements CLI commands for viewing the monthly breakdown derived from
//! the stored ledger.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display;
use crate::error::MonthbookResult;
use crate::reports::ChartSeries;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Render the per-month grouped bar chart
    Chart,

    /// Print the raw aligned series
    Data,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> MonthbookResult<()> {
    let ledger = storage.ledger.ledger()?;
    let series = ChartSeries::from_ledger(&ledger)?;

    match cmd {
        ReportCommands::Chart => {
            print!(
                "{}",
                display::format_chart(&series, &settings.currency_symbol)
            );
        }

        ReportCommands::Data => {
            print!(
                "{}",
                display::format_series_data(&series, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
