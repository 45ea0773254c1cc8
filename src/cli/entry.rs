//! Entry CLI commands
//!
//! Implements CLI commands for recording monthly figures and previewing
//! the remaining balance.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display;
use crate::error::MonthbookResult;
use crate::services::EntryService;
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record this month's figures
    Add {
        /// Monthly income
        income: String,
        /// Needy (essential) expenses
        expenses: String,
        /// Extra (discretionary) expenses
        extra: String,
        /// Amount put into savings
        savings: String,
    },

    /// Preview the remaining balance without saving
    ///
    /// Lenient: blank or unparseable fields count as zero, and the result
    /// may be negative.
    Preview {
        /// Monthly income
        #[arg(default_value = "")]
        income: String,
        /// Needy (essential) expenses
        #[arg(default_value = "")]
        expenses: String,
        /// Extra (discretionary) expenses
        #[arg(default_value = "")]
        extra: String,
        /// Amount put into savings
        #[arg(default_value = "")]
        savings: String,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> MonthbookResult<()> {
    let entry_service = EntryService::new(storage);

    match cmd {
        EntryCommands::Add {
            income,
            expenses,
            extra,
            savings,
        } => {
            let record = entry_service.add_entry(&income, &expenses, &extra, &savings)?;
            println!(
                "{}",
                display::format_saved_record(&record, &settings.currency_symbol)
            );
        }

        EntryCommands::Preview {
            income,
            expenses,
            extra,
            savings,
        } => {
            let remaining = entry_service.preview_remaining(&income, &expenses, &extra, &savings);
            println!(
                "Remaining: {}",
                display::format_amount(remaining, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
