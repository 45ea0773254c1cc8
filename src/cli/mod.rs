//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;
pub mod export;
pub mod report;

pub use entry::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
