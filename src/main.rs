use anyhow::Result;
use clap::{Parser, Subcommand};

use monthbook::cli::{
    handle_entry_command, handle_export_command, handle_report_command, EntryCommands,
    ExportCommands, ReportCommands,
};
use monthbook::config::{paths::MonthbookPaths, settings::Settings};
use monthbook::display;
use monthbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "monthbook",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based monthly finance ledger with local analytics",
    long_about = "monthbook records one set of income/expense figures per month \
                  into a local per-user ledger, previews the remaining balance \
                  live, and renders a per-month breakdown of the stored history."
)]
struct Cli {
    /// Email of the active user (ledgers are namespaced per user)
    #[arg(short, long, global = true, env = "MONTHBOOK_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly entry commands
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Monthly breakdown reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export commands
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show the stored profile
    Profile,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = MonthbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Commands::Config = cli.command {
        println!("Base directory: {}", paths.base_dir().display());
        println!("Data directory: {}", paths.data_dir().display());
        println!("Settings file:  {}", paths.settings_file().display());
        println!("Currency:       {}", settings.currency_symbol);
        if let Some(user) = &cli.user {
            println!("Ledger file:    {}", paths.ledger_file(user).display());
        }
        return Ok(());
    }

    // Every other command operates on one user's data; refuse to run
    // without an injected identity.
    let user = cli.user.ok_or_else(|| {
        anyhow::anyhow!("No user set; pass --user <EMAIL> or set MONTHBOOK_USER")
    })?;

    let storage = Storage::for_user(paths, user)?;
    storage.load()?;

    match cli.command {
        Commands::Entry(cmd) => handle_entry_command(&storage, &settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd)?,
        Commands::Export(cmd) => handle_export_command(&storage, cmd)?,
        Commands::Profile => {
            let profile = storage.profile.load()?;
            println!("{}", display::format_profile(&profile));
        }
        Commands::Config => unreachable!("handled above"),
    }

    Ok(())
}
