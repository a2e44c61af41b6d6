use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use money_tracker::cli::{handle_ledger_command, LedgerCommands, Menu};
use money_tracker::config::{paths::TrackerPaths, settings::Settings};
use money_tracker::Tracker;

#[derive(Parser)]
#[command(
    name = "tracker",
    version,
    about = "Terminal-based personal income and expense tracker",
    long_about = "Money Tracker records income and expense transactions, searches \
                  and sorts them, reports totals and saves them to a plain text \
                  ledger file. Run without a command for the interactive menu."
)]
struct Cli {
    /// Ledger file to load before opening the interactive menu
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.file.is_some() && matches!(cli.command, Some(Commands::Ledger(_) | Commands::Config)) {
        bail!("--file only applies to the interactive menu; pass the ledger path to the command instead");
    }

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings, cli.verbose);

    if !paths.settings_file().exists() {
        settings.save(&paths)?;
        tracing::debug!(path = %paths.settings_file().display(), "Wrote default settings");
    }

    match cli.command {
        None | Some(Commands::Menu) => run_menu(&paths, &settings, cli.file)?,
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&settings, cmd, &mut io::stdout().lock())?;
        }
        Some(Commands::Config) => {
            println!("Money Tracker Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", settings.ledger_file(&paths).display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}

fn run_menu(paths: &TrackerPaths, settings: &Settings, preload: Option<PathBuf>) -> Result<()> {
    let mut tracker = Tracker::new();

    if let Some(file) = preload {
        let report = tracker.load_from_file(&file)?;
        println!("Loaded {} transactions from {}", report.loaded, file.display());
    }

    let stdin = io::stdin();
    let mut menu = Menu::new(
        stdin.lock(),
        io::stdout(),
        settings.currency_symbol.clone(),
        settings.ledger_file(paths),
    );
    menu.run(&mut tracker)?;

    Ok(())
}

fn init_logging(settings: &Settings, verbose: bool) {
    let default_level = if verbose { "debug" } else { settings.log_level.as_str() };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
