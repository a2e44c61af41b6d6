//! Non-interactive ledger commands
//!
//! Each command loads a ledger file into a fresh tracker and reports on it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::{format_totals, format_transaction_register};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_json, export_transactions_csv};
use crate::tracker::{SortOrder, Tracker};

/// Sort direction for the list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl From<SortDirection> for SortOrder {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => SortOrder::Ascending,
            SortDirection::Desc => SortOrder::Descending,
        }
    }
}

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (transactions and totals)
    Json,
}

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Show income, expense and net totals for a ledger file
    Summary {
        /// Ledger file path
        file: PathBuf,
    },

    /// List transactions in a ledger file
    List {
        /// Ledger file path
        file: PathBuf,
        /// Only show this category (exact match)
        #[arg(short, long)]
        category: Option<String>,
        /// Only show this type flag (I or E)
        #[arg(short, long)]
        kind: Option<char>,
        /// Merge sort by amount and list in sorted order
        #[arg(short, long, value_enum)]
        sort: Option<SortDirection>,
    },

    /// Export a ledger file to CSV or JSON
    Export {
        /// Ledger file path
        file: PathBuf,
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle a ledger command, writing the report to `out`
pub fn handle_ledger_command<W: Write>(
    settings: &Settings,
    cmd: LedgerCommands,
    out: &mut W,
) -> TrackerResult<()> {
    match cmd {
        LedgerCommands::Summary { file } => {
            let tracker = load(&file, out)?;
            writeln!(out, "Ledger: {}", file.display())?;
            writeln!(out, "Transactions: {}", tracker.array_len())?;
            write!(out, "{}", format_totals(&tracker, &settings.currency_symbol))?;
        }

        LedgerCommands::List {
            file,
            category,
            kind,
            sort,
        } => {
            let mut tracker = load(&file, out)?;

            let mut rows = match sort {
                Some(direction) => {
                    tracker.sort_list_by_amount(direction.into());
                    tracker.list_snapshot()
                }
                None => tracker.snapshot_all(),
            };
            if let Some(category) = &category {
                rows.retain(|t| t.category() == category);
            }
            if let Some(kind) = kind {
                rows.retain(|t| t.kind() == kind);
            }

            write!(
                out,
                "{}",
                format_transaction_register(&rows, &settings.currency_symbol)
            )?;
            writeln!(out, "\nShowing {} transactions", rows.len())?;
        }

        LedgerCommands::Export {
            file,
            output,
            format,
            pretty,
        } => {
            let tracker = load(&file, out)?;

            let handle = File::create(&output).map_err(|e| {
                TrackerError::Export(format!("Failed to create {}: {}", output.display(), e))
            })?;
            let mut writer = BufWriter::new(handle);

            match format {
                ExportFormat::Csv => export_transactions_csv(&tracker, &mut writer)?,
                ExportFormat::Json => export_json(&tracker, &mut writer, pretty)?,
            }
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))?;

            writeln!(
                out,
                "Exported {} transactions to {}",
                tracker.array_len(),
                output.display()
            )?;
        }
    }

    Ok(())
}

/// Load a ledger into a fresh tracker, noting a truncated read
fn load<W: Write>(file: &Path, out: &mut W) -> TrackerResult<Tracker> {
    let mut tracker = Tracker::new();
    let report = tracker.load_from_file(file)?;
    if let Some(line) = report.stopped_at {
        writeln!(
            out,
            "Warning: stopped at malformed line {} ({} transactions loaded)",
            line, report.loaded
        )?;
    }
    Ok(tracker)
}
