//! CLI command handlers
//!
//! This module contains the interactive menu and the non-interactive
//! commands, bridging clap argument parsing with the tracker.

pub mod ledger;
pub mod menu;

pub use ledger::{handle_ledger_command, ExportFormat, LedgerCommands, SortDirection};
pub use menu::Menu;
