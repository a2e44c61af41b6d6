//! Export functionality for the money tracker
//!
//! Supports exporting the ledger in:
//! - CSV format (transactions only)
//! - JSON format (transactions plus totals)

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_json, ExportTotals, LedgerExport};
