//! JSON export of the array-backed store plus totals

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;
use crate::tracker::Tracker;

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions in array order
    pub transactions: Vec<Transaction>,

    /// Aggregates at export time
    pub totals: ExportTotals,
}

/// Income, expense and net totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportTotals {
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

impl LedgerExport {
    /// Build an export snapshot from a tracker
    pub fn from_tracker(tracker: &Tracker) -> Self {
        Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: tracker.snapshot_all(),
            totals: ExportTotals {
                income: tracker.total_income(),
                expenses: tracker.total_expenses(),
                net: tracker.net_balance(),
            },
        }
    }
}

/// Export the ledger as JSON
pub fn export_json<W: Write>(tracker: &Tracker, writer: &mut W, pretty: bool) -> TrackerResult<()> {
    let export = LedgerExport::from_tracker(tracker);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_json() {
        let mut tracker = Tracker::new();
        tracker.add_transaction(Transaction::new("2024-01-01", "Coffee", "Food", 'E', 4.5));
        tracker.add_transaction(Transaction::new("2024-01-02", "Salary", "Work", 'I', 2000.0));

        let mut buffer = Vec::new();
        export_json(&tracker, &mut buffer, false).unwrap();

        let export: LedgerExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(export.transactions, tracker.snapshot_all());
        assert_eq!(
            export.totals,
            ExportTotals {
                income: 2000.0,
                expenses: 4.5,
                net: 1995.5
            }
        );
    }

    #[test]
    fn test_export_json_pretty() {
        let tracker = Tracker::new();
        let mut buffer = Vec::new();
        export_json(&tracker, &mut buffer, true).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\n  \"app_version\""));
        assert!(output.contains("\"transactions\": []"));
    }
}
