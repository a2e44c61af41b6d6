//! CSV export of the array-backed store

use std::io::Write;

use crate::error::TrackerResult;
use crate::tracker::Tracker;

/// Export all transactions to CSV, in array order
pub fn export_transactions_csv<W: Write>(tracker: &Tracker, writer: W) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Date", "Type", "Category", "Amount", "Description"])?;

    for txn in tracker.snapshot_all() {
        csv_writer.write_record([
            txn.date().to_string(),
            txn.kind().to_string(),
            txn.category().to_string(),
            format!("{:.2}", txn.amount()),
            txn.description().to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;

    #[test]
    fn test_export_csv() {
        let mut tracker = Tracker::new();
        tracker.add_transaction(Transaction::new("2024-01-01", "Coffee, large", "Food", 'E', 4.5));
        tracker.add_transaction(Transaction::new("2024-01-02", "Salary", "Work", 'I', 2000.0));

        let mut buffer = Vec::new();
        export_transactions_csv(&tracker, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Date,Type,Category,Amount,Description");
        assert_eq!(lines[1], "2024-01-01,E,Food,4.50,\"Coffee, large\"");
        assert_eq!(lines[2], "2024-01-02,I,Work,2000.00,Salary");
    }

    #[test]
    fn test_export_empty_has_header_only() {
        let tracker = Tracker::new();
        let mut buffer = Vec::new();
        export_transactions_csv(&tracker, &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Date,Type,Category,Amount,Description\n"
        );
    }
}
