//! Transaction display formatting
//!
//! Plain one-line-per-record listings for the interactive menu and a
//! column-aligned register for the `list` command.

use crate::models::Transaction;

/// Format one record as `date | type | category | amount | description`
pub fn format_transaction_line(txn: &Transaction, currency_symbol: &str) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        txn.date(),
        txn.kind(),
        txn.category(),
        format_amount(txn.amount(), currency_symbol),
        txn.description()
    )
}

/// Format transactions one per line
pub fn format_transaction_list(transactions: &[Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions to display.\n".to_string();
    }

    let mut output = String::new();
    for txn in transactions {
        output.push_str(&format_transaction_line(txn, currency_symbol));
        output.push('\n');
    }
    output
}

/// Format a single register row
pub fn format_transaction_row(txn: &Transaction, currency_symbol: &str) -> String {
    format!(
        "{:10} {:^4} {:15} {:>12} {}",
        txn.date(),
        txn.kind(),
        truncate(txn.category(), 15),
        format_amount(txn.amount(), currency_symbol),
        txn.description()
    )
}

/// Format transactions as a column-aligned register with a header
pub fn format_transaction_register(transactions: &[Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:4} {:15} {:>12} {}\n",
        "Date", "Type", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency_symbol));
        output.push('\n');
    }

    output
}

/// Format an amount with two decimals, sign ahead of the currency symbol
pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency_symbol, -amount)
    } else {
        format!("{}{:.2}", currency_symbol, amount)
    }
}

/// Pad or truncate a string to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> Transaction {
        Transaction::new("2024-01-01", "Coffee", "Food", 'E', 4.5)
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_transaction_list(&[], "$"), "No transactions to display.\n");
    }

    #[test]
    fn test_format_list() {
        let formatted = format_transaction_list(&[coffee()], "$");
        assert_eq!(formatted, "2024-01-01 | E | Food | $4.50 | Coffee\n");
    }

    #[test]
    fn test_format_list_uses_currency_symbol() {
        let formatted = format_transaction_list(&[coffee()], "€");
        assert_eq!(formatted, "2024-01-01 | E | Food | €4.50 | Coffee\n");
        assert!(!formatted.contains('$'));
    }

    #[test]
    fn test_format_register() {
        let formatted = format_transaction_register(&[coffee()], "$");
        assert!(formatted.starts_with("Date"));
        assert!(formatted.contains("2024-01-01"));
        assert!(formatted.contains("$4.50"));
        assert!(formatted.contains("Coffee"));
    }

    #[test]
    fn test_format_empty_register() {
        assert!(format_transaction_register(&[], "$").contains("No transactions found"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1995.5, "$"), "$1995.50");
        assert_eq!(format_amount(-4.5, "€"), "-€4.50");
        assert_eq!(format_amount(0.0, "$"), "$0.00");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long category", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }
}
