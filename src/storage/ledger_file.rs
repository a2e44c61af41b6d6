//! Flat-file ledger format
//!
//! One record per line:
//!
//! ```text
//! <date> <type> <category> <amount:.2> <description>
//! ```
//!
//! `date`, `type` and `category` are single whitespace-free tokens; the
//! description is everything after the one delimiter that follows the
//! amount, spaces included.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

use super::file_io::write_text_atomic;

/// Records read from a ledger file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLedger {
    /// Records in file order, up to the first malformed line
    pub records: Vec<Transaction>,
    /// 1-based line number where parsing stopped, if it stopped early
    pub stopped_at: Option<usize>,
}

/// Render one transaction as a ledger line (without the line terminator)
pub fn format_record(txn: &Transaction) -> String {
    format!(
        "{} {} {} {:.2} {}",
        txn.date(),
        txn.kind(),
        txn.category(),
        txn.amount(),
        txn.description()
    )
}

/// Parse one ledger line. Returns `None` for a malformed line.
pub fn parse_record(line: &str) -> Option<Transaction> {
    let (date, rest) = next_token(line)?;
    let (kind, rest) = next_token(rest)?;
    let (category, rest) = next_token(rest)?;
    let (amount, rest) = next_token(rest)?;

    let mut kind_chars = kind.chars();
    let kind = match (kind_chars.next(), kind_chars.next()) {
        (Some(c), None) => c,
        _ => return None,
    };
    let amount: f64 = amount.parse().ok()?;

    // Exactly one delimiter separates the amount from the description
    let mut tail = rest.chars();
    tail.next();
    let description = tail.as_str();

    Some(Transaction::new(date, description, category, kind, amount))
}

/// Split off the next whitespace-delimited token, skipping leading whitespace
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    Some((&input[..end], &input[end..]))
}

/// Write transactions to a ledger file, one line each, replacing the file
pub fn write_ledger<'a, P, I>(path: P, transactions: I) -> TrackerResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut contents = String::new();
    for txn in transactions {
        contents.push_str(&format_record(txn));
        contents.push('\n');
    }
    write_text_atomic(path, &contents)
}

/// Read a ledger file.
///
/// Fails only if the file cannot be opened. Blank lines are skipped and the
/// first malformed or unreadable line ends the read.
pub fn read_ledger<P: AsRef<Path>>(path: P) -> TrackerResult<ParsedLedger> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    let mut parsed = ParsedLedger::default();

    for (line_num, line) in reader.lines().enumerate() {
        let record = match line {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => parse_record(&line),
            Err(_) => None,
        };

        match record {
            Some(txn) => parsed.records.push(txn),
            None => {
                parsed.stopped_at = Some(line_num + 1);
                break;
            }
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_record() {
        let txn = Transaction::new("2024-01-01", "Morning coffee", "Food", 'E', 4.5);
        assert_eq!(format_record(&txn), "2024-01-01 E Food 4.50 Morning coffee");
    }

    #[test]
    fn test_parse_record_keeps_inner_spaces() {
        let txn = parse_record("2024-01-01 E Food 4.50 Coffee  with   friends").unwrap();
        assert_eq!(txn.date(), "2024-01-01");
        assert_eq!(txn.kind(), 'E');
        assert_eq!(txn.category(), "Food");
        assert_eq!(txn.amount(), 4.5);
        assert_eq!(txn.description(), "Coffee  with   friends");
    }

    #[test]
    fn test_parse_record_drops_only_one_delimiter() {
        let txn = parse_record("2024-01-01 I Work 10.00  leading space").unwrap();
        assert_eq!(txn.description(), " leading space");
    }

    #[test]
    fn test_parse_record_without_description() {
        let txn = parse_record("2024-01-01 I Work 10.00").unwrap();
        assert_eq!(txn.description(), "");
        assert_eq!(txn.amount(), 10.0);
    }

    #[test]
    fn test_parse_record_negative_amount() {
        let txn = parse_record("2024-01-05 I Refunds -12.75 Returned shoes").unwrap();
        assert_eq!(txn.amount(), -12.75);
    }

    #[test]
    fn test_parse_malformed_records() {
        assert!(parse_record("2024-01-01 E Food").is_none());
        assert!(parse_record("2024-01-01 E Food lots Coffee").is_none());
        assert!(parse_record("2024-01-01 EX Food 4.50 Coffee").is_none());
        assert!(parse_record("").is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.txt");

        let records = vec![
            Transaction::new("2024-01-01", "Coffee", "Food", 'E', 4.5),
            Transaction::new("2024-01-02", "Monthly salary", "Work", 'I', 2000.0),
        ];
        write_ledger(&path, &records).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "2024-01-01 E Food 4.50 Coffee\n2024-01-02 I Work 2000.00 Monthly salary\n"
        );

        let parsed = read_ledger(&path).unwrap();
        assert_eq!(parsed.records, records);
        assert_eq!(parsed.stopped_at, None);
    }

    #[test]
    fn test_empty_ledger_is_zero_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");

        write_ledger(&path, &Vec::new()).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);

        let parsed = read_ledger(&path).unwrap();
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_read_stops_at_malformed_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.txt");
        fs::write(
            &path,
            "2024-01-01 E Food 4.50 Coffee\n\nbroken line\n2024-01-03 E Food 3.00 Tea\n",
        )
        .unwrap();

        let parsed = read_ledger(&path).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.stopped_at, Some(3));
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_ledger(temp_dir.path().join("missing.txt"));
        assert!(matches!(result, Err(TrackerError::Storage(_))));
    }
}
