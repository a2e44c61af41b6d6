//! Interactive numbered menu
//!
//! Each menu item maps to a single tracker operation followed by an echo of
//! the result. The menu reads from any `BufRead` and writes to any `Write`,
//! so it can be driven by stdin/stdout or by a test buffer.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::warn;

use crate::display::{format_totals, format_transaction_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;
use crate::tracker::{SortOrder, Tracker};

const MENU: &str = "\
1. Add transaction
2. Remove transaction by description
3. Show all transactions
4. Find transactions by category
5. Find transactions by type (I/E)
6. Sort by amount (linked list)
7. Show totals
8. Undo history (stack)
9. Save to file
10. Load from file
0. Exit
Choice: ";

/// Interactive menu over a tracker
pub struct Menu<R, W> {
    input: R,
    output: W,
    currency_symbol: String,
    default_ledger: PathBuf,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu reading choices from `input` and echoing to `output`
    pub fn new(input: R, output: W, currency_symbol: impl Into<String>, default_ledger: PathBuf) -> Self {
        Self {
            input,
            output,
            currency_symbol: currency_symbol.into(),
            default_ledger,
        }
    }

    /// Run until the user picks exit or input ends
    pub fn run(&mut self, tracker: &mut Tracker) -> TrackerResult<()> {
        loop {
            let Some(choice) = self.prompt(MENU)? else {
                writeln!(self.output)?;
                writeln!(self.output, "Goodbye!")?;
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.add(tracker)?,
                "2" => self.remove(tracker)?,
                "3" => {
                    let all = tracker.snapshot_all();
                    write!(self.output, "{}", format_transaction_list(&all, &self.currency_symbol))?;
                }
                "4" => self.find_by_category(tracker)?,
                "5" => self.find_by_type(tracker)?,
                "6" => self.sort(tracker)?,
                "7" => {
                    write!(self.output, "{}", format_totals(tracker, &self.currency_symbol))?;
                }
                "8" => match tracker.undo_last_action() {
                    Some(action) => writeln!(self.output, "Undo: {}", action)?,
                    None => writeln!(self.output, "Undo history empty.")?,
                },
                "9" => self.save(tracker)?,
                "10" => self.load(tracker)?,
                "0" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn add(&mut self, tracker: &mut Tracker) -> TrackerResult<()> {
        let Some(date) = self.prompt("Date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let date = if date.is_empty() {
            chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
        } else {
            date
        };

        let Some(description) = self.prompt("Description: ")? else {
            return Ok(());
        };
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(());
        };
        let Some(kind) = self.prompt("Type (I = Income, E = Expense): ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt("Amount: ")? else {
            return Ok(());
        };

        let parsed = parse_token("date", &date).and_then(|date| {
            Ok(Transaction::new(
                date,
                description,
                parse_token("category", &category)?,
                parse_kind(&kind)?,
                parse_amount(&amount)?,
            ))
        });
        match parsed {
            Ok(txn) => {
                tracker.add_transaction(txn);
                writeln!(self.output, "Transaction added.")?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn remove(&mut self, tracker: &mut Tracker) -> TrackerResult<()> {
        let Some(description) = self.prompt("Enter description to remove: ")? else {
            return Ok(());
        };

        if tracker.remove_by_description(&description) {
            writeln!(self.output, "Transaction removed.")?;
        } else {
            writeln!(self.output, "No matching transaction found.")?;
        }
        Ok(())
    }

    fn find_by_category(&mut self, tracker: &mut Tracker) -> TrackerResult<()> {
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(());
        };

        let found = tracker.find_all_by_category(&category);
        write!(self.output, "{}", format_transaction_list(found, &self.currency_symbol))?;
        Ok(())
    }

    fn find_by_type(&mut self, tracker: &mut Tracker) -> TrackerResult<()> {
        let Some(kind) = self.prompt("Type (I/E): ")? else {
            return Ok(());
        };

        match parse_kind(&kind) {
            Ok(kind) => {
                let found = tracker.find_all_by_type(kind);
                write!(self.output, "{}", format_transaction_list(found, &self.currency_symbol))?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn sort(&mut self, tracker: &mut Tracker) -> TrackerResult<()> {
        let Some(direction) = self.prompt("1 = Ascending, 2 = Descending: ")? else {
            return Ok(());
        };

        let order = if direction == "1" {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        };
        tracker.sort_list_by_amount(order);

        writeln!(self.output, "Sorted by amount using merge sort.")?;
        let sorted = tracker.list_snapshot();
        write!(self.output, "{}", format_transaction_list(&sorted, &self.currency_symbol))?;
        Ok(())
    }

    fn save(&mut self, tracker: &Tracker) -> TrackerResult<()> {
        let Some(path) = self.prompt_path("Filename to save: ")? else {
            return Ok(());
        };

        match tracker.save_to_file(&path) {
            Ok(()) => writeln!(self.output, "Saved successfully.")?,
            Err(e) => {
                warn!(error = %e, "Save failed");
                writeln!(self.output, "Error saving file.")?;
            }
        }
        Ok(())
    }

    fn load(&mut self, tracker: &mut Tracker) -> TrackerResult<()> {
        let Some(path) = self.prompt_path("Filename to load: ")? else {
            return Ok(());
        };

        match tracker.load_from_file(&path) {
            Ok(report) => {
                writeln!(self.output, "Loaded successfully.")?;
                if let Some(line) = report.stopped_at {
                    writeln!(
                        self.output,
                        "Stopped at malformed line {}; {} transactions loaded.",
                        line, report.loaded
                    )?;
                }
            }
            Err(e) => {
                warn!(error = %e, "Load failed");
                writeln!(self.output, "Error loading file.")?;
            }
        }
        Ok(())
    }

    /// Prompt for a filename; a blank answer selects the default ledger
    fn prompt_path(&mut self, message: &str) -> TrackerResult<Option<PathBuf>> {
        Ok(self.prompt(message)?.map(|answer| {
            if answer.is_empty() {
                self.default_ledger.clone()
            } else {
                PathBuf::from(answer)
            }
        }))
    }

    /// Print a prompt and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, message: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Parse a date or category field: one non-empty word, since the ledger
/// file separates fields with whitespace
pub fn parse_token(field: &str, input: &str) -> TrackerResult<String> {
    let value = input.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(TrackerError::Validation(format!(
            "Invalid {}: '{}'. Use a single word with no spaces",
            field, input
        )));
    }
    Ok(value.to_string())
}

/// Parse a transaction type flag: exactly one character
pub fn parse_kind(input: &str) -> TrackerResult<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TrackerError::Validation(format!(
            "Invalid type: '{}'. Use I for income or E for expense",
            input
        ))),
    }
}

/// Parse a signed decimal amount
pub fn parse_amount(input: &str) -> TrackerResult<f64> {
    input.trim().parse::<f64>().map_err(|_| {
        TrackerError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '4.50' or '2000'",
            input
        ))
    })
}
