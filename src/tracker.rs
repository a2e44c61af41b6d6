//! The transaction tracker
//!
//! A `Tracker` keeps every transaction twice: once in a [`DynArray`] in
//! insertion order and once in a [`SinglyLinkedList`] in reverse insertion
//! order (new nodes go at the head). The array is authoritative for search,
//! totals and persistence; the list exists for link-level traversal and the
//! in-place merge sort.
//!
//! Adding keeps both structures holding the same multiset. Two operations
//! deliberately let them drift apart:
//!
//! - [`Tracker::sort_list_by_amount`] reorders only the list.
//! - [`Tracker::remove_by_description`] removes the first match from each
//!   structure independently, so with duplicate descriptions the array and
//!   the list can lose different records.
//!
//! The undo log only records `ADD` and `LOAD` actions. It is a history of
//! human-readable descriptions and never reverts data.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::collections::{DynArray, SinglyLinkedList, Stack};
use crate::error::TrackerResult;
use crate::models::{Transaction, EXPENSE, INCOME};
use crate::storage::{read_ledger, write_ledger};

/// Direction for sorting the list by amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Outcome of [`Tracker::load_from_file`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of records added
    pub loaded: usize,
    /// 1-based line number of the malformed line that ended the load
    pub stopped_at: Option<usize>,
}

impl LoadReport {
    /// True when every non-blank line was loaded
    pub fn is_complete(&self) -> bool {
        self.stopped_at.is_none()
    }
}

/// Dual array/list transaction store with undo log and query buffer
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    entries: DynArray<Transaction>,
    list: SinglyLinkedList<Transaction>,
    undo_log: Stack<String>,
    last_query: Vec<Transaction>,
}

impl Tracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction to both structures and log it
    pub fn add_transaction(&mut self, txn: Transaction) {
        let action = format!(
            "ADD: {} {} {}",
            txn.date(),
            txn.category(),
            txn.description()
        );

        self.list.push_front(txn.clone());
        self.entries.push(txn);
        self.log_action(action);

        debug!(
            array_len = self.entries.len(),
            list_len = self.list.len(),
            "Added transaction"
        );
    }

    /// Remove the first record with this exact description from the array
    /// and, independently, the first matching node from the list.
    ///
    /// Returns true if either structure removed something. Not logged.
    pub fn remove_by_description(&mut self, description: &str) -> bool {
        let from_array = self
            .entries
            .position(|t| t.description() == description)
            .and_then(|index| self.entries.remove(index))
            .is_some();

        let from_list = self
            .list
            .remove_first(|t| t.description() == description)
            .is_some();

        debug!(description, from_array, from_list, "Remove by description");

        from_array || from_list
    }

    /// Array index of the first record in this category
    pub fn find_first_by_category(&self, category: &str) -> Option<usize> {
        self.entries.position(|t| t.category() == category)
    }

    /// Whether any list node is in this category
    pub fn list_contains_category(&self, category: &str) -> bool {
        self.list.contains(|t| t.category() == category)
    }

    /// All array records in this category, in array order.
    ///
    /// Overwrites the query buffer.
    pub fn find_all_by_category(&mut self, category: &str) -> &[Transaction] {
        self.fill_query(|t| t.category() == category)
    }

    /// All array records with this type flag, in array order.
    ///
    /// Overwrites the query buffer.
    pub fn find_all_by_type(&mut self, kind: char) -> &[Transaction] {
        self.fill_query(|t| t.kind() == kind)
    }

    fn fill_query<P>(&mut self, mut predicate: P) -> &[Transaction]
    where
        P: FnMut(&Transaction) -> bool,
    {
        self.last_query.clear();
        self.last_query
            .extend(self.entries.iter().filter(|t| predicate(t)).cloned());
        &self.last_query
    }

    /// Result of the most recent `find_all_by_*` call
    pub fn last_query(&self) -> &[Transaction] {
        &self.last_query
    }

    /// Merge sort the list by amount. The array is not touched.
    pub fn sort_list_by_amount(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self.list.merge_sort_by(|a, b| a.amount() <= b.amount()),
            SortOrder::Descending => self.list.merge_sort_by(|a, b| a.amount() >= b.amount()),
        }
        debug!(?order, list_len = self.list.len(), "Sorted list by amount");
    }

    /// Sum of amounts flagged as income
    pub fn total_income(&self) -> f64 {
        self.sum_of_kind(INCOME)
    }

    /// Sum of amounts flagged as expense
    pub fn total_expenses(&self) -> f64 {
        self.sum_of_kind(EXPENSE)
    }

    /// Income minus expenses
    pub fn net_balance(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }

    fn sum_of_kind(&self, kind: char) -> f64 {
        self.snapshot_all()
            .iter()
            .filter(|t| t.kind() == kind)
            .fold(0.0, |sum, t| sum + t.amount())
    }

    /// Copy of the array contents in array order
    pub fn snapshot_all(&self) -> Vec<Transaction> {
        self.entries.iter().cloned().collect()
    }

    /// Copy of the list contents in list order
    pub fn list_snapshot(&self) -> Vec<Transaction> {
        self.list.iter().cloned().collect()
    }

    pub fn array_len(&self) -> usize {
        self.entries.len()
    }

    pub fn list_len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.list.is_empty()
    }

    /// Current array capacity
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Explicitly resize the array. Shrinking below the current size drops
    /// trailing array records; the list is left alone.
    pub fn resize_capacity(&mut self, capacity: usize) {
        self.entries.resize(capacity);
    }

    /// Write the array contents to a ledger file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> TrackerResult<()> {
        let path = path.as_ref();
        write_ledger(path, self.entries.iter())?;
        info!(path = %path.display(), records = self.entries.len(), "Saved ledger");
        Ok(())
    }

    /// Replace all state with the contents of a ledger file.
    ///
    /// If the file cannot be opened the tracker is left untouched. Otherwise
    /// the array, list, query buffer and undo log are discarded, every parsed
    /// record is added (logging `ADD` each time) and `LOAD: <path>` is logged
    /// last. A malformed line ends the load with the records read so far.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> TrackerResult<LoadReport> {
        let path = path.as_ref();
        let parsed = read_ledger(path)?;

        self.list.clear();
        self.entries.reset();
        self.last_query.clear();
        self.undo_log.clear();

        let loaded = parsed.records.len();
        for txn in parsed.records {
            self.add_transaction(txn);
        }
        self.log_action(format!("LOAD: {}", path.display()));

        if let Some(line) = parsed.stopped_at {
            warn!(path = %path.display(), line, loaded, "Stopped loading at malformed line");
        } else {
            info!(path = %path.display(), loaded, "Loaded ledger");
        }

        Ok(LoadReport {
            loaded,
            stopped_at: parsed.stopped_at,
        })
    }

    /// Push an entry onto the undo log
    pub fn log_action(&mut self, action: impl Into<String>) {
        self.undo_log.push(action.into());
    }

    /// Pop the most recent undo log entry
    pub fn undo_last_action(&mut self) -> Option<String> {
        self.undo_log.pop()
    }

    /// Undo log entries, most recent first
    pub fn history(&self) -> impl Iterator<Item = &str> + '_ {
        self.undo_log.iter().map(String::as_str)
    }

    pub fn history_len(&self) -> usize {
        self.undo_log.len()
    }
}
