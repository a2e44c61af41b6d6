//! Money Tracker - terminal-based personal income and expense ledger
//!
//! This library provides the core of the tracker: a transaction store that
//! keeps every record in both a growable array and a singly linked list,
//! with search, merge sort, totals, an undo-action log and a flat-file
//! persistence format.
//!
//! # Architecture
//!
//! - `models`: the `Transaction` record
//! - `collections`: array, linked list and stack containers
//! - `tracker`: the dual array/list store
//! - `storage`: flat-file ledger format and atomic writes
//! - `export`: CSV and JSON export
//! - `display`: terminal formatting
//! - `config`: paths and user settings
//! - `cli`: interactive menu and ledger commands
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! use money_tracker::models::Transaction;
//! use money_tracker::tracker::Tracker;
//!
//! let mut tracker = Tracker::new();
//! tracker.add_transaction(Transaction::new("2024-01-01", "Coffee", "Food", 'E', 4.50));
//! tracker.add_transaction(Transaction::new("2024-01-02", "Salary", "Work", 'I', 2000.00));
//!
//! assert_eq!(tracker.net_balance(), 1995.50);
//! assert_eq!(tracker.find_all_by_category("Food").len(), 1);
//! ```

pub mod cli;
pub mod collections;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;
pub mod tracker;

pub use error::TrackerError;
pub use tracker::{LoadReport, SortOrder, Tracker};
