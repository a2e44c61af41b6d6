//! Storage layer for the money tracker
//!
//! Provides the flat-file ledger format plus the atomic write helpers shared
//! with the settings file.

pub mod file_io;
pub mod ledger_file;

pub use file_io::{read_json, write_json_atomic, write_text_atomic};
pub use ledger_file::{format_record, parse_record, read_ledger, write_ledger, ParsedLedger};
