//! Display formatting for terminal output

pub mod report;
pub mod transaction;

pub use report::format_totals;
pub use transaction::{
    format_amount, format_transaction_line, format_transaction_list, format_transaction_register, format_transaction_row,
};
