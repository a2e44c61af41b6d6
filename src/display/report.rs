//! Totals report formatting

use crate::tracker::Tracker;

use super::transaction::format_amount;

/// Format income, expense and net totals for a tracker
pub fn format_totals(tracker: &Tracker, currency_symbol: &str) -> String {
    format!(
        "Total Income   : {}\nTotal Expenses : {}\nNet Balance    : {}\n",
        format_amount(tracker.total_income(), currency_symbol),
        format_amount(tracker.total_expenses(), currency_symbol),
        format_amount(tracker.net_balance(), currency_symbol),
    )
}
