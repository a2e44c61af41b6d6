//! Transaction model
//!
//! A plain data holder for one income or expense entry. Nothing is validated:
//! dates are free-form strings, the type flag accepts any character and the
//! amount may carry either sign.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type flag for income entries
pub const INCOME: char = 'I';

/// Type flag for expense entries
pub const EXPENSE: char = 'E';

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date, expected as YYYY-MM-DD
    date: String,

    /// Free-text description
    description: String,

    /// Category label (case-sensitive)
    category: String,

    /// 'I' for income, 'E' for expense
    #[serde(rename = "type")]
    kind: char,

    /// Signed amount
    amount: f64,
}

impl Transaction {
    /// Create a transaction with all fields
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        kind: char,
        amount: f64,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            category: category.into(),
            kind,
            amount,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn kind(&self) -> char {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_kind(&mut self, kind: char) {
        self.kind = kind;
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    /// Check if this is flagged as income
    pub fn is_income(&self) -> bool {
        self.kind == INCOME
    }

    /// Check if this is flagged as expense
    pub fn is_expense(&self) -> bool {
        self.kind == EXPENSE
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new("0000-00-00", "", "", EXPENSE, 0.0)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | ${:.2} | {}",
            self.date, self.kind, self.category, self.amount, self.description
        )
    }
}
