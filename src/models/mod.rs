//! Core data models for the money tracker

pub mod transaction;

pub use transaction::{Transaction, EXPENSE, INCOME};
