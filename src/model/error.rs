use thiserror::Error;

use crate::model::{Amount, Month};

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Occurs when the stored ledger cannot be decoded.
    /// `LedgerStore::load` recovers from it with an empty ledger.
    #[error("malformed persisted state: {0}")]
    MalformedPersistedState(#[from] serde_json::Error),
    /// Occurs when a month name is not one of the twelve calendar names.
    #[error("no such month: {0}")]
    InvalidMonth(String),
    /// Occurs when attempting to delete an entry by a position
    /// which does not exist for that month.
    #[error("no entry {index} in {month}")]
    InvalidIndex {
        month: Month,
        index: usize
    },
    #[error("amount is not a number: {0:?}")]
    NonNumericAmount(String),
    #[error("salary is not a number: {0:?}")]
    NonNumericSalary(String),
    #[error("amount cannot be negative: {0}")]
    NegativeAmount(Amount),
    /// Occurs when an entry or salary would push the totals for a month,
    /// or across the ledger, past what an amount can hold.
    #[error("amounts for {0} are too large to add up")]
    AmountOverflow(Month),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error)
}

pub type LedgerResult<T> = Result<T, LedgerError>;
