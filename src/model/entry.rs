use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};
use serde_with::{serde_as, DefaultOnError};
use colored::Colorize;

use crate::model::error::{LedgerError, LedgerResult};

pub type Amount = Decimal;

/// A single dated expense.
#[serde_as]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    /// `None` only for a stored amount that was not a number; the entry is
    /// kept and its month's savings read as undefined.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub amount: Option<Amount>,
    pub category: String,
    pub description: String
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let amount = self.amount
            .map(|amt| amt.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(f, "{} {} {}: {}",
            self.date.format("%Y-%m-%d"),
            amount,
            self.category.bold(),
            self.description)
    }
}

impl Entry {
    pub fn new(date: NaiveDate, amount: Amount, category: &str, description: &str) -> LedgerResult<Entry> {
        let entry = Entry {
            date,
            amount: Some(amount),
            category: category.to_owned(),
            description: description.to_owned()
        };
        entry.validate()?;
        return Ok(entry);
    }

    /// Checks the field requirements for an entry going into a ledger.
    pub fn validate(&self) -> LedgerResult<()> {
        let amount = self.amount.ok_or(LedgerError::MissingField("amount"))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(LedgerError::NegativeAmount(amount));
        }
        if self.category.trim().is_empty() {
            return Err(LedgerError::MissingField("category"));
        }
        if self.description.trim().is_empty() {
            return Err(LedgerError::MissingField("description"));
        }
        return Ok(());
    }
}
