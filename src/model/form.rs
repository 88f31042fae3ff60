use std::str::FromStr;

use chrono::NaiveDate;

use crate::model::month::Month;
use crate::model::entry::{Entry, Amount};
use crate::model::ledger::Ledger;
use crate::model::error::{LedgerError, LedgerResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw input for a new expense, as typed in by the user.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ExpenseForm {
    pub month: String,
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub salary: String
}

fn parse_amount(raw: &str) -> Option<Amount> {
    Amount::from_str(raw.trim()).ok()
}

impl ExpenseForm {
    /// Switches the form to `month`, pre-filling the salary already on
    /// record for it.
    pub fn select_month(&mut self, ledger: &Ledger, month: Month) {
        self.month = month.to_string();
        self.salary = ledger.salary(month)
            .map(|salary| salary.to_string())
            .unwrap_or_default();
    }

    pub fn validate(&self) -> LedgerResult<(Month, Entry, Option<Amount>)> {
        let month: Month = self.month.trim().parse()?;

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| LedgerError::InvalidDate(self.date.clone()))?;

        if self.amount.trim().is_empty() {
            return Err(LedgerError::MissingField("amount"));
        }
        let amount = parse_amount(&self.amount)
            .ok_or_else(|| LedgerError::NonNumericAmount(self.amount.clone()))?;

        let salary = match self.salary.trim() {
            "" => None,
            raw => Some(parse_amount(raw)
                .ok_or_else(|| LedgerError::NonNumericSalary(self.salary.clone()))?)
        };

        let entry = Entry::new(date, amount, self.category.trim(), self.description.trim())?;
        return Ok((month, entry, salary));
    }

    /// Validates the form and adds it to `ledger`. The form is cleared only
    /// when the entry was accepted.
    pub fn submit(&mut self, ledger: &Ledger) -> LedgerResult<Ledger> {
        let (month, entry, salary) = self.validate()?;
        let updated = ledger.add_entry(month, entry, salary)?;
        *self = ExpenseForm::default();
        return Ok(updated);
    }
}
