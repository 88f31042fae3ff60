use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};
use serde_with::{serde_as, DefaultOnError};

use crate::model::month::Month;
use crate::model::entry::{Entry, Amount};
use crate::model::error::{LedgerError, LedgerResult};
use crate::model::savings::{checked_total_savings, month_overflows};

/// One month's salary and expenses.
#[serde_as]
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct MonthRecord {
    #[serde(rename = "expenses", default)]
    pub entries: Vec<Entry>,
    // Empty, null or non-numeric salaries in stored data read as absent.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Amount>
}

/// One entry of the flattened listing, see [`Ledger::rows`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Row<'a> {
    pub month: Month,
    pub index: usize,
    pub salary: Option<Amount>,
    pub entry: &'a Entry
}

/// All monthly records, keyed and iterated in calendar order.
///
/// Mutating operations leave `self` untouched and return the updated ledger,
/// so a caller holding the current value can swap it in after persisting.
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    months: BTreeMap<Month, MonthRecord>
}

impl Ledger {
    pub fn new() -> Ledger {
        return Ledger::default();
    }

    pub fn is_empty(&self) -> bool {
        return self.months.is_empty();
    }

    pub fn record(&self, month: Month) -> Option<&MonthRecord> {
        return self.months.get(&month);
    }

    pub fn entries(&self, month: Month) -> &[Entry] {
        return self.months.get(&month)
            .map(|record| record.entries.as_slice())
            .unwrap_or(&[]);
    }

    pub fn salary(&self, month: Month) -> Option<Amount> {
        return self.months.get(&month)
            .and_then(|record| record.salary);
    }

    pub fn months(&self) -> impl Iterator<Item = (Month, &MonthRecord)> {
        return self.months.iter().map(|(month, record)| (*month, record));
    }

    /// Every entry with its month, position and month salary.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        return self.months().flat_map(|(month, record)| {
            record.entries.iter().enumerate().map(move |(index, entry)| Row {
                month,
                index,
                salary: record.salary,
                entry
            })
        });
    }

    /// Appends `entry` to `month`. A provided salary overwrites the stored
    /// one, otherwise the stored salary is kept. Rejected when the month's
    /// figures or the overall total would no longer add up.
    pub fn add_entry(&self, month: Month, entry: Entry, salary: Option<Amount>) -> LedgerResult<Ledger> {
        entry.validate()?;

        let mut ledger = self.clone();
        let record = ledger.months.entry(month).or_default();
        record.entries.push(entry);
        if salary.is_some() {
            record.salary = salary;
        }
        let index = record.entries.len() - 1;
        let month_fits = !month_overflows(&record.entries, record.salary);

        let total_fits = checked_total_savings(&ledger).is_some()
            || checked_total_savings(self).is_none();
        if !month_fits || !total_fits {
            return Err(LedgerError::AmountOverflow(month));
        }

        log::debug!("added entry {} to {}", index, month);
        return Ok(ledger);
    }

    /// Removes the entry at `index` of `month`. The month record itself,
    /// salary included, stays even when its last entry goes.
    pub fn delete_entry(&self, month: Month, index: usize) -> LedgerResult<Ledger> {
        let in_range = self.months.get(&month)
            .map_or(false, |record| index < record.entries.len());
        if !in_range {
            return Err(LedgerError::InvalidIndex { month, index });
        }

        let mut ledger = self.clone();
        if let Some(record) = ledger.months.get_mut(&month) {
            record.entries.remove(index);
        }

        log::debug!("deleted entry {} from {}", index, month);
        return Ok(ledger);
    }
}
