use rust_decimal::RoundingStrategy;

use crate::model::entry::{Entry, Amount};
use crate::model::ledger::Ledger;

// Number of decimal places every reported money value is fixed to.
const CURRENCY_PRECISION: u32 = 2;

/// Savings for one month. A month without a salary has no savings figure
/// at all, which is not the same thing as saving nothing.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Savings {
    Amount(Amount),
    Undefined
}

impl Savings {
    pub fn amount(&self) -> Option<Amount> {
        match self {
            Self::Amount(amt) => Some(*amt),
            Self::Undefined => None
        }
    }

    pub fn is_undefined(&self) -> bool {
        return matches!(self, Self::Undefined);
    }
}

impl std::fmt::Display for Savings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let disp = match self {
            Self::Amount(amt) => format!("{:.2}", amt),
            Self::Undefined => "-".to_string()
        };
        write!(f, "{}", disp)
    }
}

pub fn round_currency(value: Amount) -> Amount {
    return value.round_dp_with_strategy(CURRENCY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
}

// `None` when an amount is unreadable or the sum overflows.
fn expenses_sum(entries: &[Entry]) -> Option<Amount> {
    return entries.iter()
        .try_fold(Amount::ZERO, |sum, entry| sum.checked_add(entry.amount?));
}

fn raw_month_savings(entries: &[Entry], salary: Option<Amount>) -> Option<Amount> {
    return salary?.checked_sub(expenses_sum(entries)?);
}

/// Whether the readable amounts of a month, or its salary less them, are
/// out of range.
pub(crate) fn month_overflows(entries: &[Entry], salary: Option<Amount>) -> bool {
    let spent = entries.iter()
        .filter_map(|entry| entry.amount)
        .try_fold(Amount::ZERO, |sum, amount| sum.checked_add(amount));
    match (spent, salary) {
        (None, _) => true,
        (Some(spent), Some(salary)) => salary.checked_sub(spent).is_none(),
        (Some(_), None) => false
    }
}

/// Total spent over `entries`, rounded to cents, or `None` when an amount
/// could not be read.
pub fn month_expenses(entries: &[Entry]) -> Option<Amount> {
    return expenses_sum(entries).map(round_currency);
}

/// Salary left over after `entries`, or `Undefined` without a salary.
pub fn month_savings(entries: &[Entry], salary: Option<Amount>) -> Savings {
    match raw_month_savings(entries, salary) {
        Some(amt) => Savings::Amount(round_currency(amt)),
        None => Savings::Undefined
    }
}

/// Sum of every month's savings, `None` on overflow. Undefined months
/// contribute zero.
pub(crate) fn checked_total_savings(ledger: &Ledger) -> Option<Amount> {
    return ledger.months()
        .filter_map(|(_, record)| raw_month_savings(&record.entries, record.salary))
        .try_fold(Amount::ZERO, |total, savings| total.checked_add(savings));
}

/// Sum of every month's savings. Months without a salary count as zero
/// here even though they report `Undefined` on their own.
pub fn total_savings(ledger: &Ledger) -> Amount {
    if let Some(total) = checked_total_savings(ledger) {
        return round_currency(total);
    }
    // Only reachable with stored data; skip the months that do not fit.
    let mut total = Amount::ZERO;
    for (month, record) in ledger.months() {
        let savings = match raw_month_savings(&record.entries, record.salary) {
            Some(savings) => savings,
            None => continue
        };
        match total.checked_add(savings) {
            Some(sum) => total = sum,
            None => log::warn!("savings for {} overflow the total, skipped", month)
        }
    }
    return round_currency(total);
}
