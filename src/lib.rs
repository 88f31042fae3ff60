mod model;
pub mod backend;

pub use crate::model::{Ledger, MonthRecord, Row, Entry, Amount, Month, Savings, ExpenseForm};
pub use crate::model::{LedgerError, LedgerResult};
pub use crate::model::{entry, error, form, ledger, month, savings};
