pub mod error;
pub mod month;
pub mod entry;
pub mod ledger;
pub mod savings;
pub mod form;

pub use error::{LedgerError, LedgerResult};
pub use month::Month;
pub use entry::{Entry, Amount};
pub use ledger::{Ledger, MonthRecord, Row};
pub use savings::Savings;
pub use form::ExpenseForm;
